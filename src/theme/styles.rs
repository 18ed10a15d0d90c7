//! Global CSS styles for the celebration site.
//!
//! Night sky, gold stars and handwritten titles. Palette variables come
//! from [`super::css_variables`].

pub const GLOBAL_STYLES: &str = r#"
/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html, body {
  width: 100%;
  height: 100%;
  overflow: hidden;
  -webkit-font-smoothing: antialiased;
}

body {
  font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif;
  background: var(--night-deep);
  color: var(--soft-white);
}

.App {
  width: 100vw;
  height: 100vh;
}

.script {
  font-family: 'Brush Script MT', cursive, 'Dancing Script', serif;
  font-style: italic;
}

/* === Page Frame === */
.page {
  position: fixed;
  inset: 0;
  overflow-y: auto;
  overflow-x: hidden;
  background: radial-gradient(ellipse at bottom, var(--night-glow) 0%, var(--night-mid) 45%, var(--night-deep) 100%);
}

.page.chats-page, .page.wishes-page {
  background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
}

.page-header {
  position: relative;
  z-index: 10;
  padding: 2rem;
  text-align: center;
  background: rgba(255, 255, 255, 0.06);
  backdrop-filter: blur(20px);
  box-shadow: 0 4px 20px rgba(0, 0, 0, 0.2);
}

.page-header h1 {
  font-family: 'Brush Script MT', cursive, serif;
  font-size: 2.6rem;
  color: var(--star-yellow);
  text-shadow: 0 0 20px rgba(255, 235, 59, 0.4);
}

.page-header p {
  margin-top: 0.5rem;
  color: var(--text-muted);
  font-style: italic;
}

.back-btn {
  position: absolute;
  left: 2rem;
  top: 50%;
  transform: translateY(-50%);
  background: rgba(255, 255, 255, 0.1);
  border: 2px solid var(--star-yellow);
  color: var(--star-yellow);
  padding: 0.5rem 1rem;
  border-radius: 25px;
  cursor: pointer;
  transition: all 0.3s ease;
}

.back-btn:hover {
  background: var(--star-yellow);
  color: #333;
}

.page-content {
  position: relative;
  z-index: 5;
  max-width: 1200px;
  margin: 0 auto;
  padding: 3rem 2rem 8rem;
}

/* === Stars === */
.stars-container, .falling-stars {
  position: fixed;
  inset: 0;
  pointer-events: none;
  z-index: 0;
}

.star {
  position: absolute;
  width: 2px;
  height: 2px;
  border-radius: 50%;
  animation: twinkle infinite;
}

.star:nth-child(3n) { background: #fff; box-shadow: 0 0 6px #fff; }
.star:nth-child(3n+1) { background: var(--star-yellow); box-shadow: 0 0 6px var(--star-yellow); }
.star:nth-child(3n+2) { background: var(--lavender); box-shadow: 0 0 6px var(--lavender); }

@keyframes twinkle {
  0%, 100% { opacity: 0.3; transform: scale(1); }
  50% { opacity: 1; transform: scale(1.2); }
}

.falling-star {
  position: absolute;
  width: 4px;
  height: 4px;
  background: #fff;
  border-radius: 50%;
  box-shadow: 0 0 8px #fff;
  animation: fall infinite linear;
}

.falling-star::after {
  content: '';
  position: absolute;
  width: 80px;
  height: 1px;
  background: linear-gradient(90deg, rgba(255,255,255,0) 0%, rgba(255,255,255,0.8) 50%, rgba(255,255,255,0) 100%);
  transform: translateX(-75px) translateY(2px);
}

@keyframes fall {
  0% { transform: translateY(-100vh) rotate(45deg); opacity: 1; }
  100% { transform: translateY(100vh) translateX(-100px) rotate(45deg); opacity: 0; }
}

@keyframes glow {
  0% { text-shadow: 0 0 20px rgba(255, 235, 59, 0.5); }
  100% { text-shadow: 0 0 35px rgba(255, 235, 59, 0.9), 0 0 50px rgba(255, 107, 157, 0.4); }
}

@keyframes heartbeat {
  0%, 100% { transform: scale(1); }
  50% { transform: scale(1.15); }
}

@keyframes fadeIn {
  from { opacity: 0; }
  to { opacity: 1; }
}

@keyframes scaleIn {
  from { transform: scale(0.8); opacity: 0; }
  to { transform: scale(1); opacity: 1; }
}

/* === Landing === */
.landing-page {
  display: flex;
  align-items: center;
  justify-content: center;
}

.landing-content {
  position: relative;
  z-index: 10;
  width: 100%;
  max-width: 800px;
  padding: 2rem;
  text-align: center;
}

.magic-circle {
  background: rgba(255, 255, 255, 0.05);
  backdrop-filter: blur(20px);
  border-radius: 30px;
  padding: 2.5rem 3rem;
  border: 1px solid rgba(255, 255, 255, 0.1);
  box-shadow: 0 25px 45px rgba(0, 0, 0, 0.3), inset 0 1px 0 rgba(255, 255, 255, 0.1);
}

.main-title .line1 { display: block; font-size: 2.2rem; color: #e8eaf6; }
.main-title .line2 { display: block; font-size: 3.5rem; color: var(--star-yellow); margin: 0.5rem 0; animation: glow 2s ease-in-out infinite alternate; }
.main-title .heart { display: block; font-size: 2.5rem; margin-top: 1rem; animation: heartbeat 1.5s ease-in-out infinite; }

.countdown-subtitle {
  font-size: 1.3rem;
  color: var(--lavender);
  margin: 1.5rem 0 1rem;
}

.time-display {
  display: flex;
  align-items: center;
  justify-content: center;
  gap: 1rem;
}

.time-card {
  display: flex;
  flex-direction: column;
  min-width: 90px;
  padding: 1rem;
  border-radius: 20px;
  background: rgba(255, 255, 255, 0.08);
  border: 1px solid rgba(255, 235, 59, 0.3);
}

.time-number {
  font-size: 2.8rem;
  font-weight: bold;
  color: var(--star-yellow);
  font-family: monospace;
}

.time-label {
  font-size: 0.8rem;
  text-transform: uppercase;
  letter-spacing: 2px;
  color: var(--text-muted);
}

.time-separator {
  font-size: 2.5rem;
  color: var(--star-yellow);
  animation: twinkle 1s infinite;
}

.celebration-title {
  font-size: 2.4rem;
  color: var(--star-yellow);
  animation: glow 1.5s ease-in-out infinite alternate;
}

.celebration-subtitle {
  margin-top: 0.5rem;
  color: var(--lavender);
  font-style: italic;
}

.explore-btn {
  margin-top: 2rem;
  padding: 1rem 2.5rem;
  border: none;
  border-radius: 50px;
  background: linear-gradient(45deg, var(--primary-pink), var(--accent-purple));
  color: #fff;
  font-size: 1.2rem;
  cursor: pointer;
  box-shadow: 0 10px 30px rgba(255, 107, 157, 0.4);
  transition: all 0.3s ease;
}

.explore-btn:hover {
  transform: translateY(-3px) scale(1.03);
}

/* === Moon === */
.moon {
  position: absolute;
  top: 8%;
  right: 8%;
  width: 120px;
  height: 120px;
  background: radial-gradient(circle at 30% 30%, var(--moonlight), #e6e6d3);
  border-radius: 50%;
  box-shadow: 0 0 40px rgba(245, 245, 220, 0.4);
  cursor: grab;
  user-select: none;
  transition: transform 0.8s ease, box-shadow 0.3s ease;
  z-index: 100;
}

.moon.dragging {
  cursor: grabbing;
  transition: none;
  box-shadow: 0 0 80px rgba(245, 245, 220, 0.8);
  z-index: 200;
}

.moon-crater {
  position: absolute;
  background: #d4d4be;
  border-radius: 50%;
  box-shadow: inset 2px 2px 4px rgba(0, 0, 0, 0.2);
}

.crater1 { width: 12px; height: 12px; top: 25px; left: 35px; }
.crater2 { width: 8px; height: 8px; top: 55px; left: 65px; }
.crater3 { width: 15px; height: 15px; top: 75px; left: 25px; }

.moon-glow {
  position: absolute;
  inset: -30px;
  border-radius: 50%;
  background: radial-gradient(circle, rgba(245, 245, 220, 0.1) 0%, transparent 70%);
}

.moon-hint {
  position: absolute;
  top: -40px;
  left: 50%;
  transform: translateX(-50%);
  background: rgba(255, 235, 59, 0.9);
  color: #333;
  padding: 0.5rem 1rem;
  border-radius: 20px;
  font-size: 0.8rem;
  white-space: nowrap;
}

.drag-capture {
  position: fixed;
  inset: 0;
  z-index: 150;
  cursor: grabbing;
}

.surprise-message {
  position: fixed;
  inset: 0;
  z-index: 1000;
  display: flex;
  align-items: center;
  justify-content: center;
  background: rgba(0, 0, 0, 0.8);
  backdrop-filter: blur(10px);
  animation: fadeIn 0.5s ease-out;
}

.surprise-content {
  max-width: 560px;
  padding: 2.5rem 3rem;
  border-radius: 30px;
  text-align: center;
  background: rgba(255, 255, 255, 0.1);
  border: 2px solid rgba(255, 235, 59, 0.5);
  animation: scaleIn 0.5s ease-out;
}

.surprise-content h2 { color: var(--star-yellow); font-size: 2.5rem; margin-bottom: 1rem; }
.surprise-content p { font-size: 1.2rem; margin: 1rem 0; }

.surprise-btn, .reveal-btn, .reset-btn {
  padding: 0.8rem 1.8rem;
  border: none;
  border-radius: 25px;
  font-size: 1rem;
  font-weight: bold;
  cursor: pointer;
  transition: all 0.3s ease;
}

.surprise-btn, .reveal-btn {
  background: linear-gradient(45deg, var(--star-yellow), var(--secondary-gold));
  color: #333;
}

.reset-btn {
  background: rgba(255, 255, 255, 0.1);
  color: var(--lavender);
  border: 2px solid var(--lavender);
}

.reveal-btn:disabled {
  opacity: 0.6;
  cursor: progress;
}

/* === Constellation Navigation === */
.constellation-nav {
  position: fixed;
  right: 2rem;
  top: 50%;
  transform: translateY(-50%);
  z-index: 500;
}

.constellation-nav ul {
  list-style: none;
  display: flex;
  flex-direction: column;
  gap: 1.6rem;
  border-right: 2px dashed rgba(255, 215, 0, 0.4);
  padding-right: 1rem;
}

.nav-star {
  position: relative;
  width: 22px;
  height: 22px;
  border: none;
  background: transparent;
  cursor: pointer;
}

.nav-star .star-core {
  position: absolute;
  inset: 5px;
  border-radius: 50%;
  background: var(--secondary-gold);
  box-shadow: 0 0 10px var(--secondary-gold);
}

.nav-star.active .star-core {
  background: var(--primary-pink);
  box-shadow: 0 0 16px var(--primary-pink);
  animation: heartbeat 1.5s ease-in-out infinite;
}

.nav-star::after {
  content: attr(data-label);
  position: absolute;
  right: 32px;
  top: 50%;
  transform: translateY(-50%);
  white-space: nowrap;
  font-size: 0.8rem;
  color: var(--star-yellow);
  opacity: 0;
  transition: opacity 0.3s ease;
}

.nav-star:hover::after { opacity: 1; }

/* === Nav Dots === */
.nav-dots {
  position: fixed;
  bottom: 2rem;
  left: 50%;
  transform: translateX(-50%);
  display: flex;
  gap: 0.8rem;
  padding: 0.6rem 1rem;
  border-radius: 30px;
  background: rgba(0, 0, 0, 0.3);
  backdrop-filter: blur(10px);
  z-index: 500;
}

.nav-dot {
  width: 44px;
  height: 44px;
  border-radius: 50%;
  border: 2px solid transparent;
  background: rgba(255, 255, 255, 0.15);
  font-size: 1.2rem;
  cursor: pointer;
}

.nav-dot.active {
  border-color: var(--star-yellow);
  background: rgba(255, 235, 59, 0.25);
}

/* === Mute Button === */
.mute-btn {
  position: fixed;
  bottom: 20px;
  left: 20px;
  width: 55px;
  height: 55px;
  border-radius: 50%;
  border: 2px solid var(--star-yellow);
  background: rgba(0, 0, 0, 0.8);
  color: var(--star-yellow);
  font-size: 1.3rem;
  cursor: pointer;
  z-index: 9999;
  transition: all 0.3s ease;
}

.mute-btn:hover { transform: scale(1.1); }

.mute-btn.muted {
  background: rgba(255, 107, 157, 0.8);
  border-color: var(--primary-pink);
  color: #fff;
}

/* === Loading / Empty === */
.loading-message, .empty-gallery {
  text-align: center;
  padding: 4rem 1rem;
  color: var(--text-muted);
}

.loading-spinner {
  width: 50px;
  height: 50px;
  margin: 0 auto 1rem;
  border: 4px solid rgba(255, 255, 255, 0.2);
  border-top-color: var(--star-yellow);
  border-radius: 50%;
  animation: spin 1s linear infinite;
}

@keyframes spin {
  to { transform: rotate(360deg); }
}

.upload-instructions {
  max-width: 520px;
  margin: 1.5rem auto 0;
  padding: 1.5rem 2rem;
  text-align: left;
  border-radius: 20px;
  background: rgba(255, 255, 255, 0.08);
}

.upload-instructions h3 { color: var(--star-yellow); text-align: center; margin-bottom: 1rem; }
.upload-instructions ol { margin: 1rem 0 1rem 1.2rem; line-height: 1.8; }
.upload-instructions code { color: var(--primary-pink); }
.upload-instructions .footer { text-align: center; }

/* === Envelopes === */
.envelopes-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(220px, 1fr));
  gap: 2rem;
}

.envelope-container { position: relative; min-height: 180px; }

.envelope {
  position: relative;
  height: 150px;
  border-radius: 8px;
  cursor: pointer;
  background: linear-gradient(135deg, #fce4ec, #f8bbd0);
  box-shadow: 0 10px 30px rgba(0, 0, 0, 0.3);
  transition: transform 0.4s ease;
}

.envelope:hover { transform: translateY(-6px) rotate(-1deg); }

.envelope.opened {
  height: 40px;
  cursor: default;
  opacity: 0.7;
}

.envelope-seal {
  position: absolute;
  top: 50%;
  left: 50%;
  transform: translate(-50%, -50%);
  font-size: 2rem;
}

.envelope.opened .envelope-seal { display: none; }

.envelope-label {
  position: absolute;
  bottom: 10px;
  width: 100%;
  text-align: center;
  color: #880e4f;
  font-family: 'Brush Script MT', cursive;
  font-size: 1.2rem;
}

.photo-reveal {
  position: relative;
  margin-top: -20px;
  border-radius: 12px;
  overflow: hidden;
  cursor: zoom-in;
  animation: scaleIn 0.6s ease-out;
}

.photo-reveal img { display: block; width: 100%; height: 220px; object-fit: cover; }

.photo-overlay, .chat-overlay, .video-overlay {
  position: absolute;
  inset: 0;
  display: flex;
  align-items: center;
  justify-content: center;
  background: rgba(0, 0, 0, 0.4);
  opacity: 0;
  transition: opacity 0.3s ease;
}

.photo-reveal:hover .photo-overlay,
.chat-image:hover .chat-overlay,
.video-tile:hover .video-overlay { opacity: 1; }

/* === Video Collage === */
.video-collage {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(200px, 1fr));
  grid-auto-rows: 200px;
  grid-auto-flow: dense;
  gap: 1rem;
}

.video-tile {
  position: relative;
  overflow: hidden;
  border-radius: 16px;
  cursor: pointer;
  box-shadow: 0 8px 25px rgba(0, 0, 0, 0.4);
}

.video-tile video { width: 100%; height: 100%; object-fit: cover; }
.video-tile.large { grid-column: span 2; grid-row: span 2; }
.video-tile.wide { grid-column: span 2; }
.video-tile.tall { grid-row: span 2; }
.video-tile.medium { grid-row: span 1; }
.video-overlay .play-icon { font-size: 3rem; }

/* === Chat Timeline === */
.chat-timeline {
  position: relative;
  max-width: 800px;
  margin: 0 auto;
}

.chat-timeline::before {
  content: '';
  position: absolute;
  left: 50%;
  top: 0;
  bottom: 0;
  width: 4px;
  transform: translateX(-50%);
  border-radius: 2px;
  background: linear-gradient(to bottom, var(--primary-pink), var(--secondary-gold), var(--accent-purple));
}

.chat-item {
  position: relative;
  margin: 3rem 0;
  cursor: pointer;
  animation: fadeIn 0.6s ease-out;
}

.chat-item.left { padding-right: 50%; }
.chat-item.right { padding-left: 50%; }

.chat-content {
  margin: 0 2rem;
  padding: 1rem;
  border-radius: 20px;
  background: rgba(255, 255, 255, 0.1);
  backdrop-filter: blur(10px);
}

.chat-image { position: relative; border-radius: 12px; overflow: hidden; }
.chat-image img { display: block; width: 100%; }
.chat-info h3 { margin-top: 0.8rem; color: var(--star-yellow); }
.chat-date { margin-top: 0.4rem; font-size: 0.85rem; color: var(--text-muted); }

/* === Lightbox === */
.lightbox {
  position: fixed;
  inset: 0;
  z-index: 2000;
  display: flex;
  align-items: center;
  justify-content: center;
  background: rgba(0, 0, 0, 0.92);
  outline: none;
  animation: fadeIn 0.3s ease-out;
}

.lightbox-content {
  position: relative;
  max-width: 90vw;
  max-height: 90vh;
  text-align: center;
  animation: scaleIn 0.3s ease-out;
}

.lightbox-content img, .lightbox-content video {
  max-width: 85vw;
  max-height: 75vh;
  border-radius: 12px;
  box-shadow: 0 20px 60px rgba(0, 0, 0, 0.6);
}

.lightbox-close {
  position: absolute;
  top: -45px;
  right: 0;
  border: none;
  background: none;
  color: #fff;
  font-size: 2.5rem;
  cursor: pointer;
}

.lightbox-nav {
  position: absolute;
  top: 50%;
  transform: translateY(-50%);
  width: 50px;
  height: 50px;
  border-radius: 50%;
  border: 2px solid var(--star-yellow);
  background: rgba(0, 0, 0, 0.5);
  color: var(--star-yellow);
  font-size: 1.5rem;
  cursor: pointer;
}

.lightbox-nav.prev { left: -70px; }
.lightbox-nav.next { right: -70px; }

.lightbox-caption { margin-top: 1rem; }
.lightbox-caption h3 { color: var(--star-yellow); }
.lightbox-counter { color: var(--text-muted); font-size: 0.9rem; }

/* === Reasons Constellation === */
.control-buttons {
  display: flex;
  justify-content: center;
  gap: 1rem;
  margin-top: 1.2rem;
}

.reasons-sky {
  position: relative;
  height: 620px;
}

.reason-star {
  position: absolute;
  width: 60px;
  height: 60px;
  cursor: pointer;
  animation: fadeIn 0.8s ease-out backwards;
}

.reason-star .star-core {
  position: absolute;
  inset: 10px;
  display: flex;
  align-items: center;
  justify-content: center;
  border-radius: 50%;
  background: radial-gradient(circle, var(--star-yellow), var(--secondary-gold));
  box-shadow: 0 0 20px rgba(255, 215, 0, 0.6);
  transition: transform 0.3s ease;
}

.reason-star:hover .star-core { transform: scale(1.2); }

.reason-star.revealed .star-core {
  background: radial-gradient(circle, #fff, var(--primary-pink));
  box-shadow: 0 0 30px rgba(255, 107, 157, 0.8);
}

.reason-star.star-clicked .star-core { animation: heartbeat 0.6s ease-in-out; }

.star-number { color: #333; font-weight: bold; }

.reason-popup {
  position: absolute;
  left: 50%;
  width: 240px;
  padding: 1rem;
  transform: translateX(-50%);
  border-radius: 16px;
  text-align: center;
  background: rgba(20, 10, 50, 0.95);
  border: 1px solid rgba(255, 235, 59, 0.4);
  z-index: 50;
  animation: scaleIn 0.4s ease-out;
}

.reason-popup.popup-below { top: 70px; }
.reason-popup.popup-above { bottom: 70px; }
.popup-emoji { font-size: 2rem; }
.popup-title { color: var(--star-yellow); margin: 0.3rem 0; }
.popup-text { font-size: 0.9rem; line-height: 1.4; }
.popup-counter { margin-top: 0.5rem; font-size: 0.75rem; color: var(--text-muted); }

.progress-indicator {
  max-width: 500px;
  margin: 2rem auto 0;
  text-align: center;
}

.progress-bar {
  height: 10px;
  margin-top: 0.6rem;
  border-radius: 5px;
  overflow: hidden;
  background: rgba(255, 255, 255, 0.1);
}

.progress-fill {
  height: 100%;
  background: linear-gradient(90deg, var(--primary-pink), var(--star-yellow));
  transition: width 0.3s ease;
}

/* === Wishes === */
.wishes-container {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
  gap: 2rem;
}

.wish-card {
  padding: 2rem;
  border-radius: 20px;
  background: rgba(255, 255, 255, 0.12);
  backdrop-filter: blur(10px);
  box-shadow: 0 10px 30px rgba(0, 0, 0, 0.2);
  line-height: 1.7;
}

.wish-card.main-wish { grid-column: 1 / -1; }
.wish-icon { font-size: 2.5rem; margin-bottom: 0.6rem; }
.wish-card h2 { color: var(--star-yellow); margin-bottom: 0.8rem; }

.final-message {
  margin-top: 3rem;
  text-align: center;
}

.final-message h2 {
  font-size: 2.4rem;
  color: var(--star-yellow);
  animation: glow 2s ease-in-out infinite alternate;
}

@media (max-width: 768px) {
  .back-btn { position: static; transform: none; margin-bottom: 1rem; }
  .constellation-nav { right: 0.8rem; }
  .time-card { min-width: 70px; }
  .time-number { font-size: 2rem; }
  .chat-item.left, .chat-item.right { padding: 0; }
  .lightbox-nav.prev { left: 0; }
  .lightbox-nav.next { right: 0; }
  .mute-btn { bottom: 15px; left: 15px; width: 50px; height: 50px; }
}
"#;
