//! Background music state.
//!
//! The shell tries to start playback shortly after launch. Webviews may
//! refuse autoplay until the user interacts, so the controller keeps a
//! one-shot fallback: the first click anywhere retries playback once and
//! then disarms, whatever the outcome.
//!
//! Clicks that arrive before the track element exists do not spend the
//! fallback, and a retry that finds no element re-arms it.

/// Prefix of the failure reason reported when no audio element exists yet
pub const ELEMENT_MISSING: &str = "NotFound";

/// Playback state of the background track
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Playback {
    /// Nothing attempted yet
    #[default]
    Idle,
    Playing,
    /// Autoplay was refused; waiting for a user gesture
    Blocked,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AudioController {
    muted: bool,
    playback: Playback,
    gesture_armed: bool,
    track_mounted: bool,
}

impl Default for AudioController {
    fn default() -> Self {
        Self {
            muted: false,
            playback: Playback::Idle,
            gesture_armed: true,
            track_mounted: false,
        }
    }
}

impl AudioController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    pub fn playback(&self) -> Playback {
        self.playback
    }

    /// Whether the first-click fallback is still listening
    pub fn is_gesture_armed(&self) -> bool {
        self.gesture_armed
    }

    /// Whether the track element has been rendered
    pub fn is_track_mounted(&self) -> bool {
        self.track_mounted
    }

    /// The track element is in the document; play attempts can now reach
    /// it. Returns the mute flag to apply to the new element.
    pub fn track_mounted(&mut self) -> bool {
        self.track_mounted = true;
        self.muted
    }

    /// Flip the mute flag and return the new value to apply to the output
    pub fn toggle_mute(&mut self) -> bool {
        self.muted = !self.muted;
        tracing::info!(muted = self.muted, "mute toggled");
        self.muted
    }

    pub fn playback_started(&mut self) {
        self.playback = Playback::Playing;
    }

    /// Record a refused play attempt. The failure is logged and otherwise
    /// ignored. A failure caused by a missing element re-arms the
    /// first-click fallback.
    pub fn playback_failed(&mut self, reason: &str) {
        tracing::warn!("Audio play failed: {}", reason);
        if self.playback == Playback::Playing {
            return;
        }
        if reason.starts_with(ELEMENT_MISSING) {
            self.gesture_armed = true;
        } else {
            self.playback = Playback::Blocked;
        }
    }

    /// Called for every document click. Returns `true` at most once per
    /// arming: on the first click after the track is mounted, when the
    /// shell should retry playback. Clicks before the track is mounted
    /// leave the fallback armed.
    pub fn user_gesture(&mut self) -> bool {
        if !self.gesture_armed {
            return false;
        }
        if self.playback == Playback::Playing {
            self.gesture_armed = false;
            return false;
        }
        if !self.track_mounted {
            tracing::debug!("click before the track is mounted, keeping fallback armed");
            return false;
        }
        self.gesture_armed = false;
        tracing::debug!(playback = ?self.playback, "first user gesture");
        true
    }
}
