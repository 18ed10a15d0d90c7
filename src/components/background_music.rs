//! Background track and the autoplay / mute plumbing around it.

use celebration_core::{AssetProvider, AudioController, MediaItem, MediaKind, ELEMENT_MISSING};
use dioxus::prelude::*;

use crate::context::{use_assets, use_audio, use_site_config};

/// DOM id of the shared `<audio>` element
pub const AUDIO_ELEMENT_ID: &str = "background-music";

/// Script that starts playback and reports the outcome
fn play_script() -> String {
    format!(
        r#"const el = document.getElementById("{AUDIO_ELEMENT_ID}");
if (!el) {{ return "{ELEMENT_MISSING}: no audio element"; }}
try {{ await el.play(); return "ok"; }}
catch (e) {{ return e.name + ": " + e.message; }}"#
    )
}

fn mute_script(muted: bool) -> String {
    format!(
        r#"const el = document.getElementById("{AUDIO_ELEMENT_ID}");
if (el) {{ el.muted = {muted}; }}
return true;"#
    )
}

/// Try to start the background track. Refusals are recorded on the
/// controller and logged, never shown.
pub async fn play_background(mut audio: Signal<AudioController>) {
    let outcome = document::eval(&play_script()).await;
    match outcome {
        Ok(value) if value.as_str() == Some("ok") => {
            tracing::info!("Background music playing");
            audio.write().playback_started();
        }
        Ok(value) => audio.write().playback_failed(&value.to_string()),
        Err(e) => audio.write().playback_failed(&e.to_string()),
    }
}

/// Push the mute flag to the audio element
pub async fn apply_mute(muted: bool) {
    if let Err(e) = document::eval(&mute_script(muted)).await {
        tracing::warn!("Failed to apply mute: {}", e);
    }
}

/// Pick the background track: the configured file, else the first track
/// in `music/`.
fn load_track(assets: &dyn AssetProvider, explicit: Option<std::path::PathBuf>) -> Option<MediaItem> {
    if let Some(path) = explicit {
        match MediaItem::from_path(1, &path) {
            Ok(item) => return Some(item),
            Err(e) => tracing::warn!("Configured track unavailable: {}", e),
        }
    }
    match assets.list(MediaKind::Music) {
        Ok(tracks) => tracks.into_iter().next(),
        Err(e) => {
            tracing::warn!("No background music: {}", e);
            None
        }
    }
}

/// Looping `<audio>` element, mounted once for the whole session.
///
/// Playback is attempted after the configured autoplay delay. The mute
/// flag is carried onto the element when it mounts, so a toggle made
/// while the track was still loading is not lost.
#[component]
pub fn BackgroundMusic() -> Element {
    let config = use_site_config();
    let assets = use_assets();
    let mut audio = use_audio();
    let mut track: Signal<Option<MediaItem>> = use_signal(|| None);

    let delay = config.autoplay_delay();
    let explicit = config.audio_track.clone();

    use_effect(move || {
        let assets = assets.clone();
        let explicit = explicit.clone();
        spawn(async move {
            let loaded =
                tokio::task::spawn_blocking(move || load_track(assets.as_ref(), explicit)).await;
            let Ok(Some(item)) = loaded else {
                return;
            };
            tracing::info!(track = %item.name, "Background track loaded");
            track.set(Some(item));

            tokio::time::sleep(delay).await;
            play_background(audio).await;
        });
    });

    let Some(item) = track() else {
        return rsx! {};
    };
    let muted = audio.read().is_muted();

    rsx! {
        audio {
            id: AUDIO_ELEMENT_ID,
            src: "{item.source}",
            r#loop: true,
            preload: "auto",
            muted: muted,
            onmounted: move |_| {
                let muted = audio.write().track_mounted();
                spawn(apply_mute(muted));
            },
        }
    }
}
