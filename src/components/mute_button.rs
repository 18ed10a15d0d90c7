use dioxus::prelude::*;

use super::background_music::apply_mute;
use crate::context::use_audio;

/// Fixed corner button that toggles the background track.
#[component]
pub fn MuteButton() -> Element {
    let mut audio = use_audio();
    let muted = audio.read().is_muted();

    let on_toggle = move |_| {
        let muted = audio.write().toggle_mute();
        spawn(apply_mute(muted));
    };

    rsx! {
        button {
            class: if muted { "mute-btn muted" } else { "mute-btn" },
            title: if muted { "Unmute music" } else { "Mute music" },
            onclick: on_toggle,
            if muted { "🔇" } else { "🔊" }
        }
    }
}
