//! Special page - a constellation of 26 reasons.
//!
//! Each star hides one reason. Stars reveal on click, or all at once in
//! order with "Reveal All". Reset clears them and stops a running
//! sequence; leaving the page drops the sequence task with the page.

use std::collections::BTreeSet;
use std::time::Duration;

use celebration_core::{drive_reveal_all, PageId, RevealTracker, StarPosition, REASONS};
use dioxus::prelude::*;

use crate::components::{ConstellationNav, PageHeader, Starfield};
use crate::context::use_site_config;

/// How long the click pulse stays on a star
const CLICK_PULSE: Duration = Duration::from_millis(600);

fn progress_text(revealed: usize, total: usize) -> String {
    format!("{revealed} of {total} reasons discovered")
}

#[component]
pub fn Special(on_navigate: EventHandler<PageId>) -> Element {
    let config = use_site_config();
    let step = config.reveal_step();

    let mut tracker = use_signal(|| RevealTracker::new(REASONS.len() as u32));
    let mut pulsing: Signal<BTreeSet<u32>> = use_signal(BTreeSet::new);

    let on_reveal_all = move |_| {
        let run = tracker.write().begin_reveal_all();
        spawn(async move {
            let applied =
                drive_reveal_all(&run, step, |run, id| tracker.write().apply(run, id)).await;
            tracker.write().complete(&run);
            tracing::debug!(applied, "reveal all finished");
        });
    };

    let on_reset = move |_| tracker.write().reset();

    let (revealed, total, percent) = {
        let t = tracker.read();
        (t.len(), t.total(), t.progress() * 100.0)
    };
    let progress = progress_text(revealed, total);
    let counter = format!("{revealed}/{total} discovered");
    let bar_style = format!("width: {percent:.1}%;");

    let stars: Vec<_> = REASONS
        .iter()
        .enumerate()
        .map(|(index, reason)| {
            let position = StarPosition::for_index(index);
            let mut class = String::from("reason-star");
            if tracker.read().is_revealed(reason.id) {
                class.push_str(" revealed");
            }
            if pulsing.read().contains(&reason.id) {
                class.push_str(" star-clicked");
            }
            let popup = format!("reason-popup {}", position.popup().class());
            (reason, class, position.style(), popup)
        })
        .collect();

    rsx! {
        div { class: "page special-page",
            Starfield { count: 60 }

            PageHeader {
                title: "💕 26 Reasons You're My Universe",
                subtitle: "Click each star to discover why you're absolutely extraordinary...",
                on_navigate,
            }

            main { class: "page-content",
                div { class: "control-buttons",
                    button { class: "reveal-btn", onclick: on_reveal_all, "✨ Reveal All Stars ✨" }
                    button { class: "reset-btn", onclick: on_reset, "🌙 Reset Journey 🌙" }
                }

                div { class: "reasons-sky",
                    for (reason, class, style, popup) in stars {
                        div {
                            key: "{reason.id}",
                            class: "{class}",
                            style: "{style}",
                            onclick: move |_| {
                                let id = reason.id;
                                tracker.write().reveal(id);
                                pulsing.write().insert(id);
                                spawn(async move {
                                    tokio::time::sleep(CLICK_PULSE).await;
                                    pulsing.write().remove(&id);
                                });
                            },
                            div { class: "star-core",
                                span { class: "star-number", "{reason.id}" }
                            }
                            if tracker.read().is_revealed(reason.id) {
                                div { class: "{popup}",
                                    div { class: "popup-emoji", "{reason.emoji}" }
                                    h3 { class: "popup-title", "{reason.title}" }
                                    p { class: "popup-text", "{reason.text}" }
                                    div { class: "popup-counter", "{counter}" }
                                }
                            }
                        }
                    }
                }

                div { class: "progress-indicator",
                    div { class: "progress-text", "{progress}" }
                    div { class: "progress-bar",
                        div { class: "progress-fill", style: "{bar_style}" }
                    }
                }
            }

            ConstellationNav { current: PageId::Special, on_navigate }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_text() {
        assert_eq!(progress_text(0, 26), "0 of 26 reasons discovered");
        assert_eq!(progress_text(26, 26), "26 of 26 reasons discovered");
    }
}
