//! Landing page - the countdown under the night sky.
//!
//! Shows the countdown to the configured target, then a celebration
//! message once it is reached. The moon in the corner hides a surprise.

use celebration_core::{Countdown, CountdownClock, MoonState, PageId};
use chrono::Local;
use dioxus::prelude::*;

use crate::components::{ConstellationNav, Starfield};
use crate::context::use_site_config;

/// "26th", "21st", "112th"
fn ordinal(n: u32) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{n}{suffix}")
}

/// Landing page component.
#[component]
pub fn Landing(on_navigate: EventHandler<PageId>) -> Element {
    let config = use_site_config();

    let target = config.countdown_target.clone();
    let mut countdown: Signal<(CountdownClock, Countdown)> = use_signal(move || {
        let now = Local::now();
        let mut clock = CountdownClock::for_target(&target, &now);
        let value = clock.tick(&now);
        (clock, value)
    });

    // One-second tick, dropped with the page
    use_effect(move || {
        spawn(async move {
            loop {
                tokio::time::sleep(std::time::Duration::from_secs(1)).await;
                let mut state = countdown.write();
                let value = state.0.tick(&Local::now());
                state.1 = value;
                if value.reached {
                    break;
                }
            }
        });
    });

    let value = countdown.read().1;
    let (hours, minutes, seconds) = value.padded();
    let title_age = format!("Happy {} Birthday", ordinal(config.age));
    let title_name = format!("Beautiful {}", config.celebrant);

    rsx! {
        div { class: "page landing-page",
            Starfield { count: 50, falling: 8 }
            Moon {}

            div { class: "landing-content",
                div { class: "magic-circle",
                    h1 { class: "main-title script",
                        span { class: "line1", "{title_age}" }
                        span { class: "line2", "{title_name}" }
                        span { class: "heart", "💕" }
                    }

                    if value.reached {
                        div { class: "celebration-message",
                            h2 { class: "celebration-title", "🎉 IT'S YOUR BIRTHDAY! 🎉" }
                            p { class: "celebration-subtitle", "The stars aligned just for you tonight!" }
                        }
                    } else {
                        div { class: "countdown-section",
                            h2 { class: "countdown-subtitle", "Your magical day begins in:" }
                            div { class: "time-display",
                                TimeCard { value: hours, label: "Hours" }
                                div { class: "time-separator", ":" }
                                TimeCard { value: minutes, label: "Minutes" }
                                div { class: "time-separator", ":" }
                                TimeCard { value: seconds, label: "Seconds" }
                            }
                        }
                    }

                    button {
                        class: "explore-btn",
                        onclick: move |_| on_navigate.call(PageId::Photos),
                        "✨ Enter Your Magical World ✨"
                    }
                }
            }

            ConstellationNav { current: PageId::Landing, on_navigate }
        }
    }
}

#[component]
fn TimeCard(value: String, label: &'static str) -> Element {
    rsx! {
        div { class: "time-card",
            span { class: "time-number", "{value}" }
            span { class: "time-label", "{label}" }
        }
    }
}

/// Draggable moon with the hidden message.
///
/// While a drag is in progress a transparent layer covers the page and
/// receives pointer moves and the release; it is removed on release.
#[component]
fn Moon() -> Element {
    let config = use_site_config();
    let celebrant = config.celebrant.clone();
    let settle_delay = config.moon_settle();
    let mut moon = use_signal(MoonState::new);

    let state = moon.read().clone();
    let transform = format!("transform: {};", state.transform());

    let on_release = move |_| {
        // The capture layer swallows the native click, so release() counts
        // one when the pointer stayed put
        let ticket = moon.write().release();
        if let Some(ticket) = ticket {
            spawn(async move {
                tokio::time::sleep(settle_delay).await;
                moon.write().settle(ticket);
            });
        }
    };

    rsx! {
        div {
            class: if state.is_dragging() { "moon dragging" } else { "moon" },
            style: "{transform}",
            title: "Drag me or click me! 🌙",
            onmousedown: move |e: MouseEvent| {
                let p = e.client_coordinates();
                moon.write().press(p.x, p.y);
            },
            div { class: "moon-crater crater1" }
            div { class: "moon-crater crater2" }
            div { class: "moon-crater crater3" }
            div { class: "moon-glow" }
            if state.show_hint() {
                div { class: "moon-hint", "✨ Try dragging me! ✨" }
            }
        }

        if state.is_dragging() {
            div {
                class: "drag-capture",
                onmousemove: move |e: MouseEvent| {
                    let p = e.client_coordinates();
                    moon.write().drag(p.x, p.y);
                },
                onmouseup: on_release,
            }
        }

        if state.is_surprise_shown() {
            div { class: "surprise-message",
                div { class: "surprise-content",
                    h2 { "🎭 You found the secret! 🎭" }
                    p { "The moon is beautiful, isn't it?" }
                    p { "A very happy birthday to you, {celebrant}. 💫" }
                    button {
                        class: "surprise-btn",
                        onclick: move |_| moon.write().dismiss_surprise(),
                        "🌙 Beautiful! 🌙"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordinal() {
        assert_eq!(ordinal(26), "26th");
        assert_eq!(ordinal(21), "21st");
        assert_eq!(ordinal(22), "22nd");
        assert_eq!(ordinal(23), "23rd");
        assert_eq!(ordinal(11), "11th");
        assert_eq!(ordinal(112), "112th");
        assert_eq!(ordinal(101), "101st");
    }
}
