//! Decorative twinkling and falling stars.
//!
//! Positions are rolled once per mount and never change afterwards.

use dioxus::prelude::*;
use rand::Rng;

/// Inline style for one decorative star
#[derive(Debug, Clone, PartialEq)]
struct StarStyle(String);

fn twinkling_stars(count: usize, rng: &mut impl Rng) -> Vec<StarStyle> {
    (0..count)
        .map(|_| {
            StarStyle(format!(
                "left: {:.2}%; top: {:.2}%; animation-delay: {:.2}s; animation-duration: {:.2}s;",
                rng.random_range(0.0..100.0),
                rng.random_range(0.0..100.0),
                rng.random_range(0.0..3.0),
                rng.random_range(2.0..6.0),
            ))
        })
        .collect()
}

fn falling_stars(count: usize, rng: &mut impl Rng) -> Vec<StarStyle> {
    (0..count)
        .map(|_| {
            StarStyle(format!(
                "left: {:.2}%; animation-delay: {:.2}s; animation-duration: {:.2}s;",
                rng.random_range(0.0..100.0),
                rng.random_range(0.0..5.0),
                rng.random_range(3.0..6.0),
            ))
        })
        .collect()
}

/// Background sky. `falling` adds a handful of shooting stars.
#[component]
pub fn Starfield(#[props(default = 50)] count: usize, #[props(default = 0)] falling: usize) -> Element {
    let stars = use_hook(|| twinkling_stars(count, &mut rand::rng()));
    let shooting = use_hook(|| falling_stars(falling, &mut rand::rng()));

    rsx! {
        div { class: "stars-container",
            for (i, star) in stars.iter().enumerate() {
                div { key: "{i}", class: "star", style: "{star.0}" }
            }
        }
        if !shooting.is_empty() {
            div { class: "falling-stars",
                for (i, star) in shooting.iter().enumerate() {
                    div { key: "{i}", class: "falling-star", style: "{star.0}" }
                }
            }
        }
    }
}
