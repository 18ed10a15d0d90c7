use celebration_core::PageId;
use dioxus::prelude::*;

use crate::components::{NavDots, PageHeader};
use crate::context::use_site_config;

/// Wishes page - static cards and a closing message.
#[component]
pub fn Wishes(on_navigate: EventHandler<PageId>) -> Element {
    let config = use_site_config();
    let main_wish = format!(
        "As you turn {}, I wish you all the happiness in the world. May this new year \
         of your life be filled with adventure, love, laughter and every beautiful \
         moment you deserve. Thank you for being there with me.",
        config.age
    );
    let final_title = format!("Happy Birthday, {}!", config.celebrant);

    rsx! {
        div { class: "page wishes-page",
            PageHeader {
                title: "🌟 Birthday Wishes & Dreams",
                subtitle: "Messages from the heart for your special day",
                on_navigate,
            }

            main { class: "page-content",
                div { class: "wishes-container",
                    div { class: "wish-card main-wish",
                        div { class: "wish-icon", "🎂" }
                        h2 { "My Birthday Wish for You" }
                        p { "{main_wish}" }
                    }
                    div { class: "wish-card",
                        div { class: "wish-icon", "💕" }
                        h2 { "Our Future Together" }
                        p {
                            "I can't promise to know what the future holds, but I can promise \
                             one thing: I'll fight for us until the very end."
                        }
                    }
                    div { class: "wish-card",
                        div { class: "wish-icon", "✨" }
                        h2 { "What Makes You Special" }
                        p {
                            "The way you laugh, the way you talk, the way you love. \
                             I adore every single bit of it."
                        }
                    }
                    div { class: "wish-card",
                        div { class: "wish-icon", "🌙" }
                        h2 { "Under the Stars" }
                        p {
                            "One day we will lie side by side on the grass under a clear sky, \
                             going through our journey in flashbacks. I saw it in a dream, \
                             and I know it will come true."
                        }
                    }
                }

                div { class: "final-message",
                    h2 { class: "script", "{final_title}" }
                    p { "🎉 Keep that smile on your face forever. 🎉" }
                }
            }

            NavDots { current: PageId::Wishes, on_navigate }
        }
    }
}
