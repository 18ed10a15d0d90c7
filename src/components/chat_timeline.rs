use celebration_core::{Lightbox, TimelineSide};
use dioxus::prelude::*;

/// Chat screenshots hung alternately left and right of a center line.
#[component]
pub fn ChatTimeline(lightbox: Signal<Lightbox>) -> Element {
    let mut lightbox = lightbox;
    let entries: Vec<_> = lightbox
        .read()
        .items()
        .iter()
        .enumerate()
        .map(|(index, chat)| (chat.clone(), TimelineSide::for_index(index).class()))
        .collect();

    rsx! {
        div { class: "chat-timeline",
            for (chat, side) in entries {
                div {
                    key: "{chat.id}",
                    class: "chat-item {side}",
                    onclick: move |_| {
                        lightbox.write().open(chat.id);
                    },
                    div { class: "chat-content",
                        div { class: "chat-image",
                            img { src: "{chat.source}", alt: "{chat.name}" }
                            div { class: "chat-overlay",
                                span { "Click to view full conversation" }
                            }
                        }
                        div { class: "chat-info",
                            h3 { "Sweet conversation moment" }
                            p { class: "chat-date", "{chat.name}" }
                        }
                    }
                }
            }
        }
    }
}
