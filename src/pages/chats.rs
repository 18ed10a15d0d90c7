use celebration_core::{MediaKind, PageId};
use dioxus::prelude::*;

use crate::components::{ChatTimeline, MediaModal, MediaView, NavDots, PageHeader, UploadInstructions};
use crate::context::use_gallery;

/// Chats page - screenshot timeline.
#[component]
pub fn Chats(on_navigate: EventHandler<PageId>) -> Element {
    let gallery = use_gallery(MediaKind::Chats);
    let lightbox = gallery.lightbox;
    let empty = lightbox.read().is_empty();

    rsx! {
        div { class: "page chats-page",
            PageHeader {
                title: "💬 Our Special Conversations",
                subtitle: "Moments that made us smile, laugh, and fall deeper in love",
                on_navigate,
            }

            main { class: "page-content",
                if gallery.is_loading() {
                    div { class: "loading-message",
                        div { class: "loading-spinner" }
                        p { "🔄 Loading your beautiful conversations..." }
                    }
                } else if empty {
                    UploadInstructions {
                        kind: MediaKind::Chats,
                        heading: "💕 Ready for Your Sweet Conversations! 💕",
                        footer: "💬 Can't wait to see your beautiful conversations! 💬",
                    }
                } else {
                    ChatTimeline { lightbox }
                }
            }

            MediaModal {
                lightbox,
                view: MediaView::Image,
                caption: "A sweet conversation moment 💕",
            }

            NavDots { current: PageId::Chats, on_navigate }
        }
    }
}
