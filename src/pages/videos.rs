use celebration_core::{CollageSize, MediaKind, PageId};
use dioxus::prelude::*;

use crate::components::{
    ConstellationNav, MediaModal, MediaView, PageHeader, Starfield, UploadInstructions,
};
use crate::context::use_gallery;

/// Videos page - a collage of muted previews.
#[component]
pub fn Videos(on_navigate: EventHandler<PageId>) -> Element {
    let gallery = use_gallery(MediaKind::Videos);
    let mut lightbox = gallery.lightbox;

    let tiles: Vec<_> = lightbox
        .read()
        .items()
        .iter()
        .enumerate()
        .map(|(index, clip)| (clip.clone(), CollageSize::for_index(index).class()))
        .collect();

    rsx! {
        div { class: "page videos-page",
            Starfield { count: 30 }

            PageHeader {
                title: "🎬 Moving Memories",
                subtitle: "A collage of beautiful moments that bring life to our story...",
                on_navigate,
            }

            main { class: "page-content",
                if gallery.is_loading() {
                    div { class: "loading-message",
                        div { class: "loading-spinner" }
                        p { "Loading your beautiful memories..." }
                    }
                } else if tiles.is_empty() {
                    UploadInstructions {
                        kind: MediaKind::Videos,
                        heading: "Waiting for Your Beautiful Videos",
                        footer: "💕 Ready to showcase your moving memories 💕",
                    }
                } else {
                    div { class: "video-collage",
                        for (clip, size) in tiles {
                            div {
                                key: "{clip.id}",
                                class: "video-tile {size}",
                                onclick: move |_| {
                                    lightbox.write().open(clip.id);
                                },
                                video {
                                    src: "{clip.source}",
                                    muted: true,
                                    preload: "metadata",
                                }
                                div { class: "video-overlay",
                                    span { class: "play-icon", "▶" }
                                }
                            }
                        }
                    }
                }
            }

            MediaModal {
                lightbox,
                view: MediaView::Video,
                caption: "A beautiful moment captured in motion 💕",
            }

            ConstellationNav { current: PageId::Videos, on_navigate }
        }
    }
}
