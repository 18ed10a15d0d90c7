//! Photos page - one sealed envelope per photo.

use celebration_core::{envelope_seal, MediaKind, PageId, RevealTracker};
use dioxus::prelude::*;

use crate::components::{
    ConstellationNav, MediaModal, MediaView, PageHeader, Starfield, UploadInstructions,
};
use crate::context::use_gallery;

#[component]
pub fn Photos(on_navigate: EventHandler<PageId>) -> Element {
    let gallery = use_gallery(MediaKind::Photos);
    let mut lightbox = gallery.lightbox;
    let mut envelopes = use_signal(|| RevealTracker::new(0));

    // Envelopes cover exactly the photos found by the scan
    use_effect(move || {
        if !gallery.is_loading() {
            let ids: Vec<u32> = lightbox.peek().items().iter().map(|p| p.id.0).collect();
            envelopes.set(RevealTracker::with_ids(ids));
        }
    });

    let photos: Vec<_> = lightbox
        .read()
        .items()
        .iter()
        .enumerate()
        .map(|(index, photo)| (photo.clone(), format!("Memory #{}", index + 1), envelope_seal(index)))
        .collect();

    rsx! {
        div { class: "page photos-page",
            Starfield { count: 30 }

            PageHeader {
                title: "💌 Memory Envelopes",
                subtitle: "Each envelope holds a precious moment waiting to be revealed...",
                on_navigate,
            }

            main { class: "page-content",
                if gallery.is_loading() {
                    div { class: "loading-message",
                        div { class: "loading-spinner" }
                        p { "Preparing your beautiful memories..." }
                    }
                } else if photos.is_empty() {
                    UploadInstructions {
                        kind: MediaKind::Photos,
                        heading: "Waiting for Your Beautiful Photos",
                        footer: "💕 Ready to hold your precious memories 💕",
                    }
                } else {
                    div { class: "envelopes-grid",
                        for (photo, label, seal) in photos {
                            div { key: "{photo.id}", class: "envelope-container",
                                if envelopes.read().is_revealed(photo.id.0) {
                                    div { class: "envelope opened",
                                        div { class: "envelope-label", "{label}" }
                                    }
                                    div {
                                        class: "photo-reveal",
                                        onclick: move |_| {
                                            lightbox.write().open(photo.id);
                                        },
                                        img { src: "{photo.source}", alt: "{photo.name}" }
                                        div { class: "photo-overlay",
                                            span { "Click to view ✨" }
                                        }
                                    }
                                } else {
                                    div {
                                        class: "envelope",
                                        onclick: move |_| {
                                            envelopes.write().reveal(photo.id.0);
                                        },
                                        div { class: "envelope-seal", "{seal}" }
                                        div { class: "envelope-label", "{label}" }
                                    }
                                }
                            }
                        }
                    }
                }
            }

            MediaModal {
                lightbox,
                view: MediaView::Image,
                caption: "A beautiful memory captured forever 💕",
            }

            ConstellationNav { current: PageId::Photos, on_navigate }
        }
    }
}
