//! Shared state for the celebration UI.
//!
//! The [`App`](crate::app::App) component provides the site config, the
//! asset provider and the audio controller; pages and widgets pull them
//! out with the hooks below. Pages navigate through their `on_navigate`
//! handler.
//!
//! ## Usage
//!
//! ```ignore
//! let config = use_site_config();
//! let gallery = use_gallery(MediaKind::Photos);
//! if !gallery.is_loading() { /* render */ }
//! ```

use std::sync::Arc;

use celebration_core::{AssetProvider, AudioController, Lightbox, MediaKind, SiteConfig};
use dioxus::prelude::*;

/// Asset provider shared by every gallery page
pub type SharedAssets = Arc<dyn AssetProvider>;

/// Get the site configuration resolved at startup.
pub fn get_site_config() -> SiteConfig {
    crate::get_site_config()
}

/// Hook to access the site configuration from context.
pub fn use_site_config() -> SiteConfig {
    use_context::<SiteConfig>()
}

/// Hook to access the media asset provider.
pub fn use_assets() -> SharedAssets {
    use_context::<SharedAssets>()
}

/// Hook to access the background audio controller.
pub fn use_audio() -> Signal<AudioController> {
    use_context::<Signal<AudioController>>()
}

/// A gallery page's media, loaded once per mount.
#[derive(Clone, Copy, PartialEq)]
pub struct GalleryHandle {
    pub loading: Signal<bool>,
    pub lightbox: Signal<Lightbox>,
}

impl GalleryHandle {
    pub fn is_loading(&self) -> bool {
        (self.loading)()
    }
}

/// Hook that scans one media folder when the page mounts.
///
/// A failed scan is logged and treated as an empty folder, so the page
/// falls through to its upload instructions.
pub fn use_gallery(kind: MediaKind) -> GalleryHandle {
    let assets = use_assets();
    let mut loading = use_signal(|| true);
    let mut lightbox = use_signal(|| Lightbox::new(Vec::new()));

    use_effect(move || {
        let assets = assets.clone();
        spawn(async move {
            let scanned = tokio::task::spawn_blocking(move || assets.list(kind)).await;
            let items = match scanned {
                Ok(Ok(items)) => {
                    tracing::info!(folder = kind.folder(), count = items.len(), "Loaded media");
                    items
                }
                Ok(Err(e)) => {
                    tracing::warn!(folder = kind.folder(), "Media scan failed: {}", e);
                    Vec::new()
                }
                Err(e) => {
                    tracing::error!(folder = kind.folder(), "Media scan task panicked: {}", e);
                    Vec::new()
                }
            };
            lightbox.write().replace_items(items);
            loading.set(false);
        });
    });

    GalleryHandle { loading, lightbox }
}
