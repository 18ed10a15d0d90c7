//! Celebration Core Library
//!
//! The state machines behind the celebration site, free of any UI code.
//!
//! ## Overview
//!
//! The desktop shell renders one page at a time and forwards user input
//! here. Every widget with rules is an independent, synchronous state
//! machine:
//!
//! - [`PageRouter`]: which top-level page is shown
//! - [`CountdownClock`]: time left until the celebration starts
//! - [`RevealTracker`]: which reasons / envelopes have been opened
//! - [`Lightbox`]: the selected media item and next/prev navigation
//! - [`AudioController`]: mute flag and the autoplay fallback
//! - [`MoonState`]: the draggable moon on the landing page
//!
//! Media comes from an [`AssetProvider`], by default a directory scan of
//! the configured media root.
//!
//! ## Quick Start
//!
//! ```ignore
//! use celebration_core::{DirectoryAssetProvider, AssetProvider, Lightbox, MediaKind};
//!
//! let provider = DirectoryAssetProvider::new("./assets");
//! let photos = provider.list(MediaKind::Photos)?;
//!
//! let mut lightbox = Lightbox::new(photos);
//! if let Some(first) = lightbox.items().first().map(|p| p.id) {
//!     lightbox.open(first);
//!     lightbox.next();
//! }
//! ```

pub mod audio;
pub mod config;
pub mod countdown;
pub mod error;
pub mod gallery;
pub mod layout;
pub mod media;
pub mod moon;
pub mod page;
pub mod reasons;
pub mod reveal;

// Re-exports
pub use audio::{AudioController, Playback, ELEMENT_MISSING};
pub use config::{CountdownTarget, SiteConfig};
pub use countdown::{countdown, next_midnight, Countdown, CountdownClock};
pub use error::{SiteError, SiteResult};
pub use gallery::{Lightbox, LightboxKey};
pub use layout::{envelope_seal, CollageSize, PopupPlacement, StarPosition, TimelineSide};
pub use media::{
    AssetProvider, CachedAssetProvider, DirectoryAssetProvider, MediaId, MediaItem, MediaKind,
    StaticAssetProvider,
};
pub use moon::{MoonState, SettleTicket};
pub use page::{PageId, PageRouter};
pub use reasons::{reason, Reason, REASONS};
pub use reveal::{drive_reveal_all, RevealRun, RevealTracker, DEFAULT_REVEAL_STEP};
