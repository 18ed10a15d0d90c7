//! UI components for the celebration site.
//!
//! Night-sky widgets shared across pages.

mod background_music;
mod chat_timeline;
mod constellation_nav;
mod media_modal;
mod mute_button;
mod nav_dots;
mod page_header;
mod starfield;
mod upload_instructions;

pub use background_music::{play_background, BackgroundMusic};
pub use chat_timeline::ChatTimeline;
pub use constellation_nav::ConstellationNav;
pub use media_modal::{MediaModal, MediaView};
pub use mute_button::MuteButton;
pub use nav_dots::NavDots;
pub use page_header::PageHeader;
pub use starfield::Starfield;
pub use upload_instructions::UploadInstructions;
