//! Page components for the celebration site.

mod chats;
mod landing;
mod photos;
mod special;
mod videos;
mod wishes;

pub use chats::Chats;
pub use landing::Landing;
pub use photos::Photos;
pub use special::Special;
pub use videos::Videos;
pub use wishes::Wishes;
