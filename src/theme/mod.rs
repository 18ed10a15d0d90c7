//! Theme: palette and global styles.

mod colors;
mod styles;

pub use colors::css_variables;
pub use styles::GLOBAL_STYLES;
