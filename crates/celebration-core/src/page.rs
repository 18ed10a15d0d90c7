//! Page routing.
//!
//! The router holds the single value that decides which top-level page is
//! rendered. Pages request changes through [`PageRouter::navigate`]; they
//! never write the value directly.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::SiteError;

/// Top-level pages of the site
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageId {
    #[default]
    Landing,
    Photos,
    Chats,
    Videos,
    Special,
    Wishes,
}

impl PageId {
    /// All pages in navigation order
    pub const ALL: [PageId; 6] = [
        PageId::Landing,
        PageId::Photos,
        PageId::Chats,
        PageId::Videos,
        PageId::Special,
        PageId::Wishes,
    ];

    /// Stable lowercase name, used for string navigation and CLI flags
    pub fn as_str(&self) -> &'static str {
        match self {
            PageId::Landing => "landing",
            PageId::Photos => "photos",
            PageId::Chats => "chats",
            PageId::Videos => "videos",
            PageId::Special => "special",
            PageId::Wishes => "wishes",
        }
    }

    /// Short label shown under a navigation star
    pub fn label(&self) -> &'static str {
        match self {
            PageId::Landing => "Home",
            PageId::Photos => "Photos",
            PageId::Chats => "Chats",
            PageId::Videos => "Videos",
            PageId::Special => "Special",
            PageId::Wishes => "Wishes",
        }
    }

    /// Hover text for navigation controls
    pub fn title(&self) -> &'static str {
        match self {
            PageId::Landing => "Home - Where magic begins",
            PageId::Photos => "Photos - Beautiful moments captured",
            PageId::Chats => "Chats - Our sweet conversations",
            PageId::Videos => "Videos - Moving memories",
            PageId::Special => "Special - Why you're amazing",
            PageId::Wishes => "Wishes - Dreams for you",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            PageId::Landing => "🏠",
            PageId::Photos => "📸",
            PageId::Chats => "💬",
            PageId::Videos => "🎥",
            PageId::Special => "💕",
            PageId::Wishes => "🌟",
        }
    }

    /// Resolve a page name, falling back to [`PageId::Landing`] for
    /// anything unknown.
    pub fn resolve(name: &str) -> PageId {
        name.parse().unwrap_or_else(|e: SiteError| {
            tracing::warn!("{}, falling back to landing", e);
            PageId::Landing
        })
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PageId {
    type Err = SiteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        PageId::ALL
            .into_iter()
            .find(|page| page.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| SiteError::UnknownPage(s.to_string()))
    }
}

/// Holds the current page for the whole session.
///
/// Starts on [`PageId::Landing`] and accepts navigation indefinitely.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PageRouter {
    current: PageId,
    navigations: u64,
}

impl PageRouter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Router that starts on a page other than Landing
    pub fn starting_at(page: PageId) -> Self {
        Self {
            current: page,
            navigations: 0,
        }
    }

    pub fn current(&self) -> PageId {
        self.current
    }

    /// Number of navigation requests handled so far
    pub fn navigations(&self) -> u64 {
        self.navigations
    }

    /// Replace the current page.
    ///
    /// Navigating to the page already shown still counts as a navigation;
    /// the shell re-mounts the page and its local state starts fresh.
    pub fn navigate(&mut self, target: PageId) {
        tracing::debug!(from = %self.current, to = %target, "navigate");
        self.current = target;
        self.navigations += 1;
    }

    /// Navigate by page name; unknown names land on [`PageId::Landing`].
    pub fn navigate_to(&mut self, name: &str) -> PageId {
        let target = PageId::resolve(name);
        self.navigate(target);
        target
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_router_starts_on_landing() {
        let router = PageRouter::new();
        assert_eq!(router.current(), PageId::Landing);
        assert_eq!(router.navigations(), 0);
    }

    #[test]
    fn test_navigate_replaces_current() {
        let mut router = PageRouter::new();
        router.navigate(PageId::Photos);
        assert_eq!(router.current(), PageId::Photos);
        router.navigate(PageId::Wishes);
        assert_eq!(router.current(), PageId::Wishes);
        assert_eq!(router.navigations(), 2);
    }

    #[test]
    fn test_unknown_name_falls_back_to_landing() {
        let mut router = PageRouter::new();
        router.navigate_to("photos");
        assert_eq!(router.current(), PageId::Photos);

        let resolved = router.navigate_to("unknownvalue");
        assert_eq!(resolved, PageId::Landing);
        assert_eq!(router.current(), PageId::Landing);
    }

    #[test]
    fn test_parse_page_names() {
        for page in PageId::ALL {
            assert_eq!(page.as_str().parse::<PageId>().unwrap(), page);
        }
        assert_eq!("  Special ".parse::<PageId>().unwrap(), PageId::Special);
        assert!(matches!(
            "gallery".parse::<PageId>(),
            Err(SiteError::UnknownPage(_))
        ));
    }

    #[test]
    fn test_starting_at() {
        let router = PageRouter::starting_at(PageId::Special);
        assert_eq!(router.current(), PageId::Special);
    }
}
