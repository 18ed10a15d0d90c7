//! Gallery lightbox navigation.
//!
//! A [`Lightbox`] owns one gallery's items and an optional selection. The
//! selection is always one of the items, keyed by [`MediaId`], so two
//! items with the same source never confuse next/prev.

use crate::media::{MediaId, MediaItem};

/// Keyboard commands understood while a lightbox is open
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightboxKey {
    Close,
    Previous,
    Next,
}

impl LightboxKey {
    pub const ALL: [LightboxKey; 3] =
        [LightboxKey::Close, LightboxKey::Previous, LightboxKey::Next];

    /// DOM key name (`KeyboardEvent.key`) bound to this command
    pub fn key_name(&self) -> &'static str {
        match self {
            LightboxKey::Close => "Escape",
            LightboxKey::Previous => "ArrowLeft",
            LightboxKey::Next => "ArrowRight",
        }
    }

    /// Map a DOM key name (`KeyboardEvent.key`) to a command
    pub fn from_key_name(name: &str) -> Option<Self> {
        match name {
            "Escape" => Some(LightboxKey::Close),
            "ArrowLeft" => Some(LightboxKey::Previous),
            "ArrowRight" => Some(LightboxKey::Next),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Lightbox {
    items: Vec<MediaItem>,
    selected: Option<MediaId>,
}

impl Lightbox {
    pub fn new(items: Vec<MediaItem>) -> Self {
        Self {
            items,
            selected: None,
        }
    }

    pub fn items(&self) -> &[MediaItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_open(&self) -> bool {
        self.selected.is_some()
    }

    pub fn selected_id(&self) -> Option<MediaId> {
        self.selected
    }

    pub fn selected(&self) -> Option<&MediaItem> {
        let id = self.selected?;
        self.items.iter().find(|item| item.id == id)
    }

    /// Index of the selected item in the gallery
    pub fn position(&self) -> Option<usize> {
        let id = self.selected?;
        self.items.iter().position(|item| item.id == id)
    }

    /// Swap in a freshly loaded collection. The selection survives only if
    /// its id is still present.
    pub fn replace_items(&mut self, items: Vec<MediaItem>) {
        self.items = items;
        if self.selected.is_some() && self.position().is_none() {
            self.selected = None;
        }
    }

    /// Select `id`. Ids that are not in the gallery are ignored.
    pub fn open(&mut self, id: MediaId) -> bool {
        if self.items.iter().any(|item| item.id == id) {
            self.selected = Some(id);
            true
        } else {
            tracing::warn!(%id, "ignoring lightbox open for unknown item");
            false
        }
    }

    pub fn close(&mut self) {
        self.selected = None;
    }

    /// Select the following item, wrapping to the first
    pub fn next(&mut self) {
        self.step(1);
    }

    /// Select the preceding item, wrapping to the last
    pub fn prev(&mut self) {
        self.step(-1);
    }

    pub fn handle_key(&mut self, key: LightboxKey) {
        match key {
            LightboxKey::Close => self.close(),
            LightboxKey::Previous => self.prev(),
            LightboxKey::Next => self.next(),
        }
    }

    fn step(&mut self, offset: isize) {
        if self.items.is_empty() {
            self.selected = None;
            return;
        }
        let Some(index) = self.position() else {
            return;
        };

        let len = self.items.len() as isize;
        let target = (index as isize + offset).rem_euclid(len) as usize;
        self.selected = Some(self.items[target].id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gallery(names: &[&str]) -> Lightbox {
        Lightbox::new(
            names
                .iter()
                .enumerate()
                .map(|(i, name)| MediaItem::new(i as u32 + 1, format!("data:,{name}"), *name))
                .collect(),
        )
    }

    fn selected_name(lightbox: &Lightbox) -> Option<&str> {
        lightbox.selected().map(|item| item.name.as_str())
    }

    #[test]
    fn test_open_next_wraps_prev_wraps() {
        let mut lb = gallery(&["A", "B", "C"]);
        assert!(lb.open(MediaId(2)));
        assert_eq!(selected_name(&lb), Some("B"));

        lb.next();
        assert_eq!(selected_name(&lb), Some("C"));
        lb.next();
        assert_eq!(selected_name(&lb), Some("A"));
        lb.prev();
        assert_eq!(selected_name(&lb), Some("C"));
    }

    #[test]
    fn test_close_clears_selection() {
        let mut lb = gallery(&["A", "B"]);
        lb.open(MediaId(1));
        lb.close();
        assert!(!lb.is_open());
        assert_eq!(lb.selected(), None);
    }

    #[test]
    fn test_empty_gallery_navigation_is_noop() {
        let mut lb = Lightbox::default();
        lb.next();
        lb.prev();
        assert!(!lb.is_open());
        assert!(!lb.open(MediaId(1)));
    }

    #[test]
    fn test_next_without_selection_stays_closed() {
        let mut lb = gallery(&["A", "B"]);
        lb.next();
        assert!(!lb.is_open());
    }

    #[test]
    fn test_duplicate_sources_are_distinguished_by_id() {
        let mut lb = Lightbox::new(vec![
            MediaItem::new(1, "data:,same", "first"),
            MediaItem::new(2, "data:,same", "second"),
            MediaItem::new(3, "data:,other", "third"),
        ]);
        lb.open(MediaId(2));
        lb.next();
        assert_eq!(selected_name(&lb), Some("third"));
    }

    #[test]
    fn test_key_bindings() {
        assert_eq!(LightboxKey::from_key_name("Escape"), Some(LightboxKey::Close));
        assert_eq!(LightboxKey::from_key_name("ArrowLeft"), Some(LightboxKey::Previous));
        assert_eq!(LightboxKey::from_key_name("ArrowRight"), Some(LightboxKey::Next));
        assert_eq!(LightboxKey::from_key_name("Enter"), None);
        for key in LightboxKey::ALL {
            assert_eq!(LightboxKey::from_key_name(key.key_name()), Some(key));
        }

        let mut lb = gallery(&["A", "B", "C"]);
        lb.open(MediaId(1));
        lb.handle_key(LightboxKey::Previous);
        assert_eq!(selected_name(&lb), Some("C"));
        lb.handle_key(LightboxKey::Next);
        assert_eq!(selected_name(&lb), Some("A"));
        lb.handle_key(LightboxKey::Close);
        assert!(!lb.is_open());
    }

    #[test]
    fn test_replace_items_drops_missing_selection() {
        let mut lb = gallery(&["A", "B", "C"]);
        lb.open(MediaId(3));
        lb.replace_items(vec![MediaItem::new(1, "data:,A", "A")]);
        assert!(!lb.is_open());

        lb.open(MediaId(1));
        lb.replace_items(vec![MediaItem::new(1, "data:,A2", "A2")]);
        assert_eq!(selected_name(&lb), Some("A2"));
    }
}
