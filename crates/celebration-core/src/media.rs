//! Media discovery.
//!
//! Galleries get their items from an [`AssetProvider`]. The default
//! [`DirectoryAssetProvider`] scans one folder per [`MediaKind`] under the
//! media root and inlines every accepted file as a base64 `data:` URI, so
//! the webview never needs file access.
//!
//! ## Layout
//!
//! ```text
//! <media_root>/
//! ├── photos/   jpg jpeg png gif webp
//! ├── chats/    jpg jpeg png gif webp
//! ├── videos/   mp4 webm mov avi
//! └── music/    mp3 ogg wav m4a
//! ```
//!
//! Files are listed in ascending file-name order and numbered from 1 in
//! that order. The number is the item's [`MediaId`] and also the
//! "Memory #N" label on the photos page.

use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};

use base64::Engine;
use parking_lot::Mutex;
use walkdir::WalkDir;

use crate::error::{SiteError, SiteResult};

/// Stable identifier assigned to a media item at load time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MediaId(pub u32);

impl fmt::Display for MediaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "media_{}", self.0)
    }
}

/// Folder designation for a gallery
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaKind {
    Photos,
    Videos,
    Chats,
    Music,
}

impl MediaKind {
    /// Folder name under the media root
    pub fn folder(&self) -> &'static str {
        match self {
            MediaKind::Photos => "photos",
            MediaKind::Videos => "videos",
            MediaKind::Chats => "chats",
            MediaKind::Music => "music",
        }
    }

    /// Accepted file extensions, lowercase
    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            MediaKind::Photos | MediaKind::Chats => &["jpg", "jpeg", "png", "gif", "webp"],
            MediaKind::Videos => &["mp4", "webm", "mov", "avi"],
            MediaKind::Music => &["mp3", "ogg", "wav", "m4a"],
        }
    }

    /// Case-insensitive extension check
    pub fn accepts(&self, extension: &str) -> bool {
        self.extensions()
            .iter()
            .any(|ext| ext.eq_ignore_ascii_case(extension))
    }
}

/// One loaded media file
#[derive(Debug, Clone, PartialEq)]
pub struct MediaItem {
    pub id: MediaId,
    /// URI the webview can load directly
    pub source: String,
    /// File name up to its first `.`
    pub name: String,
}

impl MediaItem {
    pub fn new(id: u32, source: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: MediaId(id),
            source: source.into(),
            name: name.into(),
        }
    }

    /// Read a file and inline it as a data URI
    pub fn from_path(id: u32, path: &Path) -> SiteResult<Self> {
        let bytes = std::fs::read(path).map_err(|source| SiteError::UnreadableMedia {
            path: path.to_path_buf(),
            source,
        })?;
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default();
        Ok(Self::new(id, data_uri(mime_type(extension), &bytes), display_name(path)))
    }
}

/// Display name for a media file: the file name up to its first `.`
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .and_then(|n| n.to_str())
        .and_then(|n| n.split('.').next())
        .unwrap_or_default()
        .to_string()
}

/// MIME type for a media file extension
pub fn mime_type(extension: &str) -> &'static str {
    match extension.to_ascii_lowercase().as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "mp4" => "video/mp4",
        "webm" => "video/webm",
        "mov" => "video/quicktime",
        "avi" => "video/x-msvideo",
        "mp3" => "audio/mpeg",
        "ogg" => "audio/ogg",
        "wav" => "audio/wav",
        "m4a" => "audio/mp4",
        _ => "application/octet-stream",
    }
}

fn data_uri(mime: &str, bytes: &[u8]) -> String {
    let encoded = base64::engine::general_purpose::STANDARD.encode(bytes);
    format!("data:{};base64,{}", mime, encoded)
}

/// Source of gallery items.
///
/// Consulted once per gallery-page mount. Implementations return a
/// snapshot; they never push updates.
pub trait AssetProvider: Send + Sync {
    fn list(&self, kind: MediaKind) -> SiteResult<Vec<MediaItem>>;
}

/// Scans `<root>/<kind folder>` on every call
#[derive(Debug, Clone)]
pub struct DirectoryAssetProvider {
    root: PathBuf,
}

impl DirectoryAssetProvider {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Folder scanned for `kind`
    pub fn folder(&self, kind: MediaKind) -> PathBuf {
        self.root.join(kind.folder())
    }
}

impl AssetProvider for DirectoryAssetProvider {
    fn list(&self, kind: MediaKind) -> SiteResult<Vec<MediaItem>> {
        let dir = self.folder(kind);
        if !dir.is_dir() {
            return Err(SiteError::MissingFolder(dir));
        }

        let mut items = Vec::new();
        for entry in WalkDir::new(&dir)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
        {
            let entry = entry?;
            if !entry.file_type().is_file() {
                continue;
            }

            let path = entry.path();
            let accepted = path
                .extension()
                .and_then(|e| e.to_str())
                .is_some_and(|ext| kind.accepts(ext));
            if !accepted {
                continue;
            }

            let id = items.len() as u32 + 1;
            match MediaItem::from_path(id, path) {
                Ok(item) => items.push(item),
                Err(e) => tracing::warn!("Skipping media file: {}", e),
            }
        }

        tracing::debug!(folder = %dir.display(), count = items.len(), "scanned media folder");
        Ok(items)
    }
}

/// Fixed in-memory manifest, for embedding and tests
#[derive(Debug, Clone, Default)]
pub struct StaticAssetProvider {
    items: HashMap<MediaKind, Vec<MediaItem>>,
}

impl StaticAssetProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, kind: MediaKind, items: Vec<MediaItem>) -> Self {
        self.items.insert(kind, items);
        self
    }
}

impl AssetProvider for StaticAssetProvider {
    fn list(&self, kind: MediaKind) -> SiteResult<Vec<MediaItem>> {
        Ok(self.items.get(&kind).cloned().unwrap_or_default())
    }
}

/// Caches another provider's listings per media kind.
///
/// Nothing expires on its own; call [`invalidate`](Self::invalidate) to
/// force a rescan. Errors are never cached.
pub struct CachedAssetProvider<P> {
    inner: P,
    cache: Mutex<HashMap<MediaKind, Vec<MediaItem>>>,
}

impl<P: AssetProvider> CachedAssetProvider<P> {
    pub fn new(inner: P) -> Self {
        Self {
            inner,
            cache: Mutex::new(HashMap::new()),
        }
    }

    pub fn invalidate(&self, kind: MediaKind) {
        self.cache.lock().remove(&kind);
    }

    pub fn invalidate_all(&self) {
        self.cache.lock().clear();
    }
}

impl<P: AssetProvider> AssetProvider for CachedAssetProvider<P> {
    fn list(&self, kind: MediaKind) -> SiteResult<Vec<MediaItem>> {
        if let Some(items) = self.cache.lock().get(&kind) {
            return Ok(items.clone());
        }

        let items = self.inner.list(kind)?;
        self.cache.lock().insert(kind, items.clone());
        Ok(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_stops_at_first_dot() {
        assert_eq!(display_name(Path::new("photos/beach.jpg")), "beach");
        assert_eq!(display_name(Path::new("photos/trip.day2.png")), "trip");
    }

    #[test]
    fn test_accepts_is_case_insensitive() {
        assert!(MediaKind::Photos.accepts("JPG"));
        assert!(MediaKind::Videos.accepts("mov"));
        assert!(!MediaKind::Videos.accepts("png"));
        assert!(!MediaKind::Chats.accepts("mp4"));
    }

    #[test]
    fn test_mime_type() {
        assert_eq!(mime_type("JPEG"), "image/jpeg");
        assert_eq!(mime_type("mov"), "video/quicktime");
        assert_eq!(mime_type("xyz"), "application/octet-stream");
    }

    #[test]
    fn test_data_uri() {
        assert_eq!(data_uri("text/plain", b"Hello"), "data:text/plain;base64,SGVsbG8=");
    }

    #[test]
    fn test_static_provider_defaults_to_empty() {
        let provider = StaticAssetProvider::new().with(
            MediaKind::Photos,
            vec![MediaItem::new(1, "data:,a", "a")],
        );
        assert_eq!(provider.list(MediaKind::Photos).unwrap().len(), 1);
        assert!(provider.list(MediaKind::Videos).unwrap().is_empty());
    }
}
