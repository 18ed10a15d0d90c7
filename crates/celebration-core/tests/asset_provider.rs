//! Directory scanning tests for the media asset providers

use std::fs;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};

use tempfile::TempDir;

use celebration_core::{
    AssetProvider, CachedAssetProvider, DirectoryAssetProvider, MediaId, MediaItem, MediaKind,
    SiteError, SiteResult,
};

fn write(dir: &Path, name: &str, bytes: &[u8]) {
    fs::write(dir.join(name), bytes).expect("write fixture");
}

fn media_root() -> TempDir {
    let root = tempfile::tempdir().expect("tempdir");
    for kind in ["photos", "videos", "chats", "music"] {
        fs::create_dir(root.path().join(kind)).expect("mkdir");
    }
    root
}

#[test]
fn test_lists_accepted_files_sorted_by_name() {
    let root = media_root();
    let photos = root.path().join("photos");
    write(&photos, "zebra.png", b"z");
    write(&photos, "apple.JPG", b"a");
    write(&photos, "notes.txt", b"ignored");
    write(&photos, "mango.trip.webp", b"m");
    fs::create_dir(photos.join("nested.jpg")).unwrap();

    let provider = DirectoryAssetProvider::new(root.path());
    let items = provider.list(MediaKind::Photos).unwrap();

    let names: Vec<&str> = items.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, vec!["apple", "mango", "zebra"]);

    let ids: Vec<MediaId> = items.iter().map(|i| i.id).collect();
    assert_eq!(ids, vec![MediaId(1), MediaId(2), MediaId(3)]);

    assert_eq!(items[0].source, "data:image/jpeg;base64,YQ==");
    assert!(items[1].source.starts_with("data:image/webp;base64,"));
}

#[test]
fn test_each_kind_uses_its_own_folder_and_extensions() {
    let root = media_root();
    write(&root.path().join("videos"), "dance.mp4", b"v");
    write(&root.path().join("videos"), "still.png", b"p");
    write(&root.path().join("chats"), "first.png", b"c");
    write(&root.path().join("music"), "song.mp3", b"s");

    let provider = DirectoryAssetProvider::new(root.path());

    let videos = provider.list(MediaKind::Videos).unwrap();
    assert_eq!(videos.len(), 1);
    assert!(videos[0].source.starts_with("data:video/mp4;base64,"));

    assert_eq!(provider.list(MediaKind::Chats).unwrap()[0].name, "first");
    assert!(provider.list(MediaKind::Music).unwrap()[0]
        .source
        .starts_with("data:audio/mpeg;base64,"));
}

#[test]
fn test_missing_folder_is_an_error() {
    let root = tempfile::tempdir().unwrap();
    let provider = DirectoryAssetProvider::new(root.path());

    match provider.list(MediaKind::Photos) {
        Err(SiteError::MissingFolder(path)) => assert!(path.ends_with("photos")),
        other => panic!("expected MissingFolder, got {:?}", other),
    }
}

#[test]
fn test_empty_folder_is_empty_list() {
    let root = media_root();
    let provider = DirectoryAssetProvider::new(root.path());
    assert!(provider.list(MediaKind::Chats).unwrap().is_empty());
}

/// Counts how often the wrapped provider is consulted
struct CountingProvider {
    calls: AtomicUsize,
}

impl AssetProvider for CountingProvider {
    fn list(&self, _kind: MediaKind) -> SiteResult<Vec<MediaItem>> {
        let n = self.calls.fetch_add(1, Ordering::SeqCst) as u32;
        Ok(vec![MediaItem::new(1, format!("data:,{n}"), "x")])
    }
}

#[test]
fn test_cache_holds_until_invalidated() {
    let cached = CachedAssetProvider::new(CountingProvider {
        calls: AtomicUsize::new(0),
    });

    let first = cached.list(MediaKind::Photos).unwrap();
    let second = cached.list(MediaKind::Photos).unwrap();
    assert_eq!(first, second);

    // Different kinds are cached separately
    cached.list(MediaKind::Videos).unwrap();

    cached.invalidate(MediaKind::Photos);
    let third = cached.list(MediaKind::Photos).unwrap();
    assert_ne!(first, third);

    cached.invalidate_all();
    let fourth = cached.list(MediaKind::Videos).unwrap();
    assert_eq!(fourth[0].source, "data:,3");
}

#[test]
fn test_cache_does_not_store_errors() {
    let root = tempfile::tempdir().unwrap();
    let cached = CachedAssetProvider::new(DirectoryAssetProvider::new(root.path()));
    assert!(cached.list(MediaKind::Photos).is_err());

    fs::create_dir(root.path().join("photos")).unwrap();
    write(&root.path().join("photos"), "late.gif", b"g");
    assert_eq!(cached.list(MediaKind::Photos).unwrap().len(), 1);
}
