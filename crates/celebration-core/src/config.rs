//! Site configuration.
//!
//! Every field has a default, so an empty JSON object is a valid config
//! file. The desktop binary layers CLI flags on top of what is loaded here.

use std::path::{Path, PathBuf};
use std::time::Duration;

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Deserializer};

use crate::error::{SiteError, SiteResult};
use crate::page::PageId;

/// When the landing countdown ends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CountdownTarget {
    /// The next local midnight after the landing page mounts
    #[default]
    NextMidnight,
    /// A fixed instant
    At(DateTime<FixedOffset>),
}

impl CountdownTarget {
    /// Parse an RFC 3339 instant, or `"midnight"` for the default
    pub fn parse(s: &str) -> SiteResult<Self> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("midnight") {
            return Ok(CountdownTarget::NextMidnight);
        }
        DateTime::parse_from_rfc3339(s)
            .map(CountdownTarget::At)
            .map_err(|e| SiteError::InvalidTarget(format!("{s}: {e}")))
    }
}

impl<'de> Deserialize<'de> for CountdownTarget {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        CountdownTarget::parse(&raw).map_err(serde::de::Error::custom)
    }
}

/// Resolved configuration for one session
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Folder holding `photos/`, `videos/`, `chats/` and `music/`
    pub media_root: PathBuf,
    /// Explicit background track; otherwise the first file in `music/`
    pub audio_track: Option<PathBuf>,
    /// Name shown in titles and wishes
    pub celebrant: String,
    pub age: u32,
    pub start_page: PageId,
    pub countdown_target: CountdownTarget,
    pub reveal_step_ms: u64,
    pub autoplay_delay_ms: u64,
    pub moon_settle_ms: u64,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            media_root: PathBuf::from("assets"),
            audio_track: None,
            celebrant: "Ayushi".to_string(),
            age: 26,
            start_page: PageId::Landing,
            countdown_target: CountdownTarget::NextMidnight,
            reveal_step_ms: 200,
            autoplay_delay_ms: 500,
            moon_settle_ms: 1000,
        }
    }
}

impl SiteConfig {
    /// Parse a JSON config document
    pub fn from_json(json: &str) -> SiteResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a JSON config file
    pub fn load(path: impl AsRef<Path>) -> SiteResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        let config = Self::from_json(&raw)?;
        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    pub fn reveal_step(&self) -> Duration {
        Duration::from_millis(self.reveal_step_ms)
    }

    pub fn autoplay_delay(&self) -> Duration {
        Duration::from_millis(self.autoplay_delay_ms)
    }

    pub fn moon_settle(&self) -> Duration {
        Duration::from_millis(self.moon_settle_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_is_default() {
        let config = SiteConfig::from_json("{}").unwrap();
        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.reveal_step(), Duration::from_millis(200));
        assert_eq!(config.autoplay_delay(), Duration::from_millis(500));
    }

    #[test]
    fn test_partial_override() {
        let config = SiteConfig::from_json(
            r#"{
                "media_root": "/srv/party",
                "celebrant": "Sam",
                "start_page": "special",
                "countdown_target": "2026-03-02T00:00:00+05:30"
            }"#,
        )
        .unwrap();

        assert_eq!(config.media_root, PathBuf::from("/srv/party"));
        assert_eq!(config.celebrant, "Sam");
        assert_eq!(config.start_page, PageId::Special);
        assert!(matches!(config.countdown_target, CountdownTarget::At(_)));
        assert_eq!(config.age, 26);
    }

    #[test]
    fn test_invalid_target_is_rejected() {
        let err = SiteConfig::from_json(r#"{ "countdown_target": "tomorrow-ish" }"#).unwrap_err();
        assert!(matches!(err, SiteError::Config(_)));
        assert!(matches!(
            CountdownTarget::parse("not a date"),
            Err(SiteError::InvalidTarget(_))
        ));
    }

    #[test]
    fn test_midnight_keyword() {
        assert_eq!(
            CountdownTarget::parse("Midnight").unwrap(),
            CountdownTarget::NextMidnight
        );
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("site.json");
        std::fs::write(&path, r#"{ "age": 30 }"#).unwrap();

        let config = SiteConfig::load(&path).unwrap();
        assert_eq!(config.age, 30);

        assert!(matches!(
            SiteConfig::load(dir.path().join("missing.json")),
            Err(SiteError::Io(_))
        ));
    }
}
