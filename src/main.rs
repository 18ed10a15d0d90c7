#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use anyhow::Context as _;
use celebration_core::{CountdownTarget, PageId, SiteConfig};
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use tracing_subscriber::EnvFilter;

/// Site configuration, resolved once from the config file and command line
static SITE_CONFIG: OnceLock<SiteConfig> = OnceLock::new();

/// Get the resolved site configuration (defaults if not yet set)
pub fn get_site_config() -> SiteConfig {
    SITE_CONFIG.get().cloned().unwrap_or_default()
}

/// Birthday celebration - a night sky of memories
#[derive(Parser, Debug)]
#[command(name = "celebration-desktop")]
#[command(about = "A birthday celebration with countdown, galleries and 26 reasons")]
struct Args {
    /// JSON config file (values are overridden by the flags below)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Folder containing photos/, videos/, chats/ and music/
    #[arg(short, long)]
    media_dir: Option<PathBuf>,

    /// Background track (defaults to the first file in music/)
    #[arg(short, long)]
    audio: Option<PathBuf>,

    /// Name of the birthday person
    #[arg(short, long)]
    name: Option<String>,

    /// Countdown target: RFC 3339 instant or "midnight"
    #[arg(short, long)]
    target: Option<String>,

    /// Page to open on launch (landing, photos, chats, videos, special, wishes)
    #[arg(short = 'p', long)]
    start_page: Option<String>,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    log_level: String,
}

/// Media root when neither the config file nor the command line names one
fn default_media_root() -> PathBuf {
    let local = PathBuf::from("assets");
    if local.is_dir() {
        return local;
    }
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("celebration")
}

fn resolve_config(args: &Args) -> anyhow::Result<SiteConfig> {
    let mut config = match &args.config {
        Some(path) => SiteConfig::load(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => SiteConfig {
            media_root: default_media_root(),
            ..SiteConfig::default()
        },
    };

    if let Some(dir) = &args.media_dir {
        config.media_root = dir.clone();
    }
    if let Some(track) = &args.audio {
        config.audio_track = Some(track.clone());
    }
    if let Some(name) = &args.name {
        config.celebrant = name.clone();
    }
    if let Some(target) = &args.target {
        config.countdown_target = CountdownTarget::parse(target)
            .with_context(|| format!("invalid --target {:?}", target))?;
    }
    if let Some(page) = &args.start_page {
        config.start_page = PageId::resolve(page);
    }

    Ok(config)
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = resolve_config(&args)?;

    tracing::info!(
        celebrant = %config.celebrant,
        media_root = ?config.media_root,
        start_page = %config.start_page,
        "Starting celebration"
    );

    let title = format!("Happy Birthday, {}", config.celebrant);
    let _ = SITE_CONFIG.set(config);

    let window = Config::new().with_window(
        WindowBuilder::new()
            .with_title(&title)
            .with_inner_size(dioxus::desktop::LogicalSize::new(1200.0, 850.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(window)
        .launch(app::App);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(extra: &[&str]) -> Args {
        let mut argv = vec!["celebration-desktop"];
        argv.extend_from_slice(extra);
        Args::parse_from(argv)
    }

    #[test]
    fn test_flags_override_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("site.json");
        std::fs::write(&path, r#"{"celebrant": "Mira", "age": 30, "media_root": "/srv/m"}"#)
            .unwrap();

        let config = resolve_config(&args(&[
            "--config",
            path.to_str().unwrap(),
            "--name",
            "Ayu",
            "--start-page",
            "Special",
        ]))
        .unwrap();

        assert_eq!(config.celebrant, "Ayu");
        assert_eq!(config.age, 30);
        assert_eq!(config.media_root, PathBuf::from("/srv/m"));
        assert_eq!(config.start_page, PageId::Special);
    }

    #[test]
    fn test_unknown_start_page_falls_back_to_landing() {
        let config = resolve_config(&args(&["-p", "attic"])).unwrap();
        assert_eq!(config.start_page, PageId::Landing);
    }

    #[test]
    fn test_bad_target_is_an_error() {
        assert!(resolve_config(&args(&["--target", "next tuesday"])).is_err());
    }

    #[test]
    fn test_missing_config_file_is_an_error() {
        assert!(resolve_config(&args(&["--config", "/nonexistent/site.json"])).is_err());
    }
}
