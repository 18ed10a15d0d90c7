//! Error types for the celebration site

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for celebration core operations
#[derive(Error, Debug)]
pub enum SiteError {
    /// Page name does not match any known page
    #[error("Unknown page: {0}")]
    UnknownPage(String),

    /// Media folder for a gallery does not exist
    #[error("Media folder not found: {}", .0.display())]
    MissingFolder(PathBuf),

    /// A media file could not be read
    #[error("Unreadable media file {}: {source}", path.display())]
    UnreadableMedia {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Directory traversal failed
    #[error("Directory scan error: {0}")]
    Scan(#[from] walkdir::Error),

    /// Configuration file could not be parsed
    #[error("Invalid config: {0}")]
    Config(#[from] serde_json::Error),

    /// Countdown target is not a valid RFC 3339 instant
    #[error("Invalid countdown target: {0}")]
    InvalidTarget(String),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using SiteError
pub type SiteResult<T> = Result<T, SiteError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SiteError::UnknownPage("gallery".to_string());
        assert_eq!(format!("{}", err), "Unknown page: gallery");

        let err = SiteError::MissingFolder(PathBuf::from("assets/photos"));
        assert_eq!(format!("{}", err), "Media folder not found: assets/photos");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let site_err: SiteError = io_err.into();
        assert!(matches!(site_err, SiteError::Io(_)));
    }
}
