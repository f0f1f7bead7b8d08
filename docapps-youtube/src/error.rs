//! Error types for link parsing

use docapps_common::{ErrorSeverity, Severity};
use thiserror::Error;

/// Result type for YouTube operations
pub type Result<T> = std::result::Result<T, YoutubeError>;

/// Why a pasted link could not be turned into a video
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum YoutubeError {
    #[error("no URL given")]
    Empty,

    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("unsupported URL scheme: {0}")]
    UnsupportedScheme(String),

    #[error("not a YouTube link: {0}")]
    UnsupportedHost(String),

    #[error("no video id in {0}")]
    MissingVideoId(String),

    /// Ids are exactly 11 characters of `[A-Za-z0-9_-]`
    #[error("invalid video id: {0}")]
    InvalidVideoId(String),
}

impl Severity for YoutubeError {
    fn severity(&self) -> ErrorSeverity {
        // Every variant is a rejected paste; the embed keeps its video.
        ErrorSeverity::Warning
    }
}
