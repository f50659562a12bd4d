//! Shared error types for the services crate.

use thiserror::Error;

use guess_core::model::ImageUrlError;

/// Errors emitted by an `ImageProvider`.
///
/// The game recovers from all of them by keeping the placeholder image.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FetchError {
    #[error("image provider returned status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error("image provider resolved to an unusable URL")]
    InvalidUrl(#[from] ImageUrlError),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// Errors emitted by a `Downloader`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DownloadError {
    #[error("image download failed with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error("could not write image: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors emitted while reading `GameConfig` values.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("invalid image endpoint {raw:?}: {source}")]
    InvalidImageUrl { raw: String, source: ImageUrlError },
    #[error("invalid reveal duration {raw:?}: expected milliseconds")]
    InvalidRevealMillis { raw: String },
    #[error("invalid value for {name}: {raw:?}")]
    InvalidFlag { name: &'static str, raw: String },
    #[error("download file name cannot be empty")]
    EmptyFileName,
}
