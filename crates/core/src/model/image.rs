use std::fmt;

use thiserror::Error;
use url::Url;

//
// ─── ERRORS (domain validation) ────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ImageUrlError {
    #[error("image URL cannot be empty")]
    Empty,

    #[error("image URL is not a valid absolute URL: {0}")]
    Invalid(String),

    #[error("image URL must use http or https, got {0}")]
    UnsupportedScheme(String),
}

//
// ─── IMAGE URL ─────────────────────────────────────────────────────────────────
//

/// Absolute http(s) address of a fetched image.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImageUrl(Url);

impl ImageUrl {
    /// # Errors
    ///
    /// Returns `ImageUrlError` when the input is empty, unparsable, or not http(s).
    pub fn parse(raw: impl AsRef<str>) -> Result<Self, ImageUrlError> {
        let s = raw.as_ref().trim();
        if s.is_empty() {
            return Err(ImageUrlError::Empty);
        }
        let url = Url::parse(s).map_err(|_| ImageUrlError::Invalid(s.to_string()))?;
        match url.scheme() {
            "http" | "https" => Ok(Self(url)),
            other => Err(ImageUrlError::UnsupportedScheme(other.to_string())),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for ImageUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.as_str())
    }
}

//
// ─── ROUND IMAGE ───────────────────────────────────────────────────────────────
//

/// What the current round has to show in the image slot.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ImageState {
    /// Fetch requested, no result yet. The placeholder is shown.
    #[default]
    Loading,
    Ready(ImageUrl),
    /// Fetch failed. The placeholder stays for the rest of the round.
    Unavailable,
}

impl ImageState {
    #[must_use]
    pub fn url(&self) -> Option<&ImageUrl> {
        match self {
            ImageState::Ready(url) => Some(url),
            ImageState::Loading | ImageState::Unavailable => None,
        }
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, ImageState::Loading)
    }
}
