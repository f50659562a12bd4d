use std::env;
use std::path::PathBuf;

use chrono::Duration;
use guess_core::DEFAULT_REVEAL_MILLIS;
use guess_core::model::ImageUrl;

use crate::error::ConfigError;

pub const DEFAULT_IMAGE_ENDPOINT: &str = "https://picsum.photos/400";
pub const DEFAULT_DOWNLOAD_FILE: &str = "image.jpg";

pub const ENV_IMAGE_URL: &str = "GUESS_IMAGE_URL";
pub const ENV_DOWNLOAD_DIR: &str = "GUESS_DOWNLOAD_DIR";
pub const ENV_DOWNLOAD_FILE: &str = "GUESS_DOWNLOAD_FILE";
pub const ENV_REVEAL_MS: &str = "GUESS_REVEAL_MS";
pub const ENV_SHOW_TARGET_HINT: &str = "GUESS_SHOW_TARGET_HINT";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameConfig {
    pub image_endpoint: ImageUrl,
    pub download_dir: PathBuf,
    pub download_file_name: String,
    pub reveal_duration: Duration,
    /// Show the round's target in the hint label, as the first release did.
    pub show_target_hint: bool,
}

impl GameConfig {
    /// Read the config from `GUESS_*` environment variables, falling back to defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when a variable is set to an unusable value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as `from_env`, reading values through `lookup`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when a value is unusable.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        let value = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(raw) = value(ENV_IMAGE_URL) {
            config.image_endpoint = parse_image_endpoint(&raw)?;
        }
        if let Some(raw) = value(ENV_DOWNLOAD_DIR) {
            config.download_dir = PathBuf::from(raw.trim());
        }
        if let Some(raw) = value(ENV_DOWNLOAD_FILE) {
            config.download_file_name = parse_file_name(&raw)?;
        }
        if let Some(raw) = value(ENV_REVEAL_MS) {
            config.reveal_duration = parse_reveal_millis(&raw)?;
        }
        if let Some(raw) = value(ENV_SHOW_TARGET_HINT) {
            config.show_target_hint = parse_flag(ENV_SHOW_TARGET_HINT, &raw)?;
        }
        Ok(config)
    }

    #[must_use]
    pub fn download_path(&self) -> PathBuf {
        self.download_dir.join(&self.download_file_name)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            image_endpoint: parse_image_endpoint(DEFAULT_IMAGE_ENDPOINT)
                .expect("default image endpoint is a valid URL"),
            download_dir: default_download_dir(),
            download_file_name: DEFAULT_DOWNLOAD_FILE.to_string(),
            reveal_duration: Duration::milliseconds(DEFAULT_REVEAL_MILLIS),
            show_target_hint: false,
        }
    }
}

/// `$HOME/Downloads`, or the working directory when there is no home.
#[must_use]
pub fn default_download_dir() -> PathBuf {
    env::var_os("HOME")
        .filter(|home| !home.is_empty())
        .map(|home| PathBuf::from(home).join("Downloads"))
        .or_else(|| env::current_dir().ok())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// # Errors
///
/// Returns `ConfigError::InvalidImageUrl` for anything but an absolute http(s) URL.
pub fn parse_image_endpoint(raw: &str) -> Result<ImageUrl, ConfigError> {
    ImageUrl::parse(raw).map_err(|source| ConfigError::InvalidImageUrl {
        raw: raw.to_string(),
        source,
    })
}

/// # Errors
///
/// Returns `ConfigError::InvalidRevealMillis` unless `raw` is a non-negative integer.
pub fn parse_reveal_millis(raw: &str) -> Result<Duration, ConfigError> {
    let millis: u32 = raw
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidRevealMillis {
            raw: raw.to_string(),
        })?;
    Ok(Duration::milliseconds(i64::from(millis)))
}

/// # Errors
///
/// Returns `ConfigError::EmptyFileName` for blank names or names with path separators.
pub fn parse_file_name(raw: &str) -> Result<String, ConfigError> {
    let name = raw.trim();
    if name.is_empty() || name.contains(['/', '\\']) {
        return Err(ConfigError::EmptyFileName);
    }
    Ok(name.to_string())
}

fn parse_flag(name: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidFlag {
            name,
            raw: raw.to_string(),
        }),
    }
}
