#![forbid(unsafe_code)]

pub mod config;
pub mod downloader;
pub mod error;
pub mod game_loop;
pub mod image_provider;
pub mod targets;

pub use guess_core::Clock;

pub use config::GameConfig;
pub use downloader::{DownloadReceipt, Downloader, HttpDownloader};
pub use error::{ConfigError, DownloadError, FetchError};
pub use game_loop::GameLoopService;
pub use image_provider::{HttpImageProvider, ImageProvider};
pub use targets::{RandomTargets, ScriptedTargets, TargetSource};
