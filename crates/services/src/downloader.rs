use std::path::PathBuf;

use async_trait::async_trait;
use guess_core::model::ImageUrl;
use reqwest::Client;
use tracing::debug;

use crate::error::DownloadError;

/// Where a finished download landed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadReceipt {
    pub path: PathBuf,
    pub bytes: u64,
}

/// Saves images to the local download directory.
#[async_trait]
pub trait Downloader: Send + Sync {
    /// Download `url` into a local file.
    ///
    /// # Errors
    ///
    /// Returns `DownloadError` when the request fails, the server answers
    /// with an error status, or the file cannot be written.
    async fn download(&self, url: &ImageUrl) -> Result<DownloadReceipt, DownloadError>;
}

/// Downloader that GETs the image and writes it to `<dir>/<file_name>`.
///
/// Every download targets the same file, so a later download replaces the
/// previous one. Partial files are not cleaned up on failure.
#[derive(Clone)]
pub struct HttpDownloader {
    client: Client,
    dir: PathBuf,
    file_name: String,
}

impl HttpDownloader {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>, file_name: impl Into<String>) -> Self {
        Self::with_client(Client::new(), dir, file_name)
    }

    #[must_use]
    pub fn with_client(client: Client, dir: impl Into<PathBuf>, file_name: impl Into<String>) -> Self {
        Self {
            client,
            dir: dir.into(),
            file_name: file_name.into(),
        }
    }

    #[must_use]
    pub fn target_path(&self) -> PathBuf {
        self.dir.join(&self.file_name)
    }
}

#[async_trait]
impl Downloader for HttpDownloader {
    async fn download(&self, url: &ImageUrl) -> Result<DownloadReceipt, DownloadError> {
        let response = self.client.get(url.as_str()).send().await?;

        if !response.status().is_success() {
            return Err(DownloadError::HttpStatus(response.status()));
        }

        let body = response.bytes().await?;
        tokio::fs::create_dir_all(&self.dir).await?;
        let path = self.target_path();
        tokio::fs::write(&path, &body).await?;

        let bytes = u64::try_from(body.len()).unwrap_or(u64::MAX);
        debug!(%url, path = %path.display(), bytes, "image written");
        Ok(DownloadReceipt { path, bytes })
    }
}
