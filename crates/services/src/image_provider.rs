use async_trait::async_trait;
use guess_core::model::ImageUrl;
use reqwest::Client;
use tracing::debug;

use crate::error::FetchError;

/// Source of random images for new rounds.
#[async_trait]
pub trait ImageProvider: Send + Sync {
    /// Resolve the address of a random image.
    ///
    /// # Errors
    ///
    /// Returns `FetchError` when the provider cannot be reached or answers
    /// with an error status.
    async fn fetch_random_image(&self) -> Result<ImageUrl, FetchError>;
}

/// Image provider backed by a redirecting random-image endpoint.
///
/// The endpoint answers a GET with a redirect to a concrete image; the final
/// URL after redirects is the image address. The body is never read.
#[derive(Clone)]
pub struct HttpImageProvider {
    client: Client,
    endpoint: ImageUrl,
}

impl HttpImageProvider {
    #[must_use]
    pub fn new(endpoint: ImageUrl) -> Self {
        Self::with_client(Client::new(), endpoint)
    }

    #[must_use]
    pub fn with_client(client: Client, endpoint: ImageUrl) -> Self {
        Self { client, endpoint }
    }
}

#[async_trait]
impl ImageProvider for HttpImageProvider {
    async fn fetch_random_image(&self) -> Result<ImageUrl, FetchError> {
        let response = self.client.get(self.endpoint.as_str()).send().await?;

        if !response.status().is_success() {
            return Err(FetchError::HttpStatus(response.status()));
        }

        let url = ImageUrl::parse(response.url().as_str())?;
        debug!(endpoint = %self.endpoint, %url, "resolved random image");
        Ok(url)
    }
}
