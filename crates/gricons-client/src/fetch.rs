//! Transport seam for icon content

use async_trait::async_trait;

use crate::error::{ClientError, Result};

/// Fetches icon markup by URL.
///
/// The store owns caching and request coalescing; implementations only
/// move bytes. Tests substitute deterministic fetchers.
#[async_trait]
pub trait SvgFetcher: Send + Sync {
    /// Fetch the body at `url`.
    ///
    /// # Errors
    ///
    /// Implementations return an error for transport failures and
    /// non-success statuses.
    async fn fetch(&self, url: &str) -> Result<String>;
}

/// Default fetcher backed by a shared reqwest client.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    /// Build a fetcher with a request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl SvgFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }
        Ok(response.text().await?)
    }
}
