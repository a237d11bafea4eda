use serde_json::Value;
use surf::StatusCode;
use thiserror::Error;
use tracing::warn;

use super::Fetch;

#[derive(Error, Debug)]
pub enum SurfFetchError {
    #[error("request failed: {0}")]
    Request(surf::Error),
    #[error("unexpected response status: {0}")]
    Status(StatusCode),
}

/// `Fetch` over a real HTTP client.
#[derive(Clone)]
pub struct SurfFetcher {
    client: surf::Client,
}

impl SurfFetcher {
    pub fn new() -> Self {
        SurfFetcher::with_client(surf::Client::new())
    }

    pub fn with_client(client: surf::Client) -> Self {
        SurfFetcher { client }
    }
}

impl Default for SurfFetcher {
    fn default() -> Self {
        SurfFetcher::new()
    }
}

#[async_trait::async_trait]
impl Fetch for SurfFetcher {
    type Error = SurfFetchError;

    async fn fetch(&self, url: &str) -> Result<Value, SurfFetchError> {
        let mut res = self
            .client
            .get(url)
            .await
            .map_err(SurfFetchError::Request)?;

        let status = res.status();
        if !status.is_success() {
            warn!(status = u16::from(status), "photo search answered with an error status");
            return Err(SurfFetchError::Status(status));
        }

        res.body_json().await.map_err(SurfFetchError::Request)
    }
}
