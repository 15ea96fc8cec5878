use reqwest::Client;
use std::time::Duration;
use tracing::debug;

use crate::{LoadError, VoieRecord};

/// HTTP side of the loader: one GET, no retry.
pub struct DatasetClient {
    client: Client,
}

impl DatasetClient {
    /// `timeout_secs` of `None` leaves the request unbounded.
    pub fn new(timeout_secs: Option<u64>) -> Result<Self, LoadError> {
        let mut builder = Client::builder();
        if let Some(secs) = timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            client: builder.build()?,
        })
    }

    pub async fn fetch(&self, url: &str) -> Result<Vec<VoieRecord>, LoadError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Status(status));
        }

        let body = response.bytes().await?;
        debug!("Fetched {} bytes from {}", body.len(), url);

        Ok(serde_json::from_slice(&body)?)
    }
}
