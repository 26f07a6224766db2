//! Retrieval of the published sheet over HTTP
//!
//! One GET per call, no caching, no retries. Transport failures and
//! non-success statuses are returned as errors.

use reqwest::{Client, Url};
use tracing::{debug, info};

use crate::config::Config;
use crate::{Error, Result};

#[derive(Debug, Clone)]
pub struct SheetFetcher {
    client: Client,
    url: Url,
}

impl SheetFetcher {
    pub fn new(url: Url) -> Self {
        Self {
            client: Client::new(),
            url,
        }
    }

    /// Build a fetcher for the configured source URL
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::new(config.source_url()?))
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Download the sheet body as text
    pub async fn download(&self) -> Result<String> {
        info!("Fetching choreography sheet from {}", self.url);

        let response = self
            .client
            .get(self.url.clone())
            .send()
            .await
            .map_err(|e| Error::fetch(self.url.as_str(), e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::http_status(self.url.as_str(), status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| Error::fetch(self.url.as_str(), e))?;

        debug!("Downloaded {} bytes", body.len());
        Ok(body)
    }
}
