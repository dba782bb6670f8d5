use super::{Block, MempoolTransaction};
use crate::error_fmt::error_chain_fmt;
use reqwest::{Client, Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde_json::value::RawValue;
use std::{fmt::Debug, time::Duration};
use tracing::instrument;

#[derive(thiserror::Error)]
pub enum ExplorerError {
    #[error("Failed to build the explorer http client")]
    InvalidClient(#[source] reqwest::Error),
    #[error("{0} is not a valid explorer base url")]
    InvalidBaseUrl(String),
    #[error("{0:?} is not a valid transaction id")]
    InvalidTransactionId(String),
    #[error("Explorer API is unreachable")]
    Unreachable(#[source] reqwest::Error),
    #[error("Explorer API is rate limiting requests")]
    RateLimited,
    #[error("Explorer API responded with unexpected status {status}")]
    UnexpectedStatus { status: StatusCode },
    #[error("Failed to decode the explorer API response")]
    Decode(#[source] reqwest::Error),
}

impl Debug for ExplorerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

/// Thin client over an Esplora compatible explorer API (blockstream.info, mempool.space).
#[derive(Clone, Debug)]
pub struct ExplorerClient {
    http_client: Client,
    base_url: Url,
}

impl ExplorerClient {
    /// Every request issued by the client is bounded by `timeout`.
    pub fn build(base_url: &str, timeout: Duration) -> Result<Self, ExplorerError> {
        let http_client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(ExplorerError::InvalidClient)?;
        let base_url = Url::parse(base_url)
            .map_err(|e| ExplorerError::InvalidBaseUrl(format!("{} ({})", base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(ExplorerError::InvalidBaseUrl(base_url.to_string()));
        }
        Ok(Self {
            http_client,
            base_url,
        })
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_str().trim_end_matches('/')
    }

    //https://blockstream.info/api/blocks
    #[instrument(skip(self))]
    pub async fn recent_blocks(&self) -> Result<Vec<Block>, ExplorerError> {
        self.get_json(&["blocks"]).await
    }

    //https://blockstream.info/api/mempool/recent
    #[instrument(skip(self))]
    pub async fn recent_mempool(&self) -> Result<Vec<MempoolTransaction>, ExplorerError> {
        self.get_json(&["mempool", "recent"]).await
    }

    /// Fetches a single transaction, keeping the upstream body byte for byte.
    //https://blockstream.info/api/tx/{txid}
    #[instrument(skip(self))]
    pub async fn transaction(&self, txid: &str) -> Result<Box<RawValue>, ExplorerError> {
        // dot segments would be dropped from the url instead of being encoded
        if matches!(txid, "" | "." | "..") {
            return Err(ExplorerError::InvalidTransactionId(txid.to_owned()));
        }
        self.get_json(&["tx", txid]).await
    }

    /// Appends `segments` to the base url, percent encoding each one so that `/`,
    /// `?` or `#` inside a segment can't change the path being requested.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, ExplorerError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ExplorerError::InvalidBaseUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<T, ExplorerError> {
        let url = self.endpoint(segments)?;
        let response = self
            .http_client
            .get(url)
            .send()
            .await
            .map_err(ExplorerError::Unreachable)?;
        let response = check_status(response)?;
        response.json::<T>().await.map_err(|e| {
            if e.is_timeout() {
                ExplorerError::Unreachable(e)
            } else {
                ExplorerError::Decode(e)
            }
        })
    }
}

fn check_status(response: Response) -> Result<Response, ExplorerError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    tracing::debug!("explorer responded with {:?} for {}", status, response.url());
    if status == StatusCode::TOO_MANY_REQUESTS {
        return Err(ExplorerError::RateLimited);
    }
    Err(ExplorerError::UnexpectedStatus { status })
}
