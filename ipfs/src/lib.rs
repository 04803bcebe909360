//! IPFS pinning client for JSON metadata.
//!
//! This crate provides:
//! - [`JsonPinner`] trait for abstracting the pinning service
//! - [`PinningClient`] production client that posts to the pinning service
//! - [`MockPinner`] content-addressed mock for tests
//! - [`schema`] schema.org JSON-LD documents used as atom metadata
//!
//! ## Usage
//!
//! ```ignore
//! use ipfs::schema::{SchemaDocument, Thing};
//! use ipfs::{JsonPinner, PinningClient};
//!
//! let pinner = PinningClient::new(pinning_url)?;
//! let uri = pinner.pin_json(&Thing::named("Denver Events").to_json()).await?;
//! assert!(uri.starts_with("ipfs://"));
//! ```

mod mock;
pub mod schema;

pub use mock::MockPinner;

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client as ReqwestClient;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, info};
use url::Url;

#[derive(Debug, thiserror::Error)]
pub enum PinningError {
    #[error("reqwest error: {0}")]
    Reqwest(#[from] reqwest::Error),
    #[error("pinning service returned {status}: {body}")]
    Status { status: u16, body: String },
    #[error("pinning service returned an empty hash for {name}")]
    EmptyHash { name: String },
}

pub type Result<T> = std::result::Result<T, PinningError>;

/// Prefix of every URI returned by a pinner.
pub const IPFS_SCHEME: &str = "ipfs://";

/// Upper bound of a single upload, connection included.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Body returned by the pinning service for an uploaded document.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PinResponse {
    pub name: String,
    pub hash: String,
    pub size: String,
}

impl PinResponse {
    /// `ipfs://` URI of the pinned document.
    pub fn into_uri(self) -> Result<String> {
        if self.hash.is_empty() {
            return Err(PinningError::EmptyHash { name: self.name });
        }
        Ok(format!("{IPFS_SCHEME}{}", self.hash))
    }
}

/// Trait for pinning JSON documents to IPFS.
///
/// Production code uses [`PinningClient`]; tests use [`MockPinner`].
#[async_trait]
pub trait JsonPinner: Send + Sync {
    /// Pin `document` and return its `ipfs://<hash>` URI.
    async fn pin_json(&self, document: &Value) -> Result<String>;
}

/// Client for the `upload_json_to_ipfs` endpoint of the pinning service.
pub struct PinningClient {
    url: Url,
    client: ReqwestClient,
}

impl PinningClient {
    pub fn new(url: Url) -> Result<Self> {
        Self::with_timeout(url, DEFAULT_REQUEST_TIMEOUT)
    }

    pub fn with_timeout(url: Url, timeout: Duration) -> Result<Self> {
        let client = ReqwestClient::builder().timeout(timeout).build()?;
        Ok(PinningClient { url, client })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

#[async_trait]
impl JsonPinner for PinningClient {
    async fn pin_json(&self, document: &Value) -> Result<String> {
        debug!(url = %self.url, "Pinning JSON document");
        let res = self
            .client
            .post(self.url.clone())
            .json(document)
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            return Err(PinningError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let pinned: PinResponse = res.json().await?;
        let size = pinned.size.clone();
        let uri = pinned.into_uri()?;
        info!(uri = %uri, size = %size, "Pinned JSON document");
        Ok(uri)
    }
}
