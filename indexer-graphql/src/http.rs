//! HTTP transport for the indexer's GraphQL endpoint.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header::ACCEPT, Client as ReqwestClient};
use serde_json::Value;
use tracing::debug;
use url::Url;

use crate::errors::IndexerError;
use crate::interfaces::GraphqlTransport;
use crate::types::{GraphqlRequest, GraphqlResponse};

/// Media type the endpoint is asked to answer with.
pub const GRAPHQL_RESPONSE_MEDIA_TYPE: &str = "application/graphql-response+json";

/// Upper bound of a single request, connection included.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Posts GraphQL operations to a single endpoint.
///
/// # Example
///
/// ```ignore
/// use indexer_graphql::HttpTransport;
///
/// let transport = HttpTransport::new("http://localhost:8080/v1/graphql".parse()?)?;
/// ```
pub struct HttpTransport {
    url: Url,
    client: ReqwestClient,
}

impl HttpTransport {
    /// Transport with [`DEFAULT_REQUEST_TIMEOUT`].
    pub fn new(url: Url) -> Result<Self, IndexerError> {
        Self::with_timeout(url, DEFAULT_REQUEST_TIMEOUT)
    }

    /// Transport whose requests fail with a timeout error after `timeout`.
    pub fn with_timeout(url: Url, timeout: Duration) -> Result<Self, IndexerError> {
        let client = ReqwestClient::builder().timeout(timeout).build()?;
        Ok(HttpTransport { url, client })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

#[async_trait]
impl GraphqlTransport for HttpTransport {
    async fn execute(&self, request: &GraphqlRequest) -> Result<Value, IndexerError> {
        debug!(operation = %request.operation_name, url = %self.url, "Executing GraphQL operation");

        let response = self
            .client
            .post(self.url.clone())
            .header(ACCEPT, GRAPHQL_RESPONSE_MEDIA_TYPE)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(IndexerError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let envelope: GraphqlResponse = response.json().await?;
        envelope.into_data(&request.operation_name)
    }
}
