use serde_json::Value;

use crate::errors::IndexerError;
use crate::types::GraphqlRequest;

/// Executes GraphQL operations against the indexer.
///
/// Implementations return the `data` member of a successful response.
/// GraphQL errors, HTTP failures and a missing `data` member are reported as
/// [`IndexerError`]s, so callers only ever decode well-formed data.
#[async_trait::async_trait]
pub trait GraphqlTransport: Send + Sync {
    async fn execute(&self, request: &GraphqlRequest) -> Result<Value, IndexerError>;
}
