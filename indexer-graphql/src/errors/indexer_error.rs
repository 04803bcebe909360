//! Indexer error types.
//!
//! A single error type covers transport failures, GraphQL-level failures,
//! decoding failures and the two outcomes of waiting for a transaction.

use alloy::primitives::TxHash;
use thiserror::Error;

/// Errors from indexer operations.
#[derive(Debug, Error)]
pub enum IndexerError {
    /// The request never produced a response.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The endpoint answered with a non-success status.
    #[error("Indexer responded with status {status}: {body}")]
    Status { status: u16, body: String },

    /// The response carried a non-empty `errors` array.
    #[error("Query {operation} failed: {}", .messages.join("; "))]
    Query {
        operation: String,
        messages: Vec<String>,
    },

    /// The response had no `data` member.
    #[error("Query {0} returned no data")]
    MissingData(String),

    /// `data` did not match the expected shape.
    #[error("Failed to decode {operation} response: {source}")]
    Decode {
        operation: String,
        #[source]
        source: serde_json::Error,
    },

    /// The transaction has no indexed event yet. Retried by the wait loop.
    #[error("Transaction {0} is not indexed yet")]
    NotYetIndexed(TxHash),

    /// The wait loop gave up.
    #[error("Transaction {hash} not indexed after {attempts} attempts")]
    Timeout { hash: TxHash, attempts: usize },
}

impl IndexerError {
    /// Create a query error with a single message.
    pub fn query(operation: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Query {
            operation: operation.into(),
            messages: vec![message.into()],
        }
    }

    /// Create a decode error.
    pub fn decode(operation: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Decode {
            operation: operation.into(),
            source,
        }
    }

    /// Whether the error is a wait timeout.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout { .. })
    }
}
