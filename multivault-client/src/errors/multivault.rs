//! Errors raised while reading from or writing to the vault contract.
use alloy::primitives::TxHash;
use thiserror::Error;

/// Represents errors that can occur while talking to the vault contract.
///
/// Lookups that find nothing are not errors; they return `Ok(None)`.
#[derive(Debug, Error)]
pub enum MultivaultError {
    #[error("Contract call error: {0}")]
    Contract(#[from] alloy::contract::Error),

    #[error("Transport error: {0}")]
    Transport(#[from] alloy::transports::TransportError),

    #[error("Pending transaction error: {0}")]
    PendingTransaction(#[from] alloy::providers::PendingTransactionError),

    #[error("Transaction {0} reverted")]
    Reverted(TxHash),

    #[error("Receipt of {hash} has no {event} event")]
    MissingEvent { event: &'static str, hash: TxHash },

    /// The contract refused a create because the entity already exists.
    #[error("Already exists: {0}")]
    AlreadyExists(String),

    #[error("Invalid URI: {0}")]
    InvalidUri(String),

    #[error("Write rejected: {0}")]
    Rejected(String),
}

impl MultivaultError {
    /// Create an invalid URI error.
    pub fn invalid_uri(msg: impl Into<String>) -> Self {
        Self::InvalidUri(msg.into())
    }

    /// Create an already exists error.
    pub fn already_exists(msg: impl Into<String>) -> Self {
        Self::AlreadyExists(msg.into())
    }

    /// Create a rejected write error.
    pub fn rejected(msg: impl Into<String>) -> Self {
        Self::Rejected(msg.into())
    }

    /// Whether the error is the duplicate-key revert of a create call.
    pub fn is_already_exists(&self) -> bool {
        matches!(self, Self::AlreadyExists(_))
    }
}
