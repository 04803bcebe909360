//! Error types for the integration harness.

use alloy::primitives::TxHash;
use alloy::providers::PendingTransactionError;
use alloy::signers::local::LocalSignerError;
use alloy::transports::TransportError;
use indexer_graphql::IndexerError;
use ipfs::PinningError;
use multivault_client::MultivaultError;
use thiserror::Error;

/// Errors raised while reading the harness configuration.
///
/// Configuration problems are reported before any network call is made.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A required environment variable is not set.
    #[error("Missing required environment variable {0}")]
    Missing(&'static str),

    /// An environment variable is set but cannot be parsed.
    #[error("Invalid value for {var}: {reason}")]
    Invalid { var: &'static str, reason: String },
}

impl ConfigError {
    /// Create an invalid value error.
    pub fn invalid(var: &'static str, reason: impl ToString) -> Self {
        Self::Invalid {
            var,
            reason: reason.to_string(),
        }
    }
}

/// Errors that can occur while setting up actors or running a scenario.
#[derive(Error, Debug)]
pub enum HarnessError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Multivault error: {0}")]
    Multivault(#[from] MultivaultError),

    #[error("Indexer error: {0}")]
    Indexer(#[from] IndexerError),

    #[error("Pinning error: {0}")]
    Pinning(#[from] PinningError),

    /// Deriving or parsing a signing key failed.
    #[error("Signer error: {0}")]
    Signer(#[from] LocalSignerError),

    #[error("RPC error: {0}")]
    Rpc(#[from] TransportError),

    #[error("Pending transaction error: {0}")]
    PendingTransaction(#[from] PendingTransactionError),

    /// The faucet transfer was mined but reverted.
    #[error("Faucet transfer {0} reverted")]
    FaucetReverted(TxHash),

    #[error("Tracing error: {0}")]
    Tracing(#[from] tracing_subscriber::util::TryInitError),
}

impl HarnessError {
    /// Whether the error is an indexing timeout rather than a transport or
    /// contract failure.
    pub fn is_indexing_timeout(&self) -> bool {
        matches!(self, Self::Indexer(err) if err.is_timeout())
    }
}
