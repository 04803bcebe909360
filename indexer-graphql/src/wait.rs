//! Waiting for a write to become visible through the indexer.
//!
//! A transaction is mined before the indexer has ingested its events, so a
//! query issued right after a write may not see it. [`wait_for_indexed`]
//! polls the indexer for the events of a transaction at a fixed interval and
//! gives up after a bounded number of attempts.
//!
//! The wait cannot be cancelled from the inside; callers that need a
//! deadline race it with `tokio::time::timeout` or `tokio::select!`.

use std::time::Duration;

use alloy::primitives::TxHash;
use tokio_retry::{strategy::FixedInterval, RetryIf};
use tracing::{debug, info, warn};

use crate::errors::IndexerError;
use crate::queries::IndexerClient;

/// Default delay between two polls.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(1);

/// Default number of polls before giving up.
pub const DEFAULT_MAX_ATTEMPTS: usize = 10;

/// Bound of a [`wait_for_indexed`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaitPolicy {
    /// Delay between two polls.
    pub interval: Duration,
    /// Total number of polls, the first one included. Zero is treated as one.
    pub max_attempts: usize,
}

impl Default for WaitPolicy {
    fn default() -> Self {
        Self {
            interval: DEFAULT_POLL_INTERVAL,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

impl WaitPolicy {
    pub fn new(interval: Duration, max_attempts: usize) -> Self {
        Self {
            interval,
            max_attempts,
        }
    }

    /// Number of polls actually issued before timing out.
    pub fn attempts(&self) -> usize {
        self.max_attempts.max(1)
    }

    /// Total time spent sleeping before a timeout is reported. Saturates at
    /// `Duration::MAX`.
    pub fn budget(&self) -> Duration {
        let sleeps = u32::try_from(self.attempts() - 1).unwrap_or(u32::MAX);
        self.interval.saturating_mul(sleeps)
    }
}

/// Waits until the indexer has recorded at least one event for `hash`.
///
/// `None` means no write happened and returns immediately without querying.
/// Only the "not indexed yet" outcome is retried; transport and query
/// errors are returned as soon as they occur.
///
/// # Errors
///
/// [`IndexerError::Timeout`] once `policy.attempts()` polls came back empty.
pub async fn wait_for_indexed(
    client: &IndexerClient,
    hash: Option<TxHash>,
    policy: &WaitPolicy,
) -> Result<(), IndexerError> {
    let Some(hash) = hash else {
        return Ok(());
    };

    let attempts = policy.attempts();
    let strategy = FixedInterval::new(policy.interval).take(attempts - 1);
    let mut attempt = 0usize;

    let result = RetryIf::start(
        strategy,
        || {
            attempt += 1;
            let current = attempt;
            async move {
                debug!(tx_hash = %hash, attempt = current, max_attempts = attempts, "Waiting for transaction to be indexed");
                let events = client.transaction_events(hash).await?;
                if events.is_empty() {
                    Err(IndexerError::NotYetIndexed(hash))
                } else {
                    Ok(current)
                }
            }
        },
        |err: &IndexerError| matches!(err, IndexerError::NotYetIndexed(_)),
    )
    .await;

    match result {
        Ok(polls) => {
            info!(tx_hash = %hash, attempts = polls, "Transaction indexed");
            Ok(())
        }
        Err(IndexerError::NotYetIndexed(hash)) => {
            warn!(tx_hash = %hash, attempts, "Transaction not indexed in time");
            Err(IndexerError::Timeout { hash, attempts })
        }
        Err(err) => Err(err),
    }
}
