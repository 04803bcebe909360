//! Error types for the indexer client.
mod indexer_error;

pub use indexer_error::IndexerError;
