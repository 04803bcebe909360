//! GraphQL operations used by the suite and the typed client that runs them.
mod client;
pub mod documents;

pub use client::IndexerClient;
