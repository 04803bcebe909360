//! # Indexer GraphQL
//!
//! Client for the read side of the Multivault stack: a Hasura-style GraphQL
//! API fed by the chain indexer.
//!
//! ## Modules
//!
//! - [`interfaces`]: the [`GraphqlTransport`] seam
//! - [`http`]: the reqwest-backed transport
//! - [`mock`]: queued canned responses for tests
//! - [`queries`]: operation documents and the typed [`IndexerClient`]
//! - [`types`]: response and input types
//! - [`wait`]: waiting for a transaction to become visible
//! - [`errors`]: error types
pub mod errors;
pub mod http;
pub mod interfaces;
pub mod mock;
pub mod queries;
pub mod types;
pub mod wait;

pub use errors::IndexerError;
pub use http::HttpTransport;
pub use interfaces::GraphqlTransport;
pub use mock::MockTransport;
pub use queries::IndexerClient;
pub use types::{GraphqlRequest, GraphqlResponse};
pub use wait::{wait_for_indexed, WaitPolicy};
