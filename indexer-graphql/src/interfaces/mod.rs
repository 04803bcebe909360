//! This module defines and re-exports the transport interface of the indexer client.
mod transport;

pub use transport::GraphqlTransport;
