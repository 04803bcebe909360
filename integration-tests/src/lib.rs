//! # Integration Tests
//!
//! End-to-end harness for the Multivault stack: a chain running the vault
//! contract, the GraphQL indexer and the JSON pinning service.
//!
//! ## Modules
//!
//! - [`config`]: settings from the environment and the shared [`Stack`]
//! - [`accounts`]: mnemonic derived signers and faucet funding
//! - [`actor`]: a signing account taking part in a scenario
//! - [`reconcile`]: get-or-create of atoms and triples
//! - [`scripts`]: seed flows, also shipped as binaries
//! - [`telemetry`]: tracing setup
//! - [`errors`]: error types
//!
//! The scenarios themselves live under `tests/`. Those talking to a running
//! stack are ignored by default:
//!
//! ```text
//! cargo test -p integration-tests -- --ignored
//! ```

pub mod accounts;
pub mod actor;
pub mod config;
pub mod errors;
pub mod reconcile;
pub mod scripts;
pub mod telemetry;

pub use actor::Actor;
pub use config::{Stack, TestConfig};
pub use errors::{ConfigError, HarnessError};
pub use telemetry::{init_test_tracing, init_tracing};
