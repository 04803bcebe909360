//! # Multivault Client
//! This crate provides the [`MultivaultClient`] trait, the seam through which
//! the integration suite reads and writes atoms, triples and deposits, along
//! with two implementations:
//!
//! - [`EvmMultivault`]: talks to a deployed `EthMultiVault` contract over
//!   JSON-RPC using alloy.
//! - [`MockMultivault`]: an in-memory ledger for tests that run without a
//!   chain.
pub mod errors;
pub mod evm;
pub mod interfaces;
pub mod mock;

pub use errors::MultivaultError;
pub use evm::EvmMultivault;
pub use interfaces::MultivaultClient;
pub use mock::{MockCall, MockLedger, MockMultivault};
