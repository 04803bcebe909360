//! EVM implementation of the vault client.
//!
//! Talks to a deployed `EthMultiVault` contract through an alloy provider.
//! Writes are signed by the wallet attached to the provider and awaited
//! until their receipt is available; ids of new vaults are read back from
//! the `AtomCreated` and `TripleCreated` logs.
mod bindings;
mod client;

pub use bindings::EthMultiVault;
pub use client::EvmMultivault;
