//! This module defines and re-exports the interfaces for the vault contract.
mod multivault;

pub use multivault::MultivaultClient;
