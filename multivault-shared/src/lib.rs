//! # Multivault Shared
//! This crate defines the data model shared across the Multivault integration
//! suite: vault identifiers, transaction records, triple keys, the system atom
//! vocabulary and contract configuration snapshots.
pub mod types;
