//! Error types for the Multivault client.
mod multivault;

pub use multivault::MultivaultError;
