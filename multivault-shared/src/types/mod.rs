mod config;
mod record;
mod system_atom;
mod triple_key;

pub use config::{GeneralConfig, VaultState};
pub use record::{TripleRecord, TxRecord};
pub use system_atom::SystemAtom;
pub use triple_key::TripleKey;

/// Numeric identifier of an atom or triple vault, assigned by the contract at
/// creation. Zero is never a valid id.
pub type VaultId = alloy::primitives::U256;
