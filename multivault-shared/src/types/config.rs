use alloy::primitives::{Address, U256};
use serde::{Deserialize, Serialize};

/// Snapshot of the contract's general configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneralConfig {
    pub admin: Address,
    pub protocol_multisig: Address,
    pub fee_denominator: U256,
    /// Smallest deposit the contract accepts, in wei.
    pub min_deposit: U256,
    pub min_share: U256,
    pub atom_uri_max_length: U256,
    pub decimal_precision: U256,
    pub min_delay: U256,
}

/// Position of an account in a single vault.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct VaultState {
    pub shares: U256,
    pub total_user_assets: U256,
}
