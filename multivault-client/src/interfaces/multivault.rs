//! This module defines the `MultivaultClient` trait, the interface between
//! the integration suite and the vault contract.
use alloy::primitives::{Address, TxHash, U256};
use multivault_shared::types::{GeneralConfig, TripleKey, TxRecord, VaultId, VaultState};

use crate::errors::MultivaultError;

/// A trait that defines the reads and writes the suite performs against the
/// vault contract.
///
/// Each implementation is bound to a single signing account, so actors never
/// share nonces. Lookups are exact-match and return `Ok(None)` when nothing
/// exists for the key.
#[async_trait::async_trait]
pub trait MultivaultClient: Send + Sync {
    /// The account that signs writes issued through this client.
    fn account(&self) -> Address;

    /// Looks up the vault id of the atom whose URI is exactly `uri`.
    async fn lookup_atom_id_by_uri(&self, uri: &str) -> Result<Option<VaultId>, MultivaultError>;

    /// Looks up the vault id of the triple with the exact ordered `key`.
    async fn lookup_triple_id_by_atoms(
        &self,
        key: &TripleKey,
    ) -> Result<Option<VaultId>, MultivaultError>;

    /// Creates an atom for `uri`.
    ///
    /// # Returns
    ///
    /// The new vault id and the hash of the create transaction.
    async fn create_atom(&self, uri: &str) -> Result<TxRecord, MultivaultError>;

    /// Creates the triple `key`, optionally seeding its vault with
    /// `initial_deposit` on top of the creation cost.
    async fn create_triple(
        &self,
        key: &TripleKey,
        initial_deposit: Option<U256>,
    ) -> Result<TxRecord, MultivaultError>;

    /// Deposits `amount` into an atom vault on behalf of [`Self::account`].
    async fn deposit_atom(&self, vault_id: VaultId, amount: U256) -> Result<TxHash, MultivaultError>;

    /// Deposits `amount` into a triple vault on behalf of [`Self::account`].
    async fn deposit_triple(&self, vault_id: VaultId, amount: U256)
        -> Result<TxHash, MultivaultError>;

    /// Reads the contract's general configuration.
    async fn general_config(&self) -> Result<GeneralConfig, MultivaultError>;

    /// Reads the position of `account` in the vault `vault_id`.
    async fn vault_state_for_user(
        &self,
        vault_id: VaultId,
        account: Address,
    ) -> Result<VaultState, MultivaultError>;
}
