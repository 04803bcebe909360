use alloy::{
    network::{Ethereum, EthereumWallet},
    primitives::{keccak256, Address, Bytes, TxHash, U256},
    providers::{DynProvider, PendingTransactionBuilder, Provider, ProviderBuilder},
    rpc::types::TransactionReceipt,
    signers::local::PrivateKeySigner,
};
use async_trait::async_trait;
use multivault_shared::types::{GeneralConfig, TripleKey, TxRecord, VaultId, VaultState};
use tracing::{debug, info};
use url::Url;

use super::bindings::EthMultiVault::{self, EthMultiVaultInstance};
use crate::{MultivaultClient, MultivaultError};

/// Vault client backed by a deployed `EthMultiVault` contract.
///
/// The instance is bound to one signing account. Build one per actor with
/// [`EvmMultivault::connect`], or hand in an already configured provider with
/// [`EvmMultivault::new`].
pub struct EvmMultivault {
    contract: EthMultiVaultInstance<DynProvider>,
    account: Address,
}

impl EvmMultivault {
    /// Wraps an existing provider. `account` must be the address of the
    /// wallet attached to `provider`.
    pub fn new(contract_address: Address, provider: DynProvider, account: Address) -> Self {
        Self {
            contract: EthMultiVault::new(contract_address, provider),
            account,
        }
    }

    /// Builds a wallet provider for `signer` over HTTP and binds it to the
    /// contract at `contract_address`.
    pub fn connect(rpc_url: Url, contract_address: Address, signer: PrivateKeySigner) -> Self {
        let account = signer.address();
        let provider = ProviderBuilder::new()
            .wallet(EthereumWallet::from(signer))
            .connect_http(rpc_url)
            .erased();
        Self::new(contract_address, provider, account)
    }

    /// Address of the vault contract.
    pub fn contract_address(&self) -> Address {
        *self.contract.address()
    }

    /// Waits for `pending` to be mined and fails if it reverted.
    async fn confirm(
        pending: PendingTransactionBuilder<Ethereum>,
    ) -> Result<TransactionReceipt, MultivaultError> {
        let receipt = pending.get_receipt().await?;
        if !receipt.status() {
            return Err(MultivaultError::Reverted(receipt.transaction_hash));
        }
        Ok(receipt)
    }
}

/// Maps a failed create call to `AlreadyExists` when the contract reverted
/// with its duplicate-key error.
fn classify_create_error(err: alloy::contract::Error, key: String) -> MultivaultError {
    let exists = err
        .as_decoded_error::<EthMultiVault::MultiVault_AtomExists>()
        .is_some()
        || err
            .as_decoded_error::<EthMultiVault::MultiVault_TripleExists>()
            .is_some();
    if exists {
        MultivaultError::already_exists(key)
    } else {
        MultivaultError::Contract(err)
    }
}

fn non_zero(id: U256) -> Option<VaultId> {
    (!id.is_zero()).then_some(id)
}

#[async_trait]
impl MultivaultClient for EvmMultivault {
    fn account(&self) -> Address {
        self.account
    }

    async fn lookup_atom_id_by_uri(&self, uri: &str) -> Result<Option<VaultId>, MultivaultError> {
        let atom_hash = keccak256(uri.as_bytes());
        let id = self.contract.atomsByHash(atom_hash).call().await?;
        debug!(uri = %uri, vault_id = %id, "Looked up atom");
        Ok(non_zero(id))
    }

    async fn lookup_triple_id_by_atoms(
        &self,
        key: &TripleKey,
    ) -> Result<Option<VaultId>, MultivaultError> {
        let triple_hash = self
            .contract
            .tripleHashFromAtoms(key.subject_id, key.predicate_id, key.object_id)
            .call()
            .await?;
        let id = self.contract.triplesByHash(triple_hash).call().await?;
        debug!(triple = %key, vault_id = %id, "Looked up triple");
        Ok(non_zero(id))
    }

    async fn create_atom(&self, uri: &str) -> Result<TxRecord, MultivaultError> {
        if uri.is_empty() {
            return Err(MultivaultError::invalid_uri("atom URI must not be empty"));
        }

        let cost = self.contract.getAtomCost().call().await?;
        let pending = self
            .contract
            .createAtom(Bytes::copy_from_slice(uri.as_bytes()))
            .value(cost)
            .send()
            .await
            .map_err(|e| classify_create_error(e, uri.to_string()))?;
        let receipt = Self::confirm(pending).await?;
        let hash = receipt.transaction_hash;

        let vault_id = receipt
            .inner
            .logs()
            .iter()
            .find_map(|log| log.log_decode::<EthMultiVault::AtomCreated>().ok())
            .map(|log| log.inner.data.vaultID)
            .ok_or(MultivaultError::MissingEvent {
                event: "AtomCreated",
                hash,
            })?;

        info!(uri = %uri, vault_id = %vault_id, tx_hash = %hash, "Created atom");
        Ok(TxRecord::created(vault_id, hash))
    }

    async fn create_triple(
        &self,
        key: &TripleKey,
        initial_deposit: Option<U256>,
    ) -> Result<TxRecord, MultivaultError> {
        let cost = self.contract.getTripleCost().call().await?;
        let value = cost + initial_deposit.unwrap_or_default();
        let pending = self
            .contract
            .createTriple(key.subject_id, key.predicate_id, key.object_id)
            .value(value)
            .send()
            .await
            .map_err(|e| classify_create_error(e, key.to_string()))?;
        let receipt = Self::confirm(pending).await?;
        let hash = receipt.transaction_hash;

        let vault_id = receipt
            .inner
            .logs()
            .iter()
            .find_map(|log| log.log_decode::<EthMultiVault::TripleCreated>().ok())
            .map(|log| log.inner.data.vaultID)
            .ok_or(MultivaultError::MissingEvent {
                event: "TripleCreated",
                hash,
            })?;

        info!(triple = %key, vault_id = %vault_id, tx_hash = %hash, "Created triple");
        Ok(TxRecord::created(vault_id, hash))
    }

    async fn deposit_atom(&self, vault_id: VaultId, amount: U256) -> Result<TxHash, MultivaultError> {
        let pending = self
            .contract
            .depositAtom(self.account, vault_id)
            .value(amount)
            .send()
            .await?;
        let receipt = Self::confirm(pending).await?;
        info!(vault_id = %vault_id, amount = %amount, tx_hash = %receipt.transaction_hash, "Deposited on atom");
        Ok(receipt.transaction_hash)
    }

    async fn deposit_triple(
        &self,
        vault_id: VaultId,
        amount: U256,
    ) -> Result<TxHash, MultivaultError> {
        let pending = self
            .contract
            .depositTriple(self.account, vault_id)
            .value(amount)
            .send()
            .await?;
        let receipt = Self::confirm(pending).await?;
        info!(vault_id = %vault_id, amount = %amount, tx_hash = %receipt.transaction_hash, "Deposited on triple");
        Ok(receipt.transaction_hash)
    }

    async fn general_config(&self) -> Result<GeneralConfig, MultivaultError> {
        let config = self.contract.generalConfig().call().await?;
        Ok(GeneralConfig {
            admin: config.admin,
            protocol_multisig: config.protocolMultisig,
            fee_denominator: config.feeDenominator,
            min_deposit: config.minDeposit,
            min_share: config.minShare,
            atom_uri_max_length: config.atomUriMaxLength,
            decimal_precision: config.decimalPrecision,
            min_delay: config.minDelay,
        })
    }

    async fn vault_state_for_user(
        &self,
        vault_id: VaultId,
        account: Address,
    ) -> Result<VaultState, MultivaultError> {
        let state = self
            .contract
            .getVaultStateForUser(vault_id, account)
            .call()
            .await?;
        Ok(VaultState {
            shares: state.shares,
            total_user_assets: state.totalUserAssets,
        })
    }
}
