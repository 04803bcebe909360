//! A signing account taking part in a scenario.

use std::sync::Arc;

use alloy::primitives::{Address, TxHash, U256};
use indexer_graphql::{IndexerClient, IndexerError, WaitPolicy};
use ipfs::JsonPinner;
use multivault_client::{MultivaultClient, MultivaultError};
use multivault_shared::types::{SystemAtom, TripleKey, TripleRecord, TxRecord, VaultId};
use serde_json::Value;

use crate::errors::HarnessError;
use crate::reconcile;

/// One mnemonic account with its own vault client, sharing the indexer and
/// pinning clients of the [`Stack`](crate::config::Stack) it came from.
#[derive(Clone)]
pub struct Actor {
    index: u32,
    multivault: Arc<dyn MultivaultClient>,
    indexer: IndexerClient,
    pinner: Arc<dyn JsonPinner>,
    wait_policy: WaitPolicy,
}

impl Actor {
    pub fn new(
        index: u32,
        multivault: Arc<dyn MultivaultClient>,
        indexer: IndexerClient,
        pinner: Arc<dyn JsonPinner>,
        wait_policy: WaitPolicy,
    ) -> Self {
        Self {
            index,
            multivault,
            indexer,
            pinner,
            wait_policy,
        }
    }

    /// Mnemonic account index.
    pub fn index(&self) -> u32 {
        self.index
    }

    pub fn address(&self) -> Address {
        self.multivault.account()
    }

    /// URI of the atom standing for this account.
    pub fn account_uri(&self) -> String {
        self.address().to_string()
    }

    pub fn multivault(&self) -> &dyn MultivaultClient {
        self.multivault.as_ref()
    }

    pub fn indexer(&self) -> &IndexerClient {
        &self.indexer
    }

    pub async fn get_or_create_atom(&self, uri: &str) -> Result<TxRecord, MultivaultError> {
        reconcile::get_or_create_atom(self.multivault(), uri).await
    }

    pub async fn get_or_create_system_atom(
        &self,
        atom: SystemAtom,
    ) -> Result<TxRecord, MultivaultError> {
        self.get_or_create_atom(atom.as_str()).await
    }

    /// Atom for this account's address.
    pub async fn get_or_create_account_atom(&self) -> Result<TxRecord, MultivaultError> {
        self.get_or_create_atom(&self.account_uri()).await
    }

    pub async fn get_create_or_deposit_on_triple(
        &self,
        subject_id: VaultId,
        predicate_id: VaultId,
        object_id: VaultId,
        initial_deposit: Option<U256>,
    ) -> Result<TripleRecord, MultivaultError> {
        let key = TripleKey::new(subject_id, predicate_id, object_id);
        reconcile::get_create_or_deposit_on_triple(self.multivault(), &key, initial_deposit).await
    }

    /// Pins `document` and returns the atom for its `ipfs://` URI.
    pub async fn get_or_create_json_atom(&self, document: &Value) -> Result<TxRecord, HarnessError> {
        let uri = self.pinner.pin_json(document).await?;
        Ok(self.get_or_create_atom(&uri).await?)
    }

    /// Waits until the indexer has observed `hash`. `None` returns at once.
    pub async fn wait(&self, hash: Option<TxHash>) -> Result<(), IndexerError> {
        self.indexer.wait_for_indexed(hash, &self.wait_policy).await
    }
}

impl std::fmt::Debug for Actor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Actor")
            .field("index", &self.index)
            .field("address", &self.address())
            .finish()
    }
}
