//! In-memory vault ledger for tests and local development.
//!
//! A [`MockLedger`] plays the role of the deployed contract: it stores atoms,
//! triples and positions, assigns sequential vault ids and derives a
//! deterministic transaction hash for every write. Each actor talks to the
//! ledger through its own [`MockMultivault`], bound to one account, exactly
//! like an [`EvmMultivault`](crate::EvmMultivault) is bound to one signer.
//!
//! # Example
//!
//! ```ignore
//! use multivault_client::{MockLedger, MultivaultClient};
//!
//! let ledger = MockLedger::new();
//! let alice = ledger.client(alice_address);
//! let record = alice.create_atom("https://schema.org/Person").await?;
//! assert!(ledger.calls().len() == 1);
//! ```

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use alloy::primitives::{keccak256, Address, TxHash, U256};
use async_trait::async_trait;
use multivault_shared::types::{GeneralConfig, TripleKey, TxRecord, VaultId, VaultState};

use crate::{MultivaultClient, MultivaultError};

/// Minimum deposit reported by the mock's general config (0.00042 ETH).
pub const MOCK_MIN_DEPOSIT: u64 = 420_000_000_000_000;

/// A call received by the mock ledger, in arrival order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockCall {
    LookupAtom(String),
    LookupTriple(TripleKey),
    CreateAtom(String),
    CreateTriple(TripleKey, Option<U256>),
    DepositAtom(VaultId, U256),
    DepositTriple(VaultId, U256),
    GeneralConfig,
    VaultState(VaultId, Address),
}

impl MockCall {
    /// Whether the call writes to the ledger.
    pub fn is_write(&self) -> bool {
        matches!(
            self,
            MockCall::CreateAtom(_)
                | MockCall::CreateTriple(..)
                | MockCall::DepositAtom(..)
                | MockCall::DepositTriple(..)
        )
    }
}

#[derive(Default)]
struct LedgerState {
    next_vault_id: u64,
    tx_count: u64,
    atoms: HashMap<String, VaultId>,
    triples: HashMap<TripleKey, VaultId>,
    positions: HashMap<(VaultId, Address), U256>,
    calls: Vec<(Address, MockCall)>,
    reject_writes: bool,
    hidden_lookups: usize,
}

impl LedgerState {
    fn next_vault_id(&mut self) -> VaultId {
        self.next_vault_id += 1;
        U256::from(self.next_vault_id)
    }

    fn next_tx_hash(&mut self) -> TxHash {
        self.tx_count += 1;
        keccak256(format!("mock-tx-{}", self.tx_count))
    }

    fn credit(&mut self, vault_id: VaultId, account: Address, amount: U256) {
        *self.positions.entry((vault_id, account)).or_default() += amount;
    }

    /// Consumes one hidden lookup, if any are pending.
    fn hide_lookup(&mut self) -> bool {
        if self.hidden_lookups > 0 {
            self.hidden_lookups -= 1;
            true
        } else {
            false
        }
    }
}

/// Shared in-memory state standing in for the vault contract.
///
/// Cloning the ledger clones the handle, not the state.
#[derive(Clone, Default)]
pub struct MockLedger {
    state: Arc<Mutex<LedgerState>>,
}

impl MockLedger {
    /// Create a new empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a client bound to `account`.
    pub fn client(&self, account: Address) -> MockMultivault {
        MockMultivault {
            ledger: self.clone(),
            account,
        }
    }

    /// Every call received so far, across all accounts.
    pub fn calls(&self) -> Vec<MockCall> {
        self.state
            .lock()
            .unwrap()
            .calls
            .iter()
            .map(|(_, call)| call.clone())
            .collect()
    }

    /// Calls received from a single account.
    pub fn calls_from(&self, account: Address) -> Vec<MockCall> {
        self.state
            .lock()
            .unwrap()
            .calls
            .iter()
            .filter(|(from, _)| *from == account)
            .map(|(_, call)| call.clone())
            .collect()
    }

    /// Number of writes received so far.
    pub fn write_count(&self) -> usize {
        self.calls().iter().filter(|call| call.is_write()).count()
    }

    /// Number of atoms stored.
    pub fn atom_count(&self) -> usize {
        self.state.lock().unwrap().atoms.len()
    }

    /// Number of triples stored.
    pub fn triple_count(&self) -> usize {
        self.state.lock().unwrap().triples.len()
    }

    /// Make every following write fail with [`MultivaultError::Rejected`].
    pub fn reject_writes(&self, reject: bool) {
        self.state.lock().unwrap().reject_writes = reject;
    }

    /// Make the next `count` lookups report nothing, whatever is stored.
    ///
    /// Simulates a concurrent writer creating the entity between a lookup and
    /// the following create.
    pub fn hide_next_lookups(&self, count: usize) {
        self.state.lock().unwrap().hidden_lookups = count;
    }

    /// Store an atom directly, as if another actor had created it earlier.
    pub fn seed_atom(&self, uri: &str) -> VaultId {
        let mut state = self.state.lock().unwrap();
        if let Some(id) = state.atoms.get(uri) {
            return *id;
        }
        let id = state.next_vault_id();
        state.atoms.insert(uri.to_string(), id);
        id
    }
}

/// Vault client bound to one account of a [`MockLedger`].
#[derive(Clone)]
pub struct MockMultivault {
    ledger: MockLedger,
    account: Address,
}

impl MockMultivault {
    /// Create a client on a fresh, private ledger.
    pub fn new(account: Address) -> Self {
        MockLedger::new().client(account)
    }

    /// The ledger this client writes to.
    pub fn ledger(&self) -> &MockLedger {
        &self.ledger
    }

    fn record(&self, state: &mut LedgerState, call: MockCall) -> Result<(), MultivaultError> {
        let is_write = call.is_write();
        state.calls.push((self.account, call));
        if is_write && state.reject_writes {
            return Err(MultivaultError::rejected("mock ledger is rejecting writes"));
        }
        Ok(())
    }
}

#[async_trait]
impl MultivaultClient for MockMultivault {
    fn account(&self) -> Address {
        self.account
    }

    async fn lookup_atom_id_by_uri(&self, uri: &str) -> Result<Option<VaultId>, MultivaultError> {
        let mut state = self.ledger.state.lock().unwrap();
        self.record(&mut state, MockCall::LookupAtom(uri.to_string()))?;
        if state.hide_lookup() {
            return Ok(None);
        }
        Ok(state.atoms.get(uri).copied())
    }

    async fn lookup_triple_id_by_atoms(
        &self,
        key: &TripleKey,
    ) -> Result<Option<VaultId>, MultivaultError> {
        let mut state = self.ledger.state.lock().unwrap();
        self.record(&mut state, MockCall::LookupTriple(*key))?;
        if state.hide_lookup() {
            return Ok(None);
        }
        Ok(state.triples.get(key).copied())
    }

    async fn create_atom(&self, uri: &str) -> Result<TxRecord, MultivaultError> {
        let mut state = self.ledger.state.lock().unwrap();
        self.record(&mut state, MockCall::CreateAtom(uri.to_string()))?;
        if uri.is_empty() {
            return Err(MultivaultError::invalid_uri("atom URI must not be empty"));
        }
        if state.atoms.contains_key(uri) {
            return Err(MultivaultError::already_exists(uri));
        }

        let vault_id = state.next_vault_id();
        let hash = state.next_tx_hash();
        state.atoms.insert(uri.to_string(), vault_id);
        Ok(TxRecord::created(vault_id, hash))
    }

    async fn create_triple(
        &self,
        key: &TripleKey,
        initial_deposit: Option<U256>,
    ) -> Result<TxRecord, MultivaultError> {
        let mut state = self.ledger.state.lock().unwrap();
        self.record(&mut state, MockCall::CreateTriple(*key, initial_deposit))?;
        if state.triples.contains_key(key) {
            return Err(MultivaultError::already_exists(key.to_string()));
        }
        let known = state.atoms.values().copied().collect::<Vec<_>>();
        for atom_id in [key.subject_id, key.predicate_id, key.object_id] {
            if !known.contains(&atom_id) {
                return Err(MultivaultError::rejected(format!(
                    "atom {atom_id} does not exist"
                )));
            }
        }

        let vault_id = state.next_vault_id();
        let hash = state.next_tx_hash();
        state.triples.insert(*key, vault_id);
        if let Some(amount) = initial_deposit {
            state.credit(vault_id, self.account, amount);
        }
        Ok(TxRecord::created(vault_id, hash))
    }

    async fn deposit_atom(&self, vault_id: VaultId, amount: U256) -> Result<TxHash, MultivaultError> {
        let mut state = self.ledger.state.lock().unwrap();
        self.record(&mut state, MockCall::DepositAtom(vault_id, amount))?;
        if !state.atoms.values().any(|id| *id == vault_id) {
            return Err(MultivaultError::rejected(format!("atom vault {vault_id} does not exist")));
        }
        state.credit(vault_id, self.account, amount);
        Ok(state.next_tx_hash())
    }

    async fn deposit_triple(
        &self,
        vault_id: VaultId,
        amount: U256,
    ) -> Result<TxHash, MultivaultError> {
        let mut state = self.ledger.state.lock().unwrap();
        self.record(&mut state, MockCall::DepositTriple(vault_id, amount))?;
        if !state.triples.values().any(|id| *id == vault_id) {
            return Err(MultivaultError::rejected(format!(
                "triple vault {vault_id} does not exist"
            )));
        }
        state.credit(vault_id, self.account, amount);
        Ok(state.next_tx_hash())
    }

    async fn general_config(&self) -> Result<GeneralConfig, MultivaultError> {
        let mut state = self.ledger.state.lock().unwrap();
        self.record(&mut state, MockCall::GeneralConfig)?;
        Ok(GeneralConfig {
            admin: Address::ZERO,
            protocol_multisig: Address::ZERO,
            fee_denominator: U256::from(10_000),
            min_deposit: U256::from(MOCK_MIN_DEPOSIT),
            min_share: U256::from(1_000_000),
            atom_uri_max_length: U256::from(250),
            decimal_precision: U256::from(10u64.pow(18)),
            min_delay: U256::ZERO,
        })
    }

    async fn vault_state_for_user(
        &self,
        vault_id: VaultId,
        account: Address,
    ) -> Result<VaultState, MultivaultError> {
        let mut state = self.ledger.state.lock().unwrap();
        self.record(&mut state, MockCall::VaultState(vault_id, account))?;
        let assets = state
            .positions
            .get(&(vault_id, account))
            .copied()
            .unwrap_or_default();
        // One share per wei; the mock has no bonding curve.
        Ok(VaultState {
            shares: assets,
            total_user_assets: assets,
        })
    }
}
