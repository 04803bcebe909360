//! Idempotent get-or-create over the vault contract.
//!
//! Both reconcilers look the content key up first and only write when
//! nothing exists. There is no lock between the lookup and the write: when a
//! concurrent writer wins, the create reverts with a duplicate-key error and
//! the lookup is repeated once.

use alloy::primitives::U256;
use multivault_client::{MultivaultClient, MultivaultError};
use multivault_shared::types::{TripleKey, TripleRecord, TxRecord, VaultId};
use tracing::{debug, info, warn};

/// Returns the atom for `uri`, creating it when it does not exist.
///
/// `hash` is `None` when the atom already existed.
pub async fn get_or_create_atom(
    client: &dyn MultivaultClient,
    uri: &str,
) -> Result<TxRecord, MultivaultError> {
    if uri.is_empty() {
        return Err(MultivaultError::invalid_uri("atom URI must not be empty"));
    }

    if let Some(vault_id) = client.lookup_atom_id_by_uri(uri).await? {
        debug!(uri = %uri, vault_id = %vault_id, "Atom exists");
        return Ok(TxRecord::existing(vault_id));
    }

    info!(uri = %uri, account = %client.account(), "Creating atom");
    match client.create_atom(uri).await {
        Ok(record) => {
            info!(uri = %uri, vault_id = %record.vault_id, tx_hash = ?record.hash, "Created atom");
            Ok(record)
        }
        Err(err) if err.is_already_exists() => {
            warn!(uri = %uri, "Atom created concurrently, looking it up again");
            client
                .lookup_atom_id_by_uri(uri)
                .await?
                .map(TxRecord::existing)
                .ok_or(err)
        }
        Err(err) => Err(err),
    }
}

/// Returns the triple `key`, creating it when it does not exist.
///
/// When the triple exists and a non-zero `initial_deposit` is given, the
/// amount is deposited into its vault instead and the deposit hash is
/// returned in `deposit_hash`. A zero deposit counts as no deposit.
pub async fn get_create_or_deposit_on_triple(
    client: &dyn MultivaultClient,
    key: &TripleKey,
    initial_deposit: Option<U256>,
) -> Result<TripleRecord, MultivaultError> {
    let deposit = initial_deposit.filter(|amount| !amount.is_zero());

    if let Some(vault_id) = client.lookup_triple_id_by_atoms(key).await? {
        return deposit_on_existing(client, vault_id, deposit).await;
    }

    info!(triple = %key, deposit = ?deposit, account = %client.account(), "Creating triple");
    match client.create_triple(key, deposit).await {
        Ok(record) => {
            info!(triple = %key, vault_id = %record.vault_id, tx_hash = ?record.hash, "Created triple");
            Ok(TripleRecord {
                vault_id: record.vault_id,
                hash: record.hash,
                deposit_hash: None,
            })
        }
        Err(err) if err.is_already_exists() => {
            warn!(triple = %key, "Triple created concurrently, looking it up again");
            match client.lookup_triple_id_by_atoms(key).await? {
                Some(vault_id) => deposit_on_existing(client, vault_id, deposit).await,
                None => Err(err),
            }
        }
        Err(err) => Err(err),
    }
}

async fn deposit_on_existing(
    client: &dyn MultivaultClient,
    vault_id: VaultId,
    deposit: Option<U256>,
) -> Result<TripleRecord, MultivaultError> {
    let Some(amount) = deposit else {
        debug!(vault_id = %vault_id, "Triple exists");
        return Ok(TripleRecord::existing(vault_id));
    };

    let deposit_hash = client.deposit_triple(vault_id, amount).await?;
    info!(vault_id = %vault_id, amount = %amount, tx_hash = %deposit_hash, "Deposited on existing triple");
    Ok(TripleRecord::deposited(vault_id, deposit_hash))
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::{address, Address};
    use multivault_client::{MockCall, MockLedger, MockMultivault};

    const ALICE: Address = address!("70997970C51812dc3A010C7d01b50e0d17dc79C8");

    async fn three_atoms(client: &MockMultivault) -> (VaultId, VaultId, VaultId) {
        let s = get_or_create_atom(client, "foo").await.unwrap().vault_id;
        let p = get_or_create_atom(client, "bar").await.unwrap().vault_id;
        let o = get_or_create_atom(client, "baz").await.unwrap().vault_id;
        (s, p, o)
    }

    #[tokio::test]
    async fn test_atom_is_created_once() {
        let client = MockMultivault::new(ALICE);

        let first = get_or_create_atom(&client, "https://schema.org/Person").await.unwrap();
        let second = get_or_create_atom(&client, "https://schema.org/Person").await.unwrap();

        assert!(first.hash.is_some());
        assert_eq!(second.vault_id, first.vault_id);
        assert_eq!(second.hash, None);
        assert_eq!(client.ledger().atom_count(), 1);
        assert_eq!(client.ledger().write_count(), 1);
    }

    #[tokio::test]
    async fn test_empty_uri_is_rejected_before_any_call() {
        let client = MockMultivault::new(ALICE);

        let err = get_or_create_atom(&client, "").await.unwrap_err();

        assert!(matches!(err, MultivaultError::InvalidUri(_)));
        assert!(client.ledger().calls().is_empty());
    }

    #[tokio::test]
    async fn test_atom_race_recovers_with_one_lookup() {
        let ledger = MockLedger::new();
        let client = ledger.client(ALICE);
        let id = ledger.seed_atom("foo");
        ledger.hide_next_lookups(1);

        let record = get_or_create_atom(&client, "foo").await.unwrap();

        assert_eq!(record, TxRecord::existing(id));
        assert_eq!(
            ledger.calls(),
            vec![
                MockCall::LookupAtom("foo".to_string()),
                MockCall::CreateAtom("foo".to_string()),
                MockCall::LookupAtom("foo".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn test_atom_race_gives_up_after_one_retry() {
        let ledger = MockLedger::new();
        let client = ledger.client(ALICE);
        ledger.seed_atom("foo");
        ledger.hide_next_lookups(2);

        let err = get_or_create_atom(&client, "foo").await.unwrap_err();

        assert!(err.is_already_exists());
        assert_eq!(ledger.calls().len(), 3);
    }

    #[tokio::test]
    async fn test_write_failures_propagate() {
        let client = MockMultivault::new(ALICE);
        client.ledger().reject_writes(true);

        let err = get_or_create_atom(&client, "foo").await.unwrap_err();

        assert!(matches!(err, MultivaultError::Rejected(_)));
        // No retry on anything but a duplicate key.
        assert_eq!(client.ledger().calls().len(), 2);
    }

    #[tokio::test]
    async fn test_triple_without_deposit_is_created_once() {
        let client = MockMultivault::new(ALICE);
        let (s, p, o) = three_atoms(&client).await;
        let key = TripleKey::new(s, p, o);

        let first = get_create_or_deposit_on_triple(&client, &key, None).await.unwrap();
        let second = get_create_or_deposit_on_triple(&client, &key, None).await.unwrap();

        assert!(first.hash.is_some());
        assert_eq!(first.deposit_hash, None);
        assert_eq!(second, TripleRecord::existing(first.vault_id));
        assert_eq!(client.ledger().triple_count(), 1);
    }

    #[tokio::test]
    async fn test_existing_triple_receives_the_deposit() {
        let client = MockMultivault::new(ALICE);
        let (s, p, o) = three_atoms(&client).await;
        let key = TripleKey::new(s, p, o);
        let amount = U256::from(1_000);

        let created = get_create_or_deposit_on_triple(&client, &key, Some(amount)).await.unwrap();
        let deposited = get_create_or_deposit_on_triple(&client, &key, Some(amount)).await.unwrap();

        assert_eq!(deposited.vault_id, created.vault_id);
        assert_eq!(deposited.hash, None);
        assert!(deposited.deposit_hash.is_some());
        assert_eq!(deposited.last_write(), deposited.deposit_hash);

        let calls = client.ledger().calls();
        assert!(calls.contains(&MockCall::CreateTriple(key, Some(amount))));
        assert_eq!(calls.last(), Some(&MockCall::DepositTriple(created.vault_id, amount)));

        let state = client.vault_state_for_user(created.vault_id, ALICE).await.unwrap();
        assert_eq!(state.shares, U256::from(2_000));
    }

    #[tokio::test]
    async fn test_zero_deposit_counts_as_none() {
        let client = MockMultivault::new(ALICE);
        let (s, p, o) = three_atoms(&client).await;
        let key = TripleKey::new(s, p, o);

        let created = get_create_or_deposit_on_triple(&client, &key, Some(U256::ZERO)).await.unwrap();
        let again = get_create_or_deposit_on_triple(&client, &key, Some(U256::ZERO)).await.unwrap();

        assert!(client.ledger().calls().contains(&MockCall::CreateTriple(key, None)));
        assert_eq!(again, TripleRecord::existing(created.vault_id));
        assert_eq!(client.ledger().write_count(), 4);
    }

    #[tokio::test]
    async fn test_triple_order_matters() {
        let client = MockMultivault::new(ALICE);
        let (s, p, o) = three_atoms(&client).await;
        let key = TripleKey::new(s, p, o);

        let forward = get_create_or_deposit_on_triple(&client, &key, None).await.unwrap();
        let backward = get_create_or_deposit_on_triple(&client, &key.reversed(), None)
            .await
            .unwrap();

        assert!(backward.hash.is_some());
        assert_ne!(backward.vault_id, forward.vault_id);
        assert_eq!(client.ledger().triple_count(), 2);
    }

    #[tokio::test]
    async fn test_triple_race_deposits_into_the_winner() {
        let ledger = MockLedger::new();
        let client = ledger.client(ALICE);
        let (s, p, o) = three_atoms(&client).await;
        let key = TripleKey::new(s, p, o);
        let created = get_create_or_deposit_on_triple(&client, &key, None).await.unwrap();
        ledger.hide_next_lookups(1);

        let record = get_create_or_deposit_on_triple(&client, &key, Some(U256::from(7)))
            .await
            .unwrap();

        assert_eq!(record.vault_id, created.vault_id);
        assert_eq!(record.hash, None);
        assert!(record.deposit_hash.is_some());
    }

    #[tokio::test]
    async fn test_triple_on_missing_atoms_fails() {
        let client = MockMultivault::new(ALICE);
        let key = TripleKey::new(U256::from(1), U256::from(2), U256::from(3));

        let err = get_create_or_deposit_on_triple(&client, &key, None).await.unwrap_err();

        assert!(matches!(err, MultivaultError::Rejected(_)));
    }
}
