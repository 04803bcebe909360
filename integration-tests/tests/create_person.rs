mod common;

use indexer_graphql::types::PinPersonInput;
use integration_tests::accounts::ALICE_INDEX;
use multivault_shared::types::SystemAtom;
use serial_test::serial;

#[tokio::test]
#[ignore = "requires a running chain, indexer and pinning service"]
#[serial]
async fn test_create_person_triple() {
    let stack = common::live_stack();
    let alice = stack.actor(ALICE_INDEX).await.unwrap();

    let person_predicate = alice.get_or_create_system_atom(SystemAtom::Person).await.unwrap();
    let alice_atom = alice.get_or_create_account_atom().await.unwrap();

    let uri = alice
        .indexer()
        .pin_person(&PinPersonInput {
            identifier: alice.account_uri(),
            name: "Alice".to_string(),
            description: "Intern at Intuition Systems".to_string(),
            email: "alice@intuition.systems".to_string(),
            image: "https://avatars.githubusercontent.com/u/94311139?s=200&v=4".to_string(),
            url: "https://intuition.systems".to_string(),
        })
        .await
        .unwrap();
    assert!(uri.starts_with("ipfs://"));

    let alice_person = alice.get_or_create_atom(&uri).await.unwrap();
    let triple = alice
        .get_create_or_deposit_on_triple(
            alice_atom.vault_id,
            person_predicate.vault_id,
            alice_person.vault_id,
            None,
        )
        .await
        .unwrap();

    assert!(!triple.vault_id.is_zero());
}
