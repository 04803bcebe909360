//! Following an account, end to end.

mod common;

use integration_tests::accounts::{ADMIN_INDEX, ALICE_INDEX, BOB_INDEX};
use multivault_shared::types::SystemAtom;
use serial_test::serial;

#[tokio::test]
#[ignore = "requires a running chain, indexer and pinning service"]
#[serial]
async fn test_follow_account() {
    let stack = common::live_stack();
    let admin = stack.actor(ADMIN_INDEX).await.unwrap();
    let alice = stack.actor(ALICE_INDEX).await.unwrap();
    let bob = stack.actor(BOB_INDEX).await.unwrap();

    let person = admin.get_or_create_system_atom(SystemAtom::Person).await.unwrap();
    let person_again = admin.get_or_create_system_atom(SystemAtom::Person).await.unwrap();
    assert_eq!(person_again.vault_id, person.vault_id);
    assert_eq!(person_again.hash, None);

    let follow = admin.get_or_create_system_atom(SystemAtom::FollowAction).await.unwrap();
    let bob_atom = bob.get_or_create_account_atom().await.unwrap();

    let triple = alice
        .get_create_or_deposit_on_triple(person.vault_id, follow.vault_id, bob_atom.vault_id, None)
        .await
        .unwrap();

    alice.wait(triple.hash).await.unwrap();
    let following = alice.indexer().following(alice.address()).await.unwrap();

    assert_eq!(following.len(), 1);
    assert_eq!(following[0].atom_id, Some(bob_atom.vault_id));
}
