//! Seed flows shared by the binaries and the scenarios.

use alloy::primitives::U256;
use indexer_graphql::types::PinThingInput;
use multivault_client::MultivaultError;
use multivault_shared::types::{SystemAtom, TripleRecord, TxRecord, VaultState};
use serde_json::{json, Value};
use tracing::info;

use crate::actor::Actor;
use crate::errors::HarnessError;

/// Creates every [`SystemAtom`], in [`SystemAtom::ALL`] order.
pub async fn create_predicates(
    admin: &Actor,
) -> Result<Vec<(SystemAtom, TxRecord)>, MultivaultError> {
    let mut atoms = Vec::with_capacity(SystemAtom::ALL.len());
    for atom in SystemAtom::ALL {
        let record = admin.get_or_create_system_atom(atom).await?;
        info!(atom = %atom, vault_id = %record.vault_id, created = record.is_created(), "System atom ready");
        atoms.push((atom, record));
    }
    Ok(atoms)
}

/// A triple and the position of its creator in it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriplePosition {
    pub triple: TripleRecord,
    pub position: VaultState,
}

/// Creates `(foo bar baz)` seeded with the contract's minimum deposit and
/// reads back the creator's position.
///
/// Running it again deposits the minimum once more.
pub async fn triple_positions(admin: &Actor) -> Result<TriplePosition, MultivaultError> {
    let foo = admin.get_or_create_atom("foo").await?;
    let bar = admin.get_or_create_atom("bar").await?;
    let baz = admin.get_or_create_atom("baz").await?;

    let config = admin.multivault().general_config().await?;
    let triple = admin
        .get_create_or_deposit_on_triple(
            foo.vault_id,
            bar.vault_id,
            baz.vault_id,
            Some(config.min_deposit),
        )
        .await?;

    let position = admin
        .multivault()
        .vault_state_for_user(triple.vault_id, admin.address())
        .await?;
    info!(
        vault_id = %triple.vault_id,
        shares = %position.shares,
        total_user_assets = %position.total_user_assets,
        "Triple position"
    );

    Ok(TriplePosition { triple, position })
}

/// Event document tagged by [`denver_events`].
pub fn gm_podcast_event() -> Value {
    json!({
        "name": "GM Podcast @ EthDenver",
        "description": "",
        "location": "Denver, Colorado",
        "organizers": ["Genzio"],
        "date": "Monday, February 24",
        "time": "10:00 AM - Mar 2, 7:00 PM MST",
        "speakers": ["Genzio team and special guests"],
        "category": "Crypto",
        "link": "# GM Podcast @ EthDenver",
        "hosted_by": "Genzio"
    })
}

/// Atoms and triple written by [`denver_events`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedEvent {
    pub keywords: TxRecord,
    pub tag: TxRecord,
    pub event: TxRecord,
    pub triple: TripleRecord,
}

/// Tags the GM Podcast event with the "Denver Events" thing through the
/// `keywords` predicate.
///
/// The tag is pinned through the indexer's `pinThing` mutation, the event
/// document through the pinning service.
pub async fn denver_events(actor: &Actor) -> Result<TaggedEvent, HarnessError> {
    let keywords = actor.get_or_create_system_atom(SystemAtom::Keywords).await?;

    let tag_uri = actor
        .indexer()
        .pin_thing(&PinThingInput {
            name: "Denver Events".to_string(),
            description: "Denver Events".to_string(),
            image: String::new(),
            url: String::new(),
        })
        .await?;
    let tag = actor.get_or_create_atom(&tag_uri).await?;

    let event = actor.get_or_create_json_atom(&gm_podcast_event()).await?;

    let triple = actor
        .get_create_or_deposit_on_triple(event.vault_id, keywords.vault_id, tag.vault_id, None)
        .await?;
    info!(vault_id = %triple.vault_id, created = triple.hash.is_some(), "Tagged event");

    Ok(TaggedEvent {
        keywords,
        tag,
        event,
        triple,
    })
}

/// Minimum deposit of the contract, as used for seeded positions.
pub async fn min_deposit(actor: &Actor) -> Result<U256, MultivaultError> {
    Ok(actor.multivault().general_config().await?.min_deposit)
}
