use alloy::primitives::U256;
use multivault_shared::types::VaultId;
use serde::Deserialize;

use super::numeric;

/// A chain event recorded by the indexer for a transaction.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TransactionEvent {
    pub transaction_hash: String,
}

/// An account followed by the queried address.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FollowingAccount {
    pub id: String,
    #[serde(default, deserialize_with = "numeric::option_u256")]
    pub atom_id: Option<VaultId>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ThingValue {
    pub name: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
    pub image: Option<String>,
}

/// Resolved content of an atom. Only the `thing` shape is queried.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AtomValue {
    pub thing: Option<ThingValue>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AtomSummary {
    #[serde(deserialize_with = "numeric::u256")]
    pub id: VaultId,
    pub label: Option<String>,
    pub value: Option<AtomValue>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ClaimPredicate {
    #[serde(deserialize_with = "numeric::u256")]
    pub id: VaultId,
    #[serde(rename = "type")]
    pub atom_type: Option<String>,
    pub label: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ClaimObject {
    pub value: Option<AtomValue>,
}

/// A triple asserted about an atom, seen from one account.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Claim {
    pub predicate: ClaimPredicate,
    pub object: ClaimObject,
}

impl Claim {
    /// Name of the thing the claim points at, if the object is a thing.
    pub fn object_thing_name(&self) -> Option<&str> {
        self.object
            .value
            .as_ref()
            .and_then(|value| value.thing.as_ref())
            .and_then(|thing| thing.name.as_deref())
    }
}

/// Result of the `AtomWithClaims` query.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AtomWithClaims {
    pub atom: Option<AtomSummary>,
    pub claims: Vec<Claim>,
    #[serde(default)]
    pub claims_from_following: Vec<Claim>,
}

/// A position in a vault as reported by the `vaultPositions` resolver.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VaultPosition {
    #[serde(deserialize_with = "numeric::u256")]
    pub vault_id: VaultId,
    #[serde(deserialize_with = "numeric::u256")]
    pub shares: U256,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_atom_with_claims() {
        let data = json!({
            "atom": {
                "id": "12",
                "label": "Foo",
                "value": { "thing": { "name": "Foo", "description": "Lorem ipsum", "url": null, "image": null } }
            },
            "claims": [{
                "predicate": { "id": 5, "type": "Thing", "label": "is thing" },
                "object": { "value": { "thing": { "name": "Example Domain", "description": null, "url": null, "image": null } } }
            }],
            "claims_from_following": []
        });

        let result: AtomWithClaims = serde_json::from_value(data).unwrap();
        let atom = result.atom.unwrap();
        assert_eq!(atom.id, U256::from(12));
        assert_eq!(atom.label.as_deref(), Some("Foo"));
        assert_eq!(result.claims[0].predicate.label.as_deref(), Some("is thing"));
        assert_eq!(result.claims[0].object_thing_name(), Some("Example Domain"));
    }

    #[test]
    fn test_claim_without_thing_has_no_name() {
        let claim: Claim = serde_json::from_value(json!({
            "predicate": { "id": "1", "type": null, "label": null },
            "object": { "value": null }
        }))
        .unwrap();
        assert_eq!(claim.object_thing_name(), None);
    }
}
