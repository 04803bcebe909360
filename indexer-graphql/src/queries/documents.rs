//! Operation documents, keyed by their operation name.

pub const GET_TRANSACTION_EVENTS: &str = "GetTransactionEvents";
pub const GET_TRANSACTION_EVENTS_QUERY: &str = r#"
query GetTransactionEvents($hash: String!) {
  events(where: { transaction_hash: { _eq: $hash } }) {
    transaction_hash
  }
}
"#;

pub const FOLLOWING: &str = "Following";
pub const FOLLOWING_QUERY: &str = r#"
query Following($address: String!) {
  following(args: { address: $address }) {
    id
    atom_id
  }
}
"#;

pub const ATOM_WITH_CLAIMS: &str = "AtomWithClaims";
pub const ATOM_WITH_CLAIMS_QUERY: &str = r#"
query AtomWithClaims($atomId: numeric!, $address: String) {
  atom(id: $atomId) {
    id
    label
    value {
      thing {
        name
        description
        url
        image
      }
    }
  }
  claims(
    where: { account_id: { _eq: $address }, subject_id: { _eq: $atomId } }
    order_by: [{ shares: desc }]
  ) {
    predicate {
      id
      type
      label
    }
    object {
      value {
        thing {
          name
          description
          url
          image
        }
      }
    }
  }
  claims_from_following(
    args: { address: $address }
    where: { subject_id: { _eq: $atomId } }
  ) {
    predicate {
      id
      type
      label
    }
    object {
      value {
        thing {
          name
          description
          url
          image
        }
      }
    }
  }
}
"#;

pub const VAULT_POSITIONS: &str = "VaultPositions";
pub const VAULT_POSITIONS_QUERY: &str = r#"
query VaultPositions($vaultId: String!) {
  vaultPositions(vaultId: $vaultId) {
    vaultId
    shares
  }
}
"#;

pub const PIN_THING: &str = "PinThing";
pub const PIN_THING_MUTATION: &str = r#"
mutation PinThing($thing: PinThingInput!) {
  pinThing(thing: $thing) {
    uri
  }
}
"#;

pub const PIN_PERSON: &str = "PinPerson";
pub const PIN_PERSON_MUTATION: &str = r#"
mutation PinPerson($person: PinPersonInput!) {
  pinPerson(person: $person) {
    uri
  }
}
"#;
