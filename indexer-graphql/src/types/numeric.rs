//! Deserializers for `numeric` columns.
//!
//! Depending on its settings the indexer renders `numeric` values as JSON
//! numbers or as strings; both are accepted.

use std::str::FromStr;

use alloy::primitives::U256;
use serde::{de, Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum NumericRepr {
    Number(u64),
    Text(String),
}

impl NumericRepr {
    fn into_u256<E: de::Error>(self) -> Result<U256, E> {
        match self {
            NumericRepr::Number(n) => Ok(U256::from(n)),
            NumericRepr::Text(s) => U256::from_str(s.trim()).map_err(E::custom),
        }
    }
}

pub fn u256<'de, D: Deserializer<'de>>(deserializer: D) -> Result<U256, D::Error> {
    NumericRepr::deserialize(deserializer)?.into_u256()
}

pub fn option_u256<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<U256>, D::Error> {
    Option::<NumericRepr>::deserialize(deserializer)?
        .map(NumericRepr::into_u256)
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Deserialize)]
    struct Row {
        #[serde(deserialize_with = "u256")]
        id: U256,
        #[serde(default, deserialize_with = "option_u256")]
        atom_id: Option<U256>,
    }

    #[test]
    fn test_accepts_numbers_and_strings() {
        let row: Row = serde_json::from_value(json!({ "id": 12, "atom_id": "34" })).unwrap();
        assert_eq!(row.id, U256::from(12));
        assert_eq!(row.atom_id, Some(U256::from(34)));
    }

    #[test]
    fn test_accepts_values_beyond_u64() {
        let row: Row =
            serde_json::from_value(json!({ "id": "340282366920938463463374607431768211456" }))
                .unwrap();
        assert_eq!(row.id, U256::from(1u8) << 128);
        assert_eq!(row.atom_id, None);
    }

    #[test]
    fn test_null_is_none() {
        let row: Row = serde_json::from_value(json!({ "id": "1", "atom_id": null })).unwrap();
        assert_eq!(row.atom_id, None);
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(serde_json::from_value::<Row>(json!({ "id": "twelve" })).is_err());
    }
}
