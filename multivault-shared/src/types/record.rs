use alloy::primitives::TxHash;
use serde::{Deserialize, Serialize};

use super::VaultId;

/// Outcome of a get-or-create call against the vault contract.
///
/// `hash` is `None` when the entity already existed and nothing was written,
/// and holds the transaction hash of the create call otherwise. The hash is
/// the key used to find out when the indexer has observed the write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxRecord {
    pub vault_id: VaultId,
    pub hash: Option<TxHash>,
}

impl TxRecord {
    /// Record for an entity that was found, no write issued.
    pub fn existing(vault_id: VaultId) -> Self {
        Self {
            vault_id,
            hash: None,
        }
    }

    /// Record for an entity created by the transaction `hash`.
    pub fn created(vault_id: VaultId, hash: TxHash) -> Self {
        Self {
            vault_id,
            hash: Some(hash),
        }
    }

    /// Whether this call wrote to the chain.
    pub fn is_created(&self) -> bool {
        self.hash.is_some()
    }
}

/// Outcome of a get-create-or-deposit call on a triple.
///
/// Extends [`TxRecord`] with the hash of the deposit issued against an
/// already existing triple, so callers can wait for that write to be indexed
/// as well.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripleRecord {
    pub vault_id: VaultId,
    pub hash: Option<TxHash>,
    pub deposit_hash: Option<TxHash>,
}

impl TripleRecord {
    pub fn existing(vault_id: VaultId) -> Self {
        Self {
            vault_id,
            hash: None,
            deposit_hash: None,
        }
    }

    pub fn deposited(vault_id: VaultId, deposit_hash: TxHash) -> Self {
        Self {
            vault_id,
            hash: None,
            deposit_hash: Some(deposit_hash),
        }
    }

    pub fn created(vault_id: VaultId, hash: TxHash) -> Self {
        Self {
            vault_id,
            hash: Some(hash),
            deposit_hash: None,
        }
    }

    /// The most recent write issued by the call, if any.
    ///
    /// This is the hash to wait on before querying the indexer.
    pub fn last_write(&self) -> Option<TxHash> {
        self.hash.or(self.deposit_hash)
    }
}

impl From<TripleRecord> for TxRecord {
    fn from(record: TripleRecord) -> Self {
        Self {
            vault_id: record.vault_id,
            hash: record.hash,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::{b256, U256};

    const HASH: TxHash = b256!("5427daee8d03277f8a30ea881692c04861e692ce5f305b7a689b76248cae63c4");

    #[test]
    fn test_existing_record_has_no_hash() {
        let record = TxRecord::existing(U256::from(7));
        assert_eq!(record.vault_id, U256::from(7));
        assert!(!record.is_created());
    }

    #[test]
    fn test_last_write_prefers_create_hash() {
        assert_eq!(TripleRecord::created(U256::from(1), HASH).last_write(), Some(HASH));
        assert_eq!(TripleRecord::deposited(U256::from(1), HASH).last_write(), Some(HASH));
        assert_eq!(TripleRecord::existing(U256::from(1)).last_write(), None);
    }

    #[test]
    fn test_triple_record_into_tx_record_drops_deposit_hash() {
        let record: TxRecord = TripleRecord::deposited(U256::from(3), HASH).into();
        assert_eq!(record, TxRecord::existing(U256::from(3)));
    }

    #[test]
    fn test_triple_record_json_keeps_hashes_as_hex_strings() {
        let record = TripleRecord::deposited(U256::from(3), HASH);

        let json = serde_json::to_value(record).unwrap();
        assert!(json["hash"].is_null());
        assert_eq!(json["deposit_hash"], HASH.to_string());

        let decoded: TripleRecord = serde_json::from_value(json).unwrap();
        assert_eq!(decoded, record);
    }
}
