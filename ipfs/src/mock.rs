//! Mock pinner for testing and local development.
//!
//! The `MockPinner` derives the CID from the document itself, so pinning the
//! same JSON twice yields the same URI, as with a real IPFS node.
//!
//! # Example
//!
//! ```ignore
//! use ipfs::{JsonPinner, MockPinner};
//! use serde_json::json;
//!
//! let pinner = MockPinner::new();
//! let uri = pinner.pin_json(&json!({ "name": "Foo" })).await?;
//! assert_eq!(pinner.get(&uri), Some(json!({ "name": "Foo" })));
//! ```

use std::collections::hash_map::DefaultHasher;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};
use std::sync::RwLock;

use async_trait::async_trait;
use serde_json::Value;

use crate::{JsonPinner, Result, IPFS_SCHEME};

/// In-memory pinner keyed by a hash of the serialized document.
#[derive(Default)]
pub struct MockPinner {
    /// Map of CID -> pinned document
    documents: RwLock<HashMap<String, Value>>,
    /// Number of `pin_json` calls, repeats included
    pins: RwLock<usize>,
}

impl MockPinner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Document pinned under `uri`. The `ipfs://` prefix is optional.
    pub fn get(&self, uri: &str) -> Option<Value> {
        self.documents
            .read()
            .unwrap()
            .get(normalize_cid(uri))
            .cloned()
    }

    /// Number of distinct documents pinned.
    pub fn len(&self) -> usize {
        self.documents.read().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.read().unwrap().is_empty()
    }

    /// Number of pin requests received.
    pub fn pin_count(&self) -> usize {
        *self.pins.read().unwrap()
    }
}

#[async_trait]
impl JsonPinner for MockPinner {
    async fn pin_json(&self, document: &Value) -> Result<String> {
        let cid = mock_cid(document);
        *self.pins.write().unwrap() += 1;
        self.documents
            .write()
            .unwrap()
            .entry(cid.clone())
            .or_insert_with(|| document.clone());
        Ok(format!("{IPFS_SCHEME}{cid}"))
    }
}

/// Objects serialize with sorted keys, so equal documents share a CID.
fn mock_cid(document: &Value) -> String {
    let mut hasher = DefaultHasher::new();
    document.to_string().hash(&mut hasher);
    format!("QmMock{:016x}", hasher.finish())
}

fn normalize_cid(uri: &str) -> &str {
    uri.strip_prefix(IPFS_SCHEME).unwrap_or(uri)
}
