use std::fmt;

use serde::{Deserialize, Serialize};

use super::VaultId;

/// The identity of a triple: an ordered `(subject, predicate, object)` tuple
/// of atom vault ids.
///
/// Order matters, `(s, p, o)` and `(o, p, s)` are different triples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TripleKey {
    pub subject_id: VaultId,
    pub predicate_id: VaultId,
    pub object_id: VaultId,
}

impl TripleKey {
    pub fn new(subject_id: VaultId, predicate_id: VaultId, object_id: VaultId) -> Self {
        Self {
            subject_id,
            predicate_id,
            object_id,
        }
    }

    /// The same relationship read in the other direction.
    pub fn reversed(&self) -> Self {
        Self {
            subject_id: self.object_id,
            predicate_id: self.predicate_id,
            object_id: self.subject_id,
        }
    }
}

impl fmt::Display for TripleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} {} {})", self.subject_id, self.predicate_id, self.object_id)
    }
}
