use serde::{Deserialize, Serialize};

use crate::digest::Digest;
use crate::timestamp::Timestamp;

/// One appended audit fact. Hash-chained exactly like evidence records.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditRecord {
    pub record_id: String,
    /// Which layer wrote this record.
    pub layer: String,
    /// Short event name, e.g. `decision_accepted`, `authorization_rejected`.
    pub event: String,
    pub detail: String,
    pub timestamp: Timestamp,
    pub prior_hash: Digest,
    pub self_hash: Digest,
}

/// A per-layer append-only audit trail.
///
/// Each trail is owned by the layer that writes it; other layers reference
/// it by session id and head hash only.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrail {
    pub session_id: String,
    pub records: Vec<AuditRecord>,
    pub head_hash: Digest,
    pub length: u64,
}

impl AuditTrail {
    pub fn empty(session_id: impl Into<String>) -> Self {
        Self {
            session_id: session_id.into(),
            records: Vec::new(),
            head_hash: Digest::zero(),
            length: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Compact head-of-chain attestation for cross-system comparison.
    pub fn attest(&self) -> HeadAttestation {
        HeadAttestation {
            session_id: self.session_id.clone(),
            length: self.length,
            head_hash: self.head_hash.clone(),
        }
    }
}

/// Head-of-chain attestation: enough to compare trails, nothing to leak.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadAttestation {
    pub session_id: String,
    pub length: u64,
    pub head_hash: Digest,
}
