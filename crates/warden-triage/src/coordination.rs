use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use warden_types::{Severity, Timestamp};

/// Outcome of checking one fingerprint against the ledger.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DuplicateCheck {
    pub duplicate: bool,
    pub fingerprint: String,
}

/// Caller-owned ledger of fingerprints already seen.
///
/// Fingerprints are deterministic and computed by callers; the kernel only
/// compares them for equality. There is no similarity scoring.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FingerprintLedger {
    seen: BTreeSet<String>,
}

impl FingerprintLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check a fingerprint without recording it.
    pub fn check(&self, fingerprint: &str) -> DuplicateCheck {
        DuplicateCheck {
            duplicate: self.seen.contains(fingerprint),
            fingerprint: fingerprint.to_string(),
        }
    }

    /// Check and record in one step. The first sighting is not a duplicate;
    /// every later sighting of the same fingerprint is.
    pub fn note(&mut self, fingerprint: &str) -> DuplicateCheck {
        let duplicate = !self.seen.insert(fingerprint.to_string());
        if duplicate {
            debug!(fingerprint, "duplicate fingerprint");
        }
        DuplicateCheck {
            duplicate,
            fingerprint: fingerprint.to_string(),
        }
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}

/// One queued submission awaiting processing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    pub submission_id: String,
    pub fingerprint: String,
    pub severity: Severity,
    pub submitted_at: Timestamp,
}

/// Fair, deterministic processing order.
///
/// Higher severity first; within a severity band, strictly oldest first, ties
/// broken by submission id. The order is a total function of the input set,
/// so no submission can be starved by re-ranking.
pub fn order_queue(mut submissions: Vec<Submission>) -> Vec<Submission> {
    submissions.sort_by(|a, b| {
        b.severity
            .cmp(&a.severity)
            .then_with(|| a.submitted_at.cmp(&b.submitted_at))
            .then_with(|| a.submission_id.cmp(&b.submission_id))
    });
    submissions
}
