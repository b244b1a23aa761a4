use serde::{Deserialize, Serialize};
use tracing::debug;

use warden_types::{Confidence, EvidenceBundle, EvidenceState};

/// Replay readiness of a bundle.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Replayability {
    pub replayable: bool,
    pub reason: String,
}

/// Confidence assignment for a bundle state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfidenceAssessment {
    pub confidence: Confidence,
    /// High confidence always pulls a human in; this flag is never false
    /// when confidence is `High`.
    pub requires_human_review: bool,
}

/// Classify a bundle by how its sources agree.
///
/// Zero sources is unverified, one source is raw, two or more sources agree
/// or they do not. Agreement means every fingerprint is identical;
/// fingerprints are caller-computed and only compared here.
pub fn classify_bundle(bundle: &EvidenceBundle) -> EvidenceState {
    let state = match bundle.sources.len() {
        0 => EvidenceState::Unverified,
        1 => EvidenceState::Raw,
        _ => {
            let first = &bundle.sources[0].fingerprint;
            if bundle.sources.iter().all(|s| &s.fingerprint == first) {
                EvidenceState::Consistent
            } else {
                EvidenceState::Inconsistent
            }
        }
    };
    debug!(sources = bundle.sources.len(), ?state, "bundle classified");
    state
}

/// A bundle replays only when there is something to replay, the steps are
/// deterministic, and nothing external is involved.
pub fn replay_readiness(bundle: &EvidenceBundle) -> Replayability {
    if bundle.steps.is_empty() {
        return Replayability {
            replayable: false,
            reason: "no reproduction steps".into(),
        };
    }
    if !bundle.deterministic {
        return Replayability {
            replayable: false,
            reason: "steps are not deterministic".into(),
        };
    }
    if bundle.external_dependencies {
        return Replayability {
            replayable: false,
            reason: "steps depend on external systems".into(),
        };
    }
    Replayability {
        replayable: true,
        reason: "deterministic, self-contained steps".into(),
    }
}

/// The confidence table. `High` is the ceiling and every pair outside the
/// table resolves `Low`.
pub fn assign_confidence(state: EvidenceState, replayable: bool) -> ConfidenceAssessment {
    let confidence = match (state, replayable) {
        (EvidenceState::Unverified, _) => Confidence::Low,
        (EvidenceState::Raw, false) => Confidence::Low,
        (EvidenceState::Raw, true) => Confidence::Medium,
        (EvidenceState::Inconsistent, _) => Confidence::Low,
        (EvidenceState::Consistent, false) => Confidence::Medium,
        (EvidenceState::Consistent, true) => Confidence::High,
        (EvidenceState::Replayable, true) => Confidence::High,
        (EvidenceState::Replayable, false) => Confidence::Low,
    };
    ConfidenceAssessment {
        confidence,
        requires_human_review: confidence == Confidence::High,
    }
}
