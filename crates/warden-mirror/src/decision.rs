use serde::{Deserialize, Serialize};

use warden_types::{DecisionKind, DecisionRecord, DecisionRequest, Timestamp};

/// Mirror classification of a human's answer to a decision request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MirrorAnswer {
    Acceptable,
    TimedOut,
    Refused,
}

/// Re-derive the acceptance rules for an answer, without producing records.
pub fn reclassify_answer(
    request: &DecisionRequest,
    decision: DecisionKind,
    human_id: &str,
    reason: Option<&str>,
    escalation_target: Option<&str>,
    now: &Timestamp,
) -> MirrorAnswer {
    if now > &request.timeout_at {
        return MirrorAnswer::TimedOut;
    }
    let has_reason = reason.map_or(false, |r| !r.is_empty());
    let has_target = escalation_target.map_or(false, |t| !t.is_empty());
    let well_formed = !human_id.is_empty()
        && request.allowed.contains(&decision)
        && match decision {
            DecisionKind::Retry => has_reason,
            DecisionKind::Escalate => has_reason && has_target,
            DecisionKind::Continue | DecisionKind::Abort => true,
        };
    if well_formed {
        MirrorAnswer::Acceptable
    } else {
        MirrorAnswer::Refused
    }
}

/// Mirror classification of a binding attempt.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MirrorBinding {
    Bindable,
    Duplicate,
    MissingField,
    InvalidDecision,
}

/// Re-derive the binding preconditions from the record and the caller's
/// knowledge of what is already bound.
pub fn recheck_binding(
    record: &DecisionRecord,
    session_id: &str,
    already_bound: bool,
) -> MirrorBinding {
    let complete = [
        record.decision_id.as_str(),
        record.human_id.as_str(),
        session_id,
    ]
    .iter()
    .all(|s| !s.is_empty());

    if !complete {
        return MirrorBinding::MissingField;
    }
    if !matches!(record.decision, DecisionKind::Continue | DecisionKind::Retry) {
        return MirrorBinding::InvalidDecision;
    }
    if already_bound {
        return MirrorBinding::Duplicate;
    }
    MirrorBinding::Bindable
}
