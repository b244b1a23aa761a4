use serde::{Deserialize, Serialize};

use crate::digest::Digest;
use crate::evidence::{EvidenceType, ObservationPoint};
use crate::timestamp::Timestamp;
use crate::verdict::Confidence;

/// The closed set of decisions a human can take on a request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecisionKind {
    Continue,
    Retry,
    Abort,
    Escalate,
}

/// Visibility class of a summary field when evidence is presented to a human.
///
/// Raw payload bytes are always `Hidden`; fields that demand higher authority
/// to reveal are `OverrideRequired`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SummaryFieldClass {
    Visible,
    Hidden,
    OverrideRequired,
}

/// Execution position of an intent, derived and never stored mutable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExecutionState {
    Pending,
    Authorized,
    Executing,
    Halted,
    Completed,
}

/// The visible projection of one evidence record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryRecord {
    pub point: ObservationPoint,
    pub evidence_type: EvidenceType,
    pub timestamp: Timestamp,
}

/// Curated view of an evidence chain for human decision-making.
///
/// Carries visible fields only; payload bytes never appear here.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvidenceSummary {
    pub session_id: String,
    pub records: Vec<SummaryRecord>,
    pub chain_length: u64,
    pub execution_state: ExecutionState,
    pub confidence: Confidence,
    pub chain_hash: Digest,
}

/// A pending request for a human decision.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionRequest {
    pub request_id: String,
    pub session_id: String,
    pub summary: EvidenceSummary,
    pub allowed: Vec<DecisionKind>,
    pub created_at: Timestamp,
    pub timeout_at: Timestamp,
    /// What the kernel records if the human never answers. Always `Abort`.
    pub timeout_decision: DecisionKind,
}

/// A recorded human decision. Written once.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionRecord {
    pub decision_id: String,
    pub request_id: String,
    pub human_id: String,
    pub decision: DecisionKind,
    /// Required for `Retry` and `Escalate`.
    pub reason: Option<String>,
    /// Required for `Escalate`.
    pub escalation_target: Option<String>,
    pub timestamp: Timestamp,
    /// The chain head this decision was made against.
    pub evidence_chain_hash: Digest,
}

/// The immutable binding of a human decision to an execution target.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionIntent {
    pub intent_id: String,
    pub decision_id: String,
    pub decision_type: DecisionKind,
    pub evidence_chain_hash: Digest,
    pub session_id: String,
    pub execution_state: ExecutionState,
    pub created_by: String,
    pub created_at: Timestamp,
    pub intent_hash: Digest,
}

/// Permanent revocation of an intent. Reason is mandatory.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntentRevocation {
    pub revocation_id: String,
    pub intent_id: String,
    pub revoked_by: String,
    pub reason: String,
    pub timestamp: Timestamp,
    pub revocation_hash: Digest,
}

/// Status of an execution authorization.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthorizationStatus {
    Authorized,
    Rejected,
    Revoked,
    Expired,
}

/// The permission object whose presence and status gate execution readiness.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionAuthorization {
    pub auth_id: String,
    pub intent_id: String,
    pub status: AuthorizationStatus,
    pub created_by: String,
    pub session_id: String,
    pub created_at: Timestamp,
    pub decided_at: Timestamp,
    pub auth_hash: Digest,
}

impl ExecutionAuthorization {
    pub fn is_authorized(&self) -> bool {
        self.status == AuthorizationStatus::Authorized
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn authorization_status_check() {
        let ts = Timestamp::parse("2026-03-01T00:00:00Z").unwrap();
        let auth = ExecutionAuthorization {
            auth_id: "auth-1".into(),
            intent_id: "int-1".into(),
            status: AuthorizationStatus::Rejected,
            created_by: "human-1".into(),
            session_id: "sess-1".into(),
            created_at: ts.clone(),
            decided_at: ts,
            auth_hash: Digest::zero(),
        };
        assert!(!auth.is_authorized());
    }
}
