use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use warden_evidence::CanonicalWriter;
use warden_types::{
    DecisionKind, DecisionRecord, Digest, ExecutionIntent, ExecutionState, GovernanceError,
    IntentRevocation, Timestamp,
};

fn decision_token(kind: DecisionKind) -> &'static str {
    match kind {
        DecisionKind::Continue => "continue",
        DecisionKind::Retry => "retry",
        DecisionKind::Abort => "abort",
        DecisionKind::Escalate => "escalate",
    }
}

fn state_token(state: ExecutionState) -> &'static str {
    match state {
        ExecutionState::Pending => "pending",
        ExecutionState::Authorized => "authorized",
        ExecutionState::Executing => "executing",
        ExecutionState::Halted => "halted",
        ExecutionState::Completed => "completed",
    }
}

/// Caller-owned ledger of bound intents and their revocations.
///
/// One decision produces at most one intent, ever. Revocation is permanent:
/// a revocation record, once appended, can never be removed, and
/// `is_revoked` answers from the records alone.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct IntentLedger {
    intents: Vec<ExecutionIntent>,
    revocations: Vec<IntentRevocation>,
    bound_decisions: BTreeMap<String, String>,
}

impl IntentLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a decision record to a fresh execution intent.
    ///
    /// Only decisions that mean "go" can bind: `Continue` and `Retry`.
    /// Aborts and escalations are resolutions, not execution warrants.
    pub fn bind(
        &mut self,
        record: &DecisionRecord,
        session_id: &str,
    ) -> Result<ExecutionIntent, GovernanceError> {
        if record.decision_id.is_empty() {
            return Err(GovernanceError::MissingField("decision_id".into()));
        }
        if record.human_id.is_empty() {
            return Err(GovernanceError::MissingField("human_id".into()));
        }
        if session_id.is_empty() {
            return Err(GovernanceError::MissingField("session_id".into()));
        }
        if !matches!(record.decision, DecisionKind::Continue | DecisionKind::Retry) {
            return Err(GovernanceError::UnknownInput(format!(
                "decision {:?} does not bind to an execution intent",
                record.decision
            )));
        }
        if let Some(existing) = self.bound_decisions.get(&record.decision_id) {
            warn!(decision = %record.decision_id, intent = %existing, "duplicate binding refused");
            return Err(GovernanceError::DuplicateBinding(format!(
                "decision {} is already bound to intent {existing}",
                record.decision_id
            )));
        }

        let execution_state = ExecutionState::Pending;
        let intent_id = derive_intent_id(&record.decision_id, session_id);
        let intent_hash = intent_digest(
            &intent_id,
            record,
            session_id,
            execution_state,
        );

        let intent = ExecutionIntent {
            intent_id: intent_id.clone(),
            decision_id: record.decision_id.clone(),
            decision_type: record.decision,
            evidence_chain_hash: record.evidence_chain_hash.clone(),
            session_id: session_id.to_string(),
            execution_state,
            created_by: record.human_id.clone(),
            created_at: record.timestamp.clone(),
            intent_hash,
        };

        info!(intent = %intent_id, decision = %record.decision_id, "intent bound");
        self.bound_decisions
            .insert(record.decision_id.clone(), intent_id);
        self.intents.push(intent.clone());
        Ok(intent)
    }

    /// Revoke an intent. The reason is mandatory and the revocation is
    /// permanent.
    pub fn revoke(
        &mut self,
        intent_id: &str,
        revoked_by: &str,
        reason: &str,
        timestamp: Timestamp,
    ) -> Result<IntentRevocation, GovernanceError> {
        if reason.is_empty() {
            return Err(GovernanceError::MissingField("reason".into()));
        }
        if revoked_by.is_empty() {
            return Err(GovernanceError::MissingField("revoked_by".into()));
        }
        if self.intent(intent_id).is_none() {
            return Err(GovernanceError::UnknownInput(format!(
                "no such intent: {intent_id}"
            )));
        }
        if self.is_revoked(intent_id) {
            return Err(GovernanceError::Revoked(format!(
                "intent {intent_id} is already revoked"
            )));
        }

        let revocation_hash = CanonicalWriter::new()
            .str_field(intent_id)
            .str_field(revoked_by)
            .str_field(reason)
            .str_field(timestamp.as_str())
            .digest_hex();
        let revocation = IntentRevocation {
            revocation_id: format!("rev-{}", &revocation_hash[..16]),
            intent_id: intent_id.to_string(),
            revoked_by: revoked_by.to_string(),
            reason: reason.to_string(),
            timestamp,
            revocation_hash: Digest::from_computed(revocation_hash),
        };

        warn!(intent = %intent_id, revoked_by, "intent revoked");
        self.revocations.push(revocation.clone());
        Ok(revocation)
    }

    /// True iff a revocation record exists for this intent. Forever.
    pub fn is_revoked(&self, intent_id: &str) -> bool {
        self.revocations.iter().any(|r| r.intent_id == intent_id)
    }

    /// The revocation record for an intent, if one exists.
    pub fn revocation(&self, intent_id: &str) -> Option<&IntentRevocation> {
        self.revocations.iter().find(|r| r.intent_id == intent_id)
    }

    /// Effective execution state, derived from the records: a revoked
    /// intent is halted no matter what was sealed into it.
    pub fn derived_state(&self, intent_id: &str) -> Option<ExecutionState> {
        let intent = self.intent(intent_id)?;
        Some(if self.is_revoked(intent_id) {
            ExecutionState::Halted
        } else {
            intent.execution_state
        })
    }

    /// All intents matching a filter, in binding order.
    pub fn query(&self, filter: &IntentFilter) -> Vec<&ExecutionIntent> {
        self.intents
            .iter()
            .filter(|i| filter.matches(i, self.is_revoked(&i.intent_id)))
            .collect()
    }

    pub fn intent(&self, intent_id: &str) -> Option<&ExecutionIntent> {
        self.intents.iter().find(|i| i.intent_id == intent_id)
    }

    pub fn intent_for_decision(&self, decision_id: &str) -> Option<&ExecutionIntent> {
        let intent_id = self.bound_decisions.get(decision_id)?;
        self.intent(intent_id)
    }

    pub fn intents_for_session(&self, session_id: &str) -> Vec<&ExecutionIntent> {
        self.intents
            .iter()
            .filter(|i| i.session_id == session_id)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.intents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.intents.is_empty()
    }

    /// Recompute an intent's hash and compare. A mismatch means the value
    /// was altered after binding.
    pub fn verify_intent_hash(&self, intent: &ExecutionIntent) -> Result<(), GovernanceError> {
        let recomputed = CanonicalWriter::new()
            .str_field(&intent.intent_id)
            .str_field(&intent.decision_id)
            .str_field(decision_token(intent.decision_type))
            .str_field(intent.evidence_chain_hash.as_str())
            .str_field(&intent.session_id)
            .str_field(state_token(intent.execution_state))
            .str_field(intent.created_at.as_str())
            .str_field(&intent.created_by)
            .digest_hex();
        if recomputed != intent.intent_hash.as_str() {
            return Err(GovernanceError::HashMismatch {
                expected: intent.intent_hash.as_str().to_string(),
                actual: recomputed,
            });
        }
        Ok(())
    }
}

/// Filter for querying bound intents. Read-only.
#[derive(Clone, Debug, Default)]
pub struct IntentFilter {
    pub session_id: Option<String>,
    pub decision_type: Option<DecisionKind>,
    pub revoked: Option<bool>,
}

impl IntentFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_session(mut self, session_id: impl Into<String>) -> Self {
        self.session_id = Some(session_id.into());
        self
    }

    pub fn with_decision_type(mut self, decision_type: DecisionKind) -> Self {
        self.decision_type = Some(decision_type);
        self
    }

    pub fn with_revoked(mut self, revoked: bool) -> Self {
        self.revoked = Some(revoked);
        self
    }

    fn matches(&self, intent: &ExecutionIntent, is_revoked: bool) -> bool {
        if let Some(ref session) = self.session_id {
            if &intent.session_id != session {
                return false;
            }
        }
        if let Some(decision_type) = self.decision_type {
            if intent.decision_type != decision_type {
                return false;
            }
        }
        if let Some(revoked) = self.revoked {
            if is_revoked != revoked {
                return false;
            }
        }
        true
    }
}

fn derive_intent_id(decision_id: &str, session_id: &str) -> String {
    let hex = CanonicalWriter::new()
        .str_field(decision_id)
        .str_field(session_id)
        .digest_hex();
    format!("int-{}", &hex[..16])
}

fn intent_digest(
    intent_id: &str,
    record: &DecisionRecord,
    session_id: &str,
    execution_state: ExecutionState,
) -> Digest {
    let hex = CanonicalWriter::new()
        .str_field(intent_id)
        .str_field(&record.decision_id)
        .str_field(decision_token(record.decision))
        .str_field(record.evidence_chain_hash.as_str())
        .str_field(session_id)
        .str_field(state_token(execution_state))
        .str_field(record.timestamp.as_str())
        .str_field(&record.human_id)
        .digest_hex();
    Digest::from_computed(hex)
}
