use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use warden_evidence::{append_audit, CanonicalWriter};
use warden_types::{
    AuditTrail, DecisionKind, DecisionRecord, DecisionRequest, ErrorKind, GovernanceError,
    Timestamp,
};

/// What came of presenting a request to a human.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum DecisionOutcome {
    /// The human answered in time with an allowed, well-formed decision.
    Accepted(DecisionRecord),
    /// The deadline passed; an abort record was synthesized on the
    /// request's behalf.
    TimedOut(DecisionRecord),
    /// The answer was refused. Nothing was recorded as decided.
    Rejected { kind: ErrorKind, reason: String },
}

/// Accept (or refuse) a human's answer to a decision request.
///
/// The answer must arrive by the deadline, must be one of the allowed
/// decisions, and must satisfy the required-fields discipline: `Retry`
/// carries a reason, `Escalate` carries a reason and a target. Every
/// outcome is appended to the decision audit trail.
#[allow(clippy::too_many_arguments)]
pub fn accept_decision(
    request: &DecisionRequest,
    decision: DecisionKind,
    human_id: &str,
    reason: Option<String>,
    escalation_target: Option<String>,
    now: Timestamp,
    trail: AuditTrail,
) -> (DecisionOutcome, AuditTrail) {
    match evaluate(request, decision, human_id, reason, escalation_target, &now) {
        Ok(Evaluated::TimedOut(record)) => {
            info!(request = %request.request_id, "decision request timed out; abort synthesized");
            let trail = append_audit(
                trail,
                "decision",
                "decision_timed_out",
                &format!("request {}", request.request_id),
                now,
            );
            (DecisionOutcome::TimedOut(record), trail)
        }
        Ok(Evaluated::Answered(record)) => {
            info!(request = %request.request_id, decision = ?record.decision, "decision recorded");
            let trail = append_audit(
                trail,
                "decision",
                "decision_accepted",
                &format!("request {} decided {:?}", request.request_id, record.decision),
                now,
            );
            (DecisionOutcome::Accepted(record), trail)
        }
        Err(err) => {
            warn!(request = %request.request_id, %err, "decision refused");
            let trail = append_audit(
                trail,
                "decision",
                "decision_rejected",
                &err.to_string(),
                now,
            );
            (
                DecisionOutcome::Rejected {
                    kind: err.kind(),
                    reason: err.to_string(),
                },
                trail,
            )
        }
    }
}

enum Evaluated {
    Answered(DecisionRecord),
    TimedOut(DecisionRecord),
}

fn evaluate(
    request: &DecisionRequest,
    decision: DecisionKind,
    human_id: &str,
    reason: Option<String>,
    escalation_target: Option<String>,
    now: &Timestamp,
) -> Result<Evaluated, GovernanceError> {
    // Deadline first: a late answer is a timeout no matter what it says.
    if *now > request.timeout_at {
        return Ok(Evaluated::TimedOut(synthesize_timeout(request, now)));
    }

    if human_id.is_empty() {
        return Err(GovernanceError::MissingField("human_id".into()));
    }
    if !request.allowed.contains(&decision) {
        return Err(GovernanceError::UnknownInput(format!(
            "decision {decision:?} is not among the allowed set"
        )));
    }
    match decision {
        DecisionKind::Retry if reason.as_deref().map_or(true, str::is_empty) => {
            return Err(GovernanceError::MissingField("reason (required for retry)".into()));
        }
        DecisionKind::Escalate => {
            if reason.as_deref().map_or(true, str::is_empty) {
                return Err(GovernanceError::MissingField(
                    "reason (required for escalate)".into(),
                ));
            }
            if escalation_target.as_deref().map_or(true, str::is_empty) {
                return Err(GovernanceError::MissingField(
                    "escalation_target (required for escalate)".into(),
                ));
            }
        }
        _ => {}
    }

    Ok(Evaluated::Answered(DecisionRecord {
        decision_id: derive_decision_id(&request.request_id, human_id, now),
        request_id: request.request_id.clone(),
        human_id: human_id.to_string(),
        decision,
        reason,
        escalation_target,
        timestamp: now.clone(),
        evidence_chain_hash: request.summary.chain_hash.clone(),
    }))
}

/// The record written when nobody answered: an abort attributed to the
/// timeout itself, bound to the same chain head the request presented.
fn synthesize_timeout(request: &DecisionRequest, now: &Timestamp) -> DecisionRecord {
    DecisionRecord {
        decision_id: derive_decision_id(&request.request_id, "timeout", now),
        request_id: request.request_id.clone(),
        human_id: "timeout".to_string(),
        decision: DecisionKind::Abort,
        reason: Some("decision request timed out".into()),
        escalation_target: None,
        timestamp: now.clone(),
        evidence_chain_hash: request.summary.chain_hash.clone(),
    }
}

fn derive_decision_id(request_id: &str, human_id: &str, now: &Timestamp) -> String {
    let hex = CanonicalWriter::new()
        .str_field(request_id)
        .str_field(human_id)
        .str_field(now.as_str())
        .digest_hex();
    format!("dec-{}", &hex[..16])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::create_request;
    use warden_types::{Confidence, Digest, EvidenceSummary, ExecutionState};

    fn ts(s: &str) -> Timestamp {
        Timestamp::parse(s).unwrap()
    }

    fn request() -> DecisionRequest {
        let summary = EvidenceSummary {
            session_id: "sess-1".into(),
            records: vec![],
            chain_length: 0,
            execution_state: ExecutionState::Pending,
            confidence: Confidence::Medium,
            chain_hash: Digest::zero(),
        };
        create_request(
            summary,
            vec![
                DecisionKind::Continue,
                DecisionKind::Retry,
                DecisionKind::Abort,
                DecisionKind::Escalate,
            ],
            ts("2026-03-01T00:00:00Z"),
            ts("2026-03-01T01:00:00Z"),
        )
        .unwrap()
    }

    #[test]
    fn timely_continue_is_accepted() {
        let (outcome, trail) = accept_decision(
            &request(),
            DecisionKind::Continue,
            "human-1",
            None,
            None,
            ts("2026-03-01T00:30:00Z"),
            AuditTrail::empty("sess-1"),
        );
        let DecisionOutcome::Accepted(record) = outcome else {
            panic!("expected acceptance, got {outcome:?}");
        };
        assert_eq!(record.decision, DecisionKind::Continue);
        assert_eq!(trail.length, 1);
        assert_eq!(trail.records[0].event, "decision_accepted");
    }

    #[test]
    fn late_answer_becomes_a_timeout_abort() {
        let (outcome, trail) = accept_decision(
            &request(),
            DecisionKind::Continue,
            "human-1",
            None,
            None,
            ts("2026-03-01T02:00:00Z"),
            AuditTrail::empty("sess-1"),
        );
        let DecisionOutcome::TimedOut(record) = outcome else {
            panic!("expected timeout, got {outcome:?}");
        };
        assert_eq!(record.decision, DecisionKind::Abort);
        assert_eq!(trail.records[0].event, "decision_timed_out");
    }

    #[test]
    fn disallowed_decision_is_rejected() {
        let summary = request().summary;
        let narrow = create_request(
            summary,
            vec![DecisionKind::Abort],
            ts("2026-03-01T00:00:00Z"),
            ts("2026-03-01T01:00:00Z"),
        )
        .unwrap();
        let (outcome, _) = accept_decision(
            &narrow,
            DecisionKind::Continue,
            "human-1",
            None,
            None,
            ts("2026-03-01T00:10:00Z"),
            AuditTrail::empty("sess-1"),
        );
        assert!(matches!(
            outcome,
            DecisionOutcome::Rejected { kind: ErrorKind::UnknownInput, .. }
        ));
    }

    #[test]
    fn retry_requires_a_reason() {
        let (outcome, _) = accept_decision(
            &request(),
            DecisionKind::Retry,
            "human-1",
            None,
            None,
            ts("2026-03-01T00:10:00Z"),
            AuditTrail::empty("sess-1"),
        );
        assert!(matches!(
            outcome,
            DecisionOutcome::Rejected { kind: ErrorKind::MissingField, .. }
        ));
    }

    #[test]
    fn escalate_requires_reason_and_target() {
        let (outcome, _) = accept_decision(
            &request(),
            DecisionKind::Escalate,
            "human-1",
            Some("needs senior review".into()),
            None,
            ts("2026-03-01T00:10:00Z"),
            AuditTrail::empty("sess-1"),
        );
        assert!(matches!(outcome, DecisionOutcome::Rejected { .. }));

        let (outcome, _) = accept_decision(
            &request(),
            DecisionKind::Escalate,
            "human-1",
            Some("needs senior review".into()),
            Some("human-lead".into()),
            ts("2026-03-01T00:10:00Z"),
            AuditTrail::empty("sess-1"),
        );
        assert!(matches!(outcome, DecisionOutcome::Accepted(_)));
    }

    #[test]
    fn record_binds_the_presented_chain_head() {
        let req = request();
        let (outcome, _) = accept_decision(
            &req,
            DecisionKind::Continue,
            "human-1",
            None,
            None,
            ts("2026-03-01T00:10:00Z"),
            AuditTrail::empty("sess-1"),
        );
        let DecisionOutcome::Accepted(record) = outcome else {
            panic!();
        };
        assert_eq!(record.evidence_chain_hash, req.summary.chain_hash);
    }

    #[test]
    fn every_outcome_lands_on_the_audit_trail() {
        let (_, trail) = accept_decision(
            &request(),
            DecisionKind::Retry,
            "human-1",
            None,
            None,
            ts("2026-03-01T00:10:00Z"),
            AuditTrail::empty("sess-1"),
        );
        assert_eq!(trail.records[0].event, "decision_rejected");
    }
}
