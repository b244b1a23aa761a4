use tracing::debug;

use warden_types::{ExecutorRawResponse, NormalizedDecision, NormalizedResult, ReportedStatus};

/// Normalize an executor's claim into the kernel's judgement.
///
/// The table is fixed. Confidence never reaches 1.0: an executor's word is
/// evidence, not truth, and only a human decision can close that gap.
pub fn normalize_response(response: &ExecutorRawResponse) -> NormalizedResult {
    let (decision, reason, confidence) = match response.reported {
        ReportedStatus::Success => (
            NormalizedDecision::Accept,
            "executor reported success",
            0.85,
        ),
        ReportedStatus::Failure => (NormalizedDecision::Reject, "executor reported failure", 0.30),
        ReportedStatus::Timeout => (NormalizedDecision::Reject, "executor reported timeout", 0.20),
        ReportedStatus::Partial => (
            NormalizedDecision::Escalate,
            "executor reported partial completion",
            0.50,
        ),
        ReportedStatus::Malformed => (
            NormalizedDecision::Reject,
            "executor response was malformed",
            0.10,
        ),
    };
    debug!(executor = %response.executor_id, ?decision, confidence, "response normalized");
    NormalizedResult {
        decision,
        reason: reason.to_string(),
        confidence,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use warden_types::Digest;

    fn response(reported: ReportedStatus) -> ExecutorRawResponse {
        ExecutorRawResponse {
            executor_id: "exec-1".into(),
            instruction_hash: Digest::zero(),
            payload: b"opaque".to_vec(),
            reported,
        }
    }

    #[test]
    fn the_table_is_fixed() {
        let cases = [
            (ReportedStatus::Success, NormalizedDecision::Accept, 0.85),
            (ReportedStatus::Failure, NormalizedDecision::Reject, 0.30),
            (ReportedStatus::Timeout, NormalizedDecision::Reject, 0.20),
            (ReportedStatus::Partial, NormalizedDecision::Escalate, 0.50),
            (ReportedStatus::Malformed, NormalizedDecision::Reject, 0.10),
        ];
        for (reported, decision, confidence) in cases {
            let n = normalize_response(&response(reported));
            assert_eq!(n.decision, decision, "{reported:?}");
            assert_eq!(n.confidence, confidence, "{reported:?}");
        }
    }

    #[test]
    fn confidence_is_strictly_below_one() {
        for reported in [
            ReportedStatus::Success,
            ReportedStatus::Failure,
            ReportedStatus::Timeout,
            ReportedStatus::Partial,
            ReportedStatus::Malformed,
        ] {
            assert!(normalize_response(&response(reported)).confidence < 1.0);
        }
    }

    #[test]
    fn success_is_accepted_but_never_certain() {
        let n = normalize_response(&response(ReportedStatus::Success));
        assert_eq!(n.decision, NormalizedDecision::Accept);
        assert!(n.confidence < 1.0);
    }
}
