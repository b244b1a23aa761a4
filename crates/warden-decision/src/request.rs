use tracing::debug;

use warden_evidence::CanonicalWriter;
use warden_types::{DecisionKind, DecisionRequest, EvidenceSummary, GovernanceError, Timestamp};

/// Create a decision request for a human.
///
/// The allowed set must be non-empty and the deadline must lie after the
/// creation time. If the human never answers, the recorded decision is
/// `Abort` — a silent timeout never continues anything.
pub fn create_request(
    summary: EvidenceSummary,
    allowed: Vec<DecisionKind>,
    now: Timestamp,
    timeout_at: Timestamp,
) -> Result<DecisionRequest, GovernanceError> {
    if allowed.is_empty() {
        return Err(GovernanceError::MissingField("allowed decisions".into()));
    }
    if timeout_at <= now {
        return Err(GovernanceError::Timeout(format!(
            "deadline {timeout_at} is not after creation time {now}"
        )));
    }

    let request_id = derive_request_id(&summary, &now);
    debug!(request = %request_id, session = %summary.session_id, "decision request created");

    Ok(DecisionRequest {
        request_id,
        session_id: summary.session_id.clone(),
        summary,
        allowed,
        created_at: now,
        timeout_at,
        timeout_decision: DecisionKind::Abort,
    })
}

fn derive_request_id(summary: &EvidenceSummary, now: &Timestamp) -> String {
    let hex = CanonicalWriter::new()
        .str_field(&summary.session_id)
        .str_field(summary.chain_hash.as_str())
        .u64_field(summary.chain_length)
        .str_field(now.as_str())
        .digest_hex();
    format!("req-{}", &hex[..16])
}
