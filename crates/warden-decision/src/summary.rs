use warden_types::{
    Confidence, EvidenceChain, EvidenceSummary, ExecutionState, SummaryFieldClass, SummaryRecord,
};

/// Visibility class of an evidence field when presented to a human.
///
/// Raw payload bytes are hidden, provenance internals need an override, and
/// any field this table does not name stays hidden.
pub fn field_class(field: &str) -> SummaryFieldClass {
    match field {
        "point" | "evidence_type" | "timestamp" | "chain_length" | "execution_state"
        | "confidence" | "chain_hash" | "session_id" => SummaryFieldClass::Visible,
        "record_id" | "prior_hash" => SummaryFieldClass::OverrideRequired,
        _ => SummaryFieldClass::Hidden,
    }
}

/// Project a chain into the summary a human decides on.
///
/// Only visible fields cross into the summary; the payload bytes of every
/// record stay behind. The chain hash binds the summary to the exact chain
/// head it was taken from.
pub fn present_evidence(
    chain: &EvidenceChain,
    execution_state: ExecutionState,
    confidence: Confidence,
) -> EvidenceSummary {
    EvidenceSummary {
        session_id: chain.session_id.clone(),
        records: chain
            .records
            .iter()
            .map(|r| SummaryRecord {
                point: r.point,
                evidence_type: r.evidence_type,
                timestamp: r.timestamp.clone(),
            })
            .collect(),
        chain_length: chain.length,
        execution_state,
        confidence,
        chain_hash: chain.head_hash.clone(),
    }
}
