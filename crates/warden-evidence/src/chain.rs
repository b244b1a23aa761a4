use tracing::{debug, warn};

use warden_types::{
    Digest, EvidenceChain, EvidenceRecord, EvidenceType, GovernanceError, ObservationPoint,
    Timestamp,
};

use crate::canonical::{evidence_token, point_token, CanonicalWriter};

/// Hash one record's fields together with its prior hash.
///
/// The encoding covers every field in declared order: record id, point,
/// type, timestamp, payload, prior hash. This is the only place the primary
/// tree computes a record hash.
fn record_digest(
    record_id: &str,
    point: ObservationPoint,
    evidence_type: EvidenceType,
    timestamp: &Timestamp,
    payload: &[u8],
    prior_hash: &Digest,
) -> Digest {
    let hex = CanonicalWriter::new()
        .str_field(record_id)
        .str_field(point_token(point))
        .str_field(evidence_token(evidence_type))
        .str_field(timestamp.as_str())
        .bytes_field(payload)
        .str_field(prior_hash.as_str())
        .digest_hex();
    Digest::from_computed(hex)
}

/// Deterministic record id: a function of where the record sits, never of
/// any ambient state.
fn derive_record_id(session_id: &str, index: u64, timestamp: &Timestamp) -> String {
    let hex = CanonicalWriter::new()
        .str_field(session_id)
        .u64_field(index)
        .str_field(timestamp.as_str())
        .digest_hex();
    format!("rec-{}", &hex[..16])
}

/// Append one observation to a chain.
///
/// Consumes the old chain value and returns the new one; the caller owns
/// both ends of that exchange. The payload is hashed as given and never
/// parsed.
pub fn capture(
    chain: EvidenceChain,
    point: ObservationPoint,
    evidence_type: EvidenceType,
    timestamp: Timestamp,
    payload: Vec<u8>,
) -> EvidenceChain {
    let mut chain = chain;
    let prior_hash = chain.head_hash.clone();
    let record_id = derive_record_id(&chain.session_id, chain.length, &timestamp);
    let self_hash = record_digest(
        &record_id,
        point,
        evidence_type,
        &timestamp,
        &payload,
        &prior_hash,
    );

    debug!(
        session = %chain.session_id,
        record = %record_id,
        ?point,
        ?evidence_type,
        "observation captured"
    );

    chain.records.push(EvidenceRecord {
        record_id,
        point,
        evidence_type,
        timestamp,
        payload,
        prior_hash,
        self_hash: self_hash.clone(),
    });
    chain.head_hash = self_hash;
    chain.length += 1;
    chain
}

/// Validate a chain by re-hashing every record.
///
/// Valid means: every self hash reproduces, every prior hash matches the
/// previous self hash (the first matches the zero digest), the recorded
/// length matches, and the head hash matches the last self hash.
pub fn validate_chain(chain: &EvidenceChain) -> Result<(), GovernanceError> {
    if chain.length != chain.records.len() as u64 {
        return Err(GovernanceError::ChainIntegrity(format!(
            "length field {} disagrees with {} records",
            chain.length,
            chain.records.len()
        )));
    }

    let mut expected_prior = Digest::zero();
    for (i, record) in chain.records.iter().enumerate() {
        if record.prior_hash != expected_prior {
            warn!(session = %chain.session_id, index = i, "broken chain link");
            return Err(GovernanceError::ChainIntegrity(format!(
                "record {i} prior hash does not match the previous self hash"
            )));
        }
        let recomputed = record_digest(
            &record.record_id,
            record.point,
            record.evidence_type,
            &record.timestamp,
            &record.payload,
            &record.prior_hash,
        );
        if recomputed != record.self_hash {
            warn!(session = %chain.session_id, index = i, "record hash mismatch");
            return Err(GovernanceError::HashMismatch {
                expected: record.self_hash.as_str().to_string(),
                actual: recomputed.as_str().to_string(),
            });
        }
        expected_prior = record.self_hash.clone();
    }

    if chain.head_hash != expected_prior {
        return Err(GovernanceError::ChainIntegrity(
            "head hash does not match the last self hash".into(),
        ));
    }
    Ok(())
}
