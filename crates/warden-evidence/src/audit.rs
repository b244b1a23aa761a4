use tracing::debug;

use warden_types::{AuditRecord, AuditTrail, Digest, GovernanceError, Timestamp};

use crate::canonical::CanonicalWriter;

fn audit_digest(
    record_id: &str,
    layer: &str,
    event: &str,
    detail: &str,
    timestamp: &Timestamp,
    prior_hash: &Digest,
) -> Digest {
    let hex = CanonicalWriter::new()
        .str_field(record_id)
        .str_field(layer)
        .str_field(event)
        .str_field(detail)
        .str_field(timestamp.as_str())
        .str_field(prior_hash.as_str())
        .digest_hex();
    Digest::from_computed(hex)
}

fn derive_record_id(session_id: &str, index: u64, layer: &str, event: &str) -> String {
    let hex = CanonicalWriter::new()
        .str_field(session_id)
        .u64_field(index)
        .str_field(layer)
        .str_field(event)
        .digest_hex();
    format!("aud-{}", &hex[..16])
}

/// Append one audit fact to a layer's trail.
///
/// Same chaining discipline as the evidence chain: the new record's prior
/// hash is the old head, and the trail has no modify or delete surface.
pub fn append_audit(
    trail: AuditTrail,
    layer: &str,
    event: &str,
    detail: &str,
    timestamp: Timestamp,
) -> AuditTrail {
    let mut trail = trail;
    let prior_hash = trail.head_hash.clone();
    let record_id = derive_record_id(&trail.session_id, trail.length, layer, event);
    let self_hash = audit_digest(&record_id, layer, event, detail, &timestamp, &prior_hash);

    debug!(session = %trail.session_id, layer, event, "audit fact recorded");

    trail.records.push(AuditRecord {
        record_id,
        layer: layer.to_string(),
        event: event.to_string(),
        detail: detail.to_string(),
        timestamp,
        prior_hash,
        self_hash: self_hash.clone(),
    });
    trail.head_hash = self_hash;
    trail.length += 1;
    trail
}

/// Validate an audit trail by re-hashing every record.
pub fn validate_trail(trail: &AuditTrail) -> Result<(), GovernanceError> {
    if trail.length != trail.records.len() as u64 {
        return Err(GovernanceError::ChainIntegrity(format!(
            "length field {} disagrees with {} records",
            trail.length,
            trail.records.len()
        )));
    }

    let mut expected_prior = Digest::zero();
    for (i, record) in trail.records.iter().enumerate() {
        if record.prior_hash != expected_prior {
            return Err(GovernanceError::ChainIntegrity(format!(
                "audit record {i} prior hash does not match the previous self hash"
            )));
        }
        let recomputed = audit_digest(
            &record.record_id,
            &record.layer,
            &record.event,
            &record.detail,
            &record.timestamp,
            &record.prior_hash,
        );
        if recomputed != record.self_hash {
            return Err(GovernanceError::HashMismatch {
                expected: record.self_hash.as_str().to_string(),
                actual: recomputed.as_str().to_string(),
            });
        }
        expected_prior = record.self_hash.clone();
    }

    if trail.head_hash != expected_prior {
        return Err(GovernanceError::ChainIntegrity(
            "head hash does not match the last self hash".into(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ts(s: &str) -> Timestamp {
        Timestamp::parse(s).unwrap()
    }

    #[test]
    fn appended_trail_validates() {
        let trail = AuditTrail::empty("sess-1");
        let trail = append_audit(trail, "decision", "request_created", "req-1", ts("2026-03-01T00:00:00Z"));
        let trail = append_audit(trail, "decision", "decision_accepted", "continue", ts("2026-03-01T00:01:00Z"));
        assert_eq!(trail.length, 2);
        assert!(validate_trail(&trail).is_ok());
    }

    #[test]
    fn tampered_detail_breaks_validation() {
        let trail = append_audit(
            AuditTrail::empty("sess-1"),
            "authority",
            "authorization_issued",
            "auth-1",
            ts("2026-03-01T00:00:00Z"),
        );
        let mut tampered = trail;
        tampered.records[0].detail = "auth-2".into();
        assert!(validate_trail(&tampered).is_err());
    }

    #[test]
    fn attestation_tracks_the_head() {
        let trail = append_audit(
            AuditTrail::empty("sess-1"),
            "decision",
            "request_created",
            "req-1",
            ts("2026-03-01T00:00:00Z"),
        );
        let att = trail.attest();
        assert_eq!(att.head_hash, trail.head_hash);
        assert_eq!(att.length, 1);
    }
}
