use serde::{Deserialize, Serialize};
use sha2::{Digest as _, Sha256};

use warden_types::{
    AuditTrail, EvidenceChain, EvidenceRecord, EvidenceType, ObservationPoint, ZERO_DIGEST,
};

/// Mirror verdict on a chain or trail.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MirrorChainVerdict {
    Intact,
    Broken { at_index: usize },
}

/// Independent restatement of the canonical encoding: strings and byte
/// payloads are length-prefixed (u32 big-endian) and every field ends with
/// the `0x1f` separator; integers are u64 big-endian.
fn encode_into(buf: &mut Vec<u8>, fields: &[Field<'_>]) {
    for field in fields {
        match field {
            Field::Text(s) => {
                buf.extend((s.len() as u32).to_be_bytes());
                buf.extend(s.as_bytes());
            }
            Field::Blob(b) => {
                buf.extend((b.len() as u32).to_be_bytes());
                buf.extend(*b);
            }
            Field::Number(n) => buf.extend(n.to_be_bytes()),
        }
        buf.push(0x1f);
    }
}

enum Field<'a> {
    Text(&'a str),
    Blob(&'a [u8]),
    Number(u64),
}

fn hash_fields(fields: &[Field<'_>]) -> String {
    let mut buf = Vec::new();
    encode_into(&mut buf, fields);
    hex::encode(Sha256::digest(&buf))
}

fn point_name(point: ObservationPoint) -> &'static str {
    match point {
        ObservationPoint::PreDispatch => "pre_dispatch",
        ObservationPoint::PostDispatch => "post_dispatch",
        ObservationPoint::PreEvaluate => "pre_evaluate",
        ObservationPoint::PostEvaluate => "post_evaluate",
        ObservationPoint::HaltEntry => "halt_entry",
    }
}

fn type_name(t: EvidenceType) -> &'static str {
    match t {
        EvidenceType::InstructionSnapshot => "instruction_snapshot",
        EvidenceType::ResponseSnapshot => "response_snapshot",
        EvidenceType::StateDelta => "state_delta",
        EvidenceType::DecisionTrace => "decision_trace",
        EvidenceType::HaltMarker => "halt_marker",
    }
}

fn rehash_record(record: &EvidenceRecord) -> String {
    hash_fields(&[
        Field::Text(&record.record_id),
        Field::Text(point_name(record.point)),
        Field::Text(type_name(record.evidence_type)),
        Field::Text(record.timestamp.as_str()),
        Field::Blob(&record.payload),
        Field::Text(record.prior_hash.as_str()),
    ])
}

/// Walk a chain once, re-hashing as it goes.
pub fn revalidate_chain(chain: &EvidenceChain) -> MirrorChainVerdict {
    if chain.length != chain.records.len() as u64 {
        return MirrorChainVerdict::Broken { at_index: 0 };
    }
    let mut prior = ZERO_DIGEST.to_string();
    for (i, record) in chain.records.iter().enumerate() {
        let link_ok = record.prior_hash.as_str() == prior;
        let hash_ok = rehash_record(record) == record.self_hash.as_str();
        if !(link_ok && hash_ok) {
            return MirrorChainVerdict::Broken { at_index: i };
        }
        prior = record.self_hash.as_str().to_string();
    }
    if chain.head_hash.as_str() != prior {
        return MirrorChainVerdict::Broken {
            at_index: chain.records.len().saturating_sub(1),
        };
    }
    MirrorChainVerdict::Intact
}

/// Walk an audit trail once, re-hashing as it goes.
pub fn revalidate_trail(trail: &AuditTrail) -> MirrorChainVerdict {
    if trail.length != trail.records.len() as u64 {
        return MirrorChainVerdict::Broken { at_index: 0 };
    }
    let mut prior = ZERO_DIGEST.to_string();
    for (i, record) in trail.records.iter().enumerate() {
        let rehash = hash_fields(&[
            Field::Text(&record.record_id),
            Field::Text(&record.layer),
            Field::Text(&record.event),
            Field::Text(&record.detail),
            Field::Text(record.timestamp.as_str()),
            Field::Text(record.prior_hash.as_str()),
        ]);
        if record.prior_hash.as_str() != prior || rehash != record.self_hash.as_str() {
            return MirrorChainVerdict::Broken { at_index: i };
        }
        prior = record.self_hash.as_str().to_string();
    }
    if trail.head_hash.as_str() != prior {
        return MirrorChainVerdict::Broken {
            at_index: trail.records.len().saturating_sub(1),
        };
    }
    MirrorChainVerdict::Intact
}
