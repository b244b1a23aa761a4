use sha2::{Digest as _, Sha256};

use warden_types::{EvidenceType, ObservationPoint};

/// Field separator between encoded fields.
const FIELD_SEPARATOR: u8 = 0x1f;

/// The single canonical byte encoding for everything this workspace hashes.
///
/// Fields are appended in declared order. Strings are UTF-8 with a u32
/// big-endian length prefix; byte payloads likewise; integers are u64
/// big-endian. Every field is terminated by a `0x1f` separator so that no
/// two distinct field sequences can concatenate to the same bytes.
#[derive(Debug, Default)]
pub struct CanonicalWriter {
    buf: Vec<u8>,
}

impl CanonicalWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn str_field(mut self, value: &str) -> Self {
        let bytes = value.as_bytes();
        self.buf.extend_from_slice(&(bytes.len() as u32).to_be_bytes());
        self.buf.extend_from_slice(bytes);
        self.buf.push(FIELD_SEPARATOR);
        self
    }

    pub fn bytes_field(mut self, value: &[u8]) -> Self {
        self.buf.extend_from_slice(&(value.len() as u32).to_be_bytes());
        self.buf.extend_from_slice(value);
        self.buf.push(FIELD_SEPARATOR);
        self
    }

    pub fn u64_field(mut self, value: u64) -> Self {
        self.buf.extend_from_slice(&value.to_be_bytes());
        self.buf.push(FIELD_SEPARATOR);
        self
    }

    pub fn finish(self) -> Vec<u8> {
        self.buf
    }

    /// Hash the accumulated encoding.
    pub fn digest_hex(self) -> String {
        sha256_hex(&self.buf)
    }
}

/// SHA-256 over raw bytes, as 64 lowercase hex characters.
pub fn sha256_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hex::encode(hasher.finalize())
}

/// Canonical token of an observation point.
pub fn point_token(point: ObservationPoint) -> &'static str {
    match point {
        ObservationPoint::PreDispatch => "pre_dispatch",
        ObservationPoint::PostDispatch => "post_dispatch",
        ObservationPoint::PreEvaluate => "pre_evaluate",
        ObservationPoint::PostEvaluate => "post_evaluate",
        ObservationPoint::HaltEntry => "halt_entry",
    }
}

/// Canonical token of an evidence type.
pub fn evidence_token(evidence_type: EvidenceType) -> &'static str {
    match evidence_type {
        EvidenceType::InstructionSnapshot => "instruction_snapshot",
        EvidenceType::ResponseSnapshot => "response_snapshot",
        EvidenceType::StateDelta => "state_delta",
        EvidenceType::DecisionTrace => "decision_trace",
        EvidenceType::HaltMarker => "halt_marker",
    }
}
