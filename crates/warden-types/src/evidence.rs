use serde::{Deserialize, Serialize};

use crate::digest::Digest;
use crate::error::GovernanceError;
use crate::timestamp::Timestamp;

/// Where in the dispatch lifecycle an observation was taken.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObservationPoint {
    PreDispatch,
    PostDispatch,
    PreEvaluate,
    PostEvaluate,
    HaltEntry,
}

/// What kind of evidence a record carries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvidenceType {
    InstructionSnapshot,
    ResponseSnapshot,
    StateDelta,
    DecisionTrace,
    HaltMarker,
}

/// Conditions that stop an observed execution.
///
/// The observation layer is passive: a stop verdict is advice to the caller,
/// never an act of the kernel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StopCondition {
    MissingAuthorization,
    EnvelopeHashMismatch,
    EvidenceChainBroken,
    HumanAbort,
    AmbiguousIntent,
    ExecutorUnverified,
    ResponseMalformed,
    TimeoutExceeded,
    ScopeExceeded,
    RevokedIntent,
}

/// Verdict of a stop check. Default is `Halt`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StopVerdict {
    Continue,
    Halt,
}

/// One appended observation. Immutable once captured.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvidenceRecord {
    pub record_id: String,
    pub point: ObservationPoint,
    pub evidence_type: EvidenceType,
    pub timestamp: Timestamp,
    /// Opaque payload bytes. The kernel hashes them and never parses them.
    #[serde(with = "serde_bytes_base16")]
    pub payload: Vec<u8>,
    pub prior_hash: Digest,
    pub self_hash: Digest,
}

/// Append-only, hash-linked sequence of observations for one session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvidenceChain {
    pub session_id: String,
    pub records: Vec<EvidenceRecord>,
    pub head_hash: Digest,
    pub length: u64,
}

impl EvidenceChain {
    /// An empty chain for a session. Head is the zero digest.
    pub fn empty(session_id: impl Into<String>) -> Self {
        Self {
            session_id: session_id.into(),
            records: Vec::new(),
            head_hash: Digest::zero(),
            length: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn record(&self, record_id: &str) -> Option<&EvidenceRecord> {
        self.records.iter().find(|r| r.record_id == record_id)
    }
}

/// One independent origin of evidence, identified by a caller-computed
/// deterministic fingerprint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvidenceSource {
    pub origin: String,
    pub fingerprint: String,
}

/// A read-only collection of evidence presented for consistency analysis.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvidenceBundle {
    pub sources: Vec<EvidenceSource>,
    /// Reproduction steps, in order.
    pub steps: Vec<String>,
    pub deterministic: bool,
    pub external_dependencies: bool,
}

impl EvidenceBundle {
    pub fn builder() -> EvidenceBundleBuilder {
        EvidenceBundleBuilder::default()
    }
}

/// Builder for [`EvidenceBundle`]. A bundle with zero sources is legal.
#[derive(Debug, Default)]
pub struct EvidenceBundleBuilder {
    sources: Vec<EvidenceSource>,
    steps: Vec<String>,
    deterministic: bool,
    external_dependencies: bool,
}

impl EvidenceBundleBuilder {
    pub fn source(mut self, origin: impl Into<String>, fingerprint: impl Into<String>) -> Self {
        self.sources.push(EvidenceSource {
            origin: origin.into(),
            fingerprint: fingerprint.into(),
        });
        self
    }

    pub fn step(mut self, step: impl Into<String>) -> Self {
        self.steps.push(step.into());
        self
    }

    pub fn deterministic(mut self, deterministic: bool) -> Self {
        self.deterministic = deterministic;
        self
    }

    pub fn external_dependencies(mut self, external: bool) -> Self {
        self.external_dependencies = external;
        self
    }

    pub fn build(self) -> EvidenceBundle {
        EvidenceBundle {
            sources: self.sources,
            steps: self.steps,
            deterministic: self.deterministic,
            external_dependencies: self.external_dependencies,
        }
    }
}

/// Consistency state of an evidence bundle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvidenceState {
    Unverified,
    Raw,
    Consistent,
    Inconsistent,
    /// Only ever presented by callers whose evidence was replayed elsewhere;
    /// classification never produces this state.
    Replayable,
}

/// The observer attached to one execution loop.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObservationContext {
    pub loop_id: String,
    pub executor_id: String,
    pub envelope_hash: Digest,
    pub attached_at: Timestamp,
    pub halted: bool,
}

impl ObservationContext {
    pub fn is_live(&self) -> bool {
        !self.halted
    }
}

impl StopCondition {
    /// Exact-name parse. Unknown names are rejected.
    pub fn parse(input: &str) -> Result<Self, GovernanceError> {
        match input {
            "missing_authorization" => Ok(StopCondition::MissingAuthorization),
            "envelope_hash_mismatch" => Ok(StopCondition::EnvelopeHashMismatch),
            "evidence_chain_broken" => Ok(StopCondition::EvidenceChainBroken),
            "human_abort" => Ok(StopCondition::HumanAbort),
            "ambiguous_intent" => Ok(StopCondition::AmbiguousIntent),
            "executor_unverified" => Ok(StopCondition::ExecutorUnverified),
            "response_malformed" => Ok(StopCondition::ResponseMalformed),
            "timeout_exceeded" => Ok(StopCondition::TimeoutExceeded),
            "scope_exceeded" => Ok(StopCondition::ScopeExceeded),
            "revoked_intent" => Ok(StopCondition::RevokedIntent),
            other => Err(GovernanceError::UnknownInput(format!(
                "no such stop condition: {other}"
            ))),
        }
    }
}

/// Hex-encode payload bytes in JSON so audit exports stay printable.
mod serde_bytes_base16 {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8], ser: S) -> Result<S::Ok, S::Error> {
        let mut out = String::with_capacity(bytes.len() * 2);
        for b in bytes {
            out.push_str(&format!("{b:02x}"));
        }
        ser.serialize_str(&out)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(de: D) -> Result<Vec<u8>, D::Error> {
        let s = String::deserialize(de)?;
        if s.len() % 2 != 0 {
            return Err(serde::de::Error::custom("odd-length hex payload"));
        }
        (0..s.len())
            .step_by(2)
            .map(|i| {
                u8::from_str_radix(&s[i..i + 2], 16)
                    .map_err(|_| serde::de::Error::custom("invalid hex payload"))
            })
            .collect()
    }
}
