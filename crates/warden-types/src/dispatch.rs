use serde::{Deserialize, Serialize};

use crate::digest::Digest;
use crate::error::GovernanceError;
use crate::verdict::BrowserAction;

/// Verification status of an executor identity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExecutorIdentity {
    Unknown,
    Unverified,
    Verified,
    Revoked,
}

/// A sealed instruction for one executor dispatch.
///
/// The envelope hash covers every field; once sealed the envelope cannot be
/// altered without the mismatch being detectable.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstructionEnvelope {
    pub instruction_id: String,
    pub executor_id: String,
    pub command: BrowserAction,
    pub target: String,
    pub timeout_ms: u64,
    pub envelope_hash: Digest,
}

/// Builder collecting envelope fields before sealing.
///
/// Sealing (hash computation) lives in the dispatch layer; the builder only
/// enforces field completeness.
#[derive(Debug, Default)]
pub struct InstructionEnvelopeBuilder {
    instruction_id: Option<String>,
    executor_id: Option<String>,
    command: Option<BrowserAction>,
    target: Option<String>,
    timeout_ms: Option<u64>,
}

impl InstructionEnvelopeBuilder {
    pub fn instruction_id(mut self, id: impl Into<String>) -> Self {
        self.instruction_id = Some(id.into());
        self
    }

    pub fn executor_id(mut self, id: impl Into<String>) -> Self {
        self.executor_id = Some(id.into());
        self
    }

    pub fn command(mut self, command: BrowserAction) -> Self {
        self.command = Some(command);
        self
    }

    pub fn target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    pub fn timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = Some(timeout_ms);
        self
    }

    /// Field-complete check; returns the parts for the dispatch layer to seal.
    pub fn parts(self) -> Result<(String, String, BrowserAction, String, u64), GovernanceError> {
        let instruction_id = self
            .instruction_id
            .filter(|s| !s.is_empty())
            .ok_or_else(|| GovernanceError::MissingField("instruction_id".into()))?;
        let executor_id = self
            .executor_id
            .filter(|s| !s.is_empty())
            .ok_or_else(|| GovernanceError::MissingField("executor_id".into()))?;
        let command = self
            .command
            .ok_or_else(|| GovernanceError::MissingField("command".into()))?;
        let target = self
            .target
            .filter(|s| !s.is_empty())
            .ok_or_else(|| GovernanceError::MissingField("target".into()))?;
        let timeout_ms = self
            .timeout_ms
            .ok_or_else(|| GovernanceError::MissingField("timeout_ms".into()))?;
        Ok((instruction_id, executor_id, command, target, timeout_ms))
    }
}

impl InstructionEnvelope {
    pub fn builder() -> InstructionEnvelopeBuilder {
        InstructionEnvelopeBuilder::default()
    }
}

/// What an executor claims happened. A claim is data, never truth.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportedStatus {
    Success,
    Failure,
    Timeout,
    Partial,
    Malformed,
}

/// Raw, untrusted response from one dispatch.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutorRawResponse {
    pub executor_id: String,
    pub instruction_hash: Digest,
    /// Opaque; the kernel never parses it.
    pub payload: Vec<u8>,
    pub reported: ReportedStatus,
}

/// Kernel-side judgement of a raw response.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NormalizedDecision {
    Accept,
    Reject,
    Escalate,
}

/// Normalized view of an executor response.
///
/// Confidence is strictly below 1.0; only a human decision can raise a
/// result to certainty, and that happens outside this type.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NormalizedResult {
    pub decision: NormalizedDecision,
    pub reason: String,
    pub confidence: f64,
}

/// States of the execution loop. The kernel defines this machine and never
/// runs it; stepping is a pure function for external executors to consult.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoopState {
    Initialized,
    Ready,
    Dispatched,
    AwaitingResponse,
    Halted,
}

/// Transitions of the execution loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoopTransition {
    Init,
    Dispatch,
    Receive,
    Halt,
}
