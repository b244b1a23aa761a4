use serde::{Deserialize, Serialize};

use warden_types::{
    AuthorizationStatus, Digest, ExecutorIdentity, LoopState, LoopTransition, NormalizedDecision,
    ReportedStatus,
};

/// Re-derive the handshake as one boolean expression.
pub fn rerun_handshake(
    identity: Option<ExecutorIdentity>,
    expected_hash: &Digest,
    presented_hash: &Digest,
) -> bool {
    identity == Some(ExecutorIdentity::Verified) && expected_hash == presented_hash
}

/// The loop table restated as data; pairs off the table halt.
const LOOP_TABLE: &[(LoopState, LoopTransition, LoopState)] = &[
    (LoopState::Initialized, LoopTransition::Init, LoopState::Ready),
    (LoopState::Ready, LoopTransition::Dispatch, LoopState::Dispatched),
    (LoopState::Dispatched, LoopTransition::Receive, LoopState::AwaitingResponse),
    (LoopState::AwaitingResponse, LoopTransition::Dispatch, LoopState::Dispatched),
];

/// Re-step the loop machine from the table.
pub fn restep_loop(state: LoopState, transition: LoopTransition) -> LoopState {
    if state == LoopState::Halted || transition == LoopTransition::Halt {
        return LoopState::Halted;
    }
    LOOP_TABLE
        .iter()
        .find(|(s, t, _)| *s == state && *t == transition)
        .map(|(_, _, next)| *next)
        .unwrap_or(LoopState::Halted)
}

/// The normalization table restated as data.
const NORMALIZATION: &[(ReportedStatus, NormalizedDecision, f64)] = &[
    (ReportedStatus::Success, NormalizedDecision::Accept, 0.85),
    (ReportedStatus::Failure, NormalizedDecision::Reject, 0.30),
    (ReportedStatus::Timeout, NormalizedDecision::Reject, 0.20),
    (ReportedStatus::Partial, NormalizedDecision::Escalate, 0.50),
    (ReportedStatus::Malformed, NormalizedDecision::Reject, 0.10),
];

/// Re-derive the normalized decision and confidence for a reported status.
pub fn renormalize(reported: ReportedStatus) -> (NormalizedDecision, f64) {
    NORMALIZATION
        .iter()
        .find(|(r, _, _)| *r == reported)
        .map(|(_, d, c)| (*d, *c))
        .unwrap_or((NormalizedDecision::Reject, 0.0))
}

/// Mirror restatement of the readiness inputs, as plain facts.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MirrorReadinessInputs {
    pub executor: Option<ExecutorIdentity>,
    pub envelope_present: bool,
    pub expected_hash_present: bool,
    pub envelope_hash_matches: bool,
    pub observation_present: bool,
    pub observation_halted: bool,
    pub authorization: Option<AuthorizationStatus>,
    pub authorization_revoked: bool,
    pub execution_pending: bool,
}

/// Mirror verdict of the readiness gate.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MirrorReadiness {
    Ready,
    NotReady,
    Blocked,
}

/// Re-derive the gate: missing pieces are not ready, wrong pieces are
/// blocked, and only the full conjunction is ready.
pub fn rereadiness(inputs: &MirrorReadinessInputs) -> MirrorReadiness {
    let missing = inputs.executor.is_none()
        || !inputs.envelope_present
        || !inputs.expected_hash_present
        || !inputs.observation_present
        || inputs.authorization.is_none();
    if missing {
        return MirrorReadiness::NotReady;
    }

    let sound = inputs.executor == Some(ExecutorIdentity::Verified)
        && inputs.envelope_hash_matches
        && !inputs.observation_halted
        && !inputs.authorization_revoked
        && inputs.authorization == Some(AuthorizationStatus::Authorized)
        && !inputs.execution_pending;
    if sound {
        MirrorReadiness::Ready
    } else {
        MirrorReadiness::Blocked
    }
}
