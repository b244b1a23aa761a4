use serde::{Deserialize, Serialize};
use tracing::warn;

use warden_types::{
    AuthorizationStatus, Digest, ExecutorIdentity, InstructionEnvelope, ObservationContext,
};

use crate::envelope::verify_envelope;

/// Everything the readiness gate inspects, gathered by the caller.
#[derive(Clone, Debug)]
pub struct ReadinessInputs<'a> {
    pub executor: Option<ExecutorIdentity>,
    pub envelope: Option<&'a InstructionEnvelope>,
    pub expected_hash: Option<&'a Digest>,
    pub observation: Option<&'a ObservationContext>,
    pub authorization: Option<AuthorizationStatus>,
    pub authorization_revoked: bool,
    pub execution_pending: bool,
}

/// Verdict of the pre-execution gate.
///
/// `NotReady` means something is missing; `Blocked` means something present
/// is wrong. Both stop the handoff; they differ in what the caller should
/// do about it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExecutionReadiness {
    Ready,
    NotReady { reason: String },
    Blocked { reason: String },
}

/// The conjunctive readiness gate. Every condition must hold; the default
/// for anything else is `Blocked`.
pub fn execution_readiness(inputs: &ReadinessInputs<'_>) -> ExecutionReadiness {
    let verdict = evaluate(inputs);
    if !matches!(verdict, ExecutionReadiness::Ready) {
        warn!(?verdict, "execution gate closed");
    }
    verdict
}

fn evaluate(inputs: &ReadinessInputs<'_>) -> ExecutionReadiness {
    // Missing pieces first.
    let Some(executor) = inputs.executor else {
        return not_ready("no executor identity");
    };
    let Some(envelope) = inputs.envelope else {
        return not_ready("no instruction envelope");
    };
    let Some(expected_hash) = inputs.expected_hash else {
        return not_ready("no expected envelope hash");
    };
    let Some(observation) = inputs.observation else {
        return not_ready("no observation context");
    };
    let Some(authorization) = inputs.authorization else {
        return not_ready("no authorization");
    };

    // Then violations.
    if executor != ExecutorIdentity::Verified {
        return blocked(format!("executor identity is {executor:?}"));
    }
    if verify_envelope(envelope).is_err() {
        return blocked("envelope seal does not verify".into());
    }
    if &envelope.envelope_hash != expected_hash {
        return blocked("envelope hash does not match the expected hash".into());
    }
    if observation.halted {
        return blocked("observation context is halted".into());
    }
    if inputs.authorization_revoked {
        return blocked("authorization is revoked".into());
    }
    if authorization != AuthorizationStatus::Authorized {
        return blocked(format!("authorization status is {authorization:?}"));
    }
    if inputs.execution_pending {
        return blocked("a prior execution is still pending".into());
    }

    ExecutionReadiness::Ready
}

fn not_ready(reason: &str) -> ExecutionReadiness {
    ExecutionReadiness::NotReady {
        reason: reason.to_string(),
    }
}

fn blocked(reason: String) -> ExecutionReadiness {
    ExecutionReadiness::Blocked { reason }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::envelope::seal_envelope;
    use warden_evidence::attach_observer;
    use warden_types::{BrowserAction, Timestamp};

    fn envelope() -> InstructionEnvelope {
        seal_envelope(
            InstructionEnvelope::builder()
                .instruction_id("ins-1")
                .executor_id("exec-1")
                .command(BrowserAction::Click)
                .target("https://example.test")
                .timeout_ms(5_000),
        )
        .unwrap()
    }

    fn observation(hash: Digest) -> ObservationContext {
        attach_observer(
            "loop-1",
            "exec-1",
            hash,
            Timestamp::parse("2026-03-01T00:00:00Z").unwrap(),
        )
    }

    fn ready_inputs<'a>(
        envelope: &'a InstructionEnvelope,
        observation: &'a ObservationContext,
    ) -> ReadinessInputs<'a> {
        ReadinessInputs {
            executor: Some(ExecutorIdentity::Verified),
            envelope: Some(envelope),
            expected_hash: Some(&envelope.envelope_hash),
            observation: Some(observation),
            authorization: Some(AuthorizationStatus::Authorized),
            authorization_revoked: false,
            execution_pending: false,
        }
    }

    #[test]
    fn all_conditions_met_is_ready() {
        let env = envelope();
        let obs = observation(env.envelope_hash.clone());
        assert_eq!(
            execution_readiness(&ready_inputs(&env, &obs)),
            ExecutionReadiness::Ready
        );
    }

    #[test]
    fn missing_pieces_are_not_ready() {
        let env = envelope();
        let obs = observation(env.envelope_hash.clone());

        let mut inputs = ready_inputs(&env, &obs);
        inputs.executor = None;
        assert!(matches!(
            execution_readiness(&inputs),
            ExecutionReadiness::NotReady { .. }
        ));

        let mut inputs = ready_inputs(&env, &obs);
        inputs.authorization = None;
        assert!(matches!(
            execution_readiness(&inputs),
            ExecutionReadiness::NotReady { .. }
        ));
    }

    #[test]
    fn unverified_executor_blocks() {
        let env = envelope();
        let obs = observation(env.envelope_hash.clone());
        let mut inputs = ready_inputs(&env, &obs);
        inputs.executor = Some(ExecutorIdentity::Unverified);
        assert!(matches!(
            execution_readiness(&inputs),
            ExecutionReadiness::Blocked { .. }
        ));
    }

    #[test]
    fn wrong_expected_hash_blocks() {
        let env = envelope();
        let obs = observation(env.envelope_hash.clone());
        let other = Digest::parse(&"cd".repeat(32)).unwrap();
        let mut inputs = ready_inputs(&env, &obs);
        inputs.expected_hash = Some(&other);
        assert!(matches!(
            execution_readiness(&inputs),
            ExecutionReadiness::Blocked { .. }
        ));
    }

    #[test]
    fn halted_observation_blocks() {
        let env = envelope();
        let halted = attach_observer(
            "",
            "",
            Digest::zero(),
            Timestamp::parse("2026-03-01T00:00:00Z").unwrap(),
        );
        let mut inputs = ready_inputs(&env, &halted);
        inputs.observation = Some(&halted);
        assert!(matches!(
            execution_readiness(&inputs),
            ExecutionReadiness::Blocked { .. }
        ));
    }

    #[test]
    fn revoked_authorization_blocks() {
        let env = envelope();
        let obs = observation(env.envelope_hash.clone());
        let mut inputs = ready_inputs(&env, &obs);
        inputs.authorization_revoked = true;
        assert!(matches!(
            execution_readiness(&inputs),
            ExecutionReadiness::Blocked { .. }
        ));
    }

    #[test]
    fn pending_execution_blocks() {
        let env = envelope();
        let obs = observation(env.envelope_hash.clone());
        let mut inputs = ready_inputs(&env, &obs);
        inputs.execution_pending = true;
        assert!(matches!(
            execution_readiness(&inputs),
            ExecutionReadiness::Blocked { .. }
        ));
    }
}
