use serde::{Deserialize, Serialize};

use warden_types::{
    ActorKind, DecisionContext, FinalDecision, TrustZone, ValidationResult, WorkflowState,
    WorkflowTransition,
};

/// Mirror view of one attempted transition.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MirrorTransition {
    Advances(WorkflowState),
    Refused,
}

/// The lifecycle table, restated as data: (from, transition, to, human only).
const LIFECYCLE: &[(WorkflowState, WorkflowTransition, WorkflowState, bool)] = &[
    (WorkflowState::Init, WorkflowTransition::Validate, WorkflowState::Validated, false),
    (WorkflowState::Init, WorkflowTransition::Abort, WorkflowState::Aborted, true),
    (WorkflowState::Validated, WorkflowTransition::Escalate, WorkflowState::Escalated, false),
    (WorkflowState::Validated, WorkflowTransition::Complete, WorkflowState::Completed, true),
    (WorkflowState::Validated, WorkflowTransition::Abort, WorkflowState::Aborted, true),
    (WorkflowState::Escalated, WorkflowTransition::Approve, WorkflowState::Approved, true),
    (WorkflowState::Escalated, WorkflowTransition::Reject, WorkflowState::Rejected, true),
    (WorkflowState::Escalated, WorkflowTransition::Abort, WorkflowState::Aborted, true),
    (WorkflowState::Approved, WorkflowTransition::Complete, WorkflowState::Completed, true),
    (WorkflowState::Approved, WorkflowTransition::Abort, WorkflowState::Aborted, true),
];

/// Re-derive one transition attempt from the table scan.
pub fn retransition(
    from: WorkflowState,
    transition: WorkflowTransition,
    actor: ActorKind,
) -> MirrorTransition {
    if from.is_terminal() {
        return MirrorTransition::Refused;
    }
    LIFECYCLE
        .iter()
        .find(|(f, t, _, _)| *f == from && *t == transition)
        .map(|(_, _, to, human_only)| {
            if *human_only && actor != ActorKind::Human {
                MirrorTransition::Refused
            } else {
                MirrorTransition::Advances(*to)
            }
        })
        .unwrap_or(MirrorTransition::Refused)
}

/// Re-derive the aggregate decision as a single tuple match.
pub fn reaggregate(ctx: &DecisionContext) -> FinalDecision {
    match (
        ctx.state.is_terminal(),
        ctx.transition_allowed,
        ctx.actor,
        ctx.validation,
        ctx.zone,
    ) {
        (true, _, _, _, _) => FinalDecision::Deny,
        (_, false, _, _, _) => FinalDecision::Deny,
        (_, _, ActorKind::Human, ValidationResult::Allow, _) => FinalDecision::Allow,
        (_, _, _, ValidationResult::Escalate, _) => FinalDecision::Escalate,
        (_, _, _, ValidationResult::Deny, _) => FinalDecision::Deny,
        (_, _, _, _, TrustZone::External) => FinalDecision::Escalate,
        _ => FinalDecision::Allow,
    }
}
