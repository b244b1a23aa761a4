use tracing::debug;

use warden_types::{ActorKind, GovernanceError, WorkflowContext, WorkflowState, WorkflowTransition};

/// The transition table: (from, transition) -> (to, required actor).
///
/// `None` for the actor means any actor may take the transition. Every pair
/// absent from this table is refused, and terminal states are refused before
/// the table is consulted.
fn table(
    from: WorkflowState,
    transition: WorkflowTransition,
) -> Option<(WorkflowState, Option<ActorKind>)> {
    use WorkflowState::*;
    use WorkflowTransition::*;

    match (from, transition) {
        (Init, Validate) => Some((Validated, None)),
        (Init, Abort) => Some((Aborted, Some(ActorKind::Human))),
        (Validated, Escalate) => Some((Escalated, None)),
        (Validated, Complete) => Some((Completed, Some(ActorKind::Human))),
        (Validated, Abort) => Some((Aborted, Some(ActorKind::Human))),
        (Escalated, Approve) => Some((Approved, Some(ActorKind::Human))),
        (Escalated, Reject) => Some((Rejected, Some(ActorKind::Human))),
        (Escalated, Abort) => Some((Aborted, Some(ActorKind::Human))),
        (Approved, Complete) => Some((Completed, Some(ActorKind::Human))),
        (Approved, Abort) => Some((Aborted, Some(ActorKind::Human))),
        _ => None,
    }
}

/// The state a transition would land in, ignoring actor requirements.
///
/// Returns `None` for terminal origins and for pairs outside the table.
pub fn transition_target(
    from: WorkflowState,
    transition: WorkflowTransition,
) -> Option<WorkflowState> {
    if from.is_terminal() {
        return None;
    }
    table(from, transition).map(|(to, _)| to)
}

/// Advance a workflow. Returns the new context; the old one is untouched.
///
/// Terminal states absorb every transition. Transitions reserved for humans
/// refuse system actors. Everything else outside the table is refused with
/// "no such transition".
pub fn advance(
    ctx: &WorkflowContext,
    transition: WorkflowTransition,
) -> Result<WorkflowContext, GovernanceError> {
    if ctx.state.is_terminal() {
        return Err(GovernanceError::InvalidTransition(format!(
            "state {:?} is terminal and accepts no transitions",
            ctx.state
        )));
    }

    let Some((to, required_actor)) = table(ctx.state, transition) else {
        return Err(GovernanceError::InvalidTransition(format!(
            "no such transition: {:?} from {:?}",
            transition, ctx.state
        )));
    };

    if let Some(required) = required_actor {
        if ctx.actor != required {
            return Err(GovernanceError::UnauthorizedActor(format!(
                "{:?} from {:?} requires {required:?}, got {:?}",
                transition, ctx.state, ctx.actor
            )));
        }
    }

    debug!(from = ?ctx.state, ?transition, ?to, actor = %ctx.actor, "workflow advanced");
    Ok(WorkflowContext {
        state: to,
        actor: ctx.actor,
    })
}
