use serde::{Deserialize, Serialize};

use crate::actor::ActorKind;
use crate::error::GovernanceError;

/// Lifecycle stages of an execution request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkflowState {
    Init,
    Validated,
    Escalated,
    Approved,
    Completed,
    Aborted,
    Rejected,
}

impl WorkflowState {
    /// Terminal states accept no transitions, from anyone.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            WorkflowState::Completed | WorkflowState::Aborted | WorkflowState::Rejected
        )
    }
}

/// Transitions of the execution lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkflowTransition {
    Validate,
    Approve,
    Reject,
    Complete,
    Abort,
    Escalate,
}

/// The workflow position of a single execution request.
///
/// Contexts are immutable: advancing the workflow produces a new context.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowContext {
    pub state: WorkflowState,
    pub actor: ActorKind,
}

impl WorkflowContext {
    /// A fresh workflow at `Init`.
    pub fn start(actor: ActorKind) -> Self {
        Self {
            state: WorkflowState::Init,
            actor,
        }
    }

    /// The same workflow observed by a different actor.
    pub fn as_actor(&self, actor: ActorKind) -> Self {
        Self {
            state: self.state,
            actor,
        }
    }
}

/// Everything the final-decision aggregator needs about one request.
///
/// Input completeness is enforced by construction: every field is required.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionContext {
    pub validation: crate::verdict::ValidationResult,
    pub state: WorkflowState,
    /// Whether the workflow transition backing this request was permitted.
    pub transition_allowed: bool,
    pub actor: ActorKind,
    pub zone: crate::zone::TrustZone,
}

impl WorkflowState {
    /// Exact-name parse. Unknown names are rejected.
    pub fn parse(input: &str) -> Result<Self, GovernanceError> {
        match input {
            "init" => Ok(WorkflowState::Init),
            "validated" => Ok(WorkflowState::Validated),
            "escalated" => Ok(WorkflowState::Escalated),
            "approved" => Ok(WorkflowState::Approved),
            "completed" => Ok(WorkflowState::Completed),
            "aborted" => Ok(WorkflowState::Aborted),
            "rejected" => Ok(WorkflowState::Rejected),
            other => Err(GovernanceError::UnknownInput(format!(
                "no such workflow state: {other}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exactly_three_states_are_terminal() {
        let terminal: Vec<_> = [
            WorkflowState::Init,
            WorkflowState::Validated,
            WorkflowState::Escalated,
            WorkflowState::Approved,
            WorkflowState::Completed,
            WorkflowState::Aborted,
            WorkflowState::Rejected,
        ]
        .into_iter()
        .filter(WorkflowState::is_terminal)
        .collect();
        assert_eq!(
            terminal,
            vec![
                WorkflowState::Completed,
                WorkflowState::Aborted,
                WorkflowState::Rejected
            ]
        );
    }

    #[test]
    fn start_begins_at_init() {
        let ctx = WorkflowContext::start(ActorKind::System);
        assert_eq!(ctx.state, WorkflowState::Init);
    }
}
