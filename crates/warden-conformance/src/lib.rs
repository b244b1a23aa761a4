//! Conformance harness for the Warden kernel.
//!
//! Helpers that wire the pipeline end-to-end so the scenario and property
//! suites under `tests/` stay readable. Nothing here adds semantics; every
//! decision is made by the layer crates.

#![deny(unsafe_code)]

use warden_boundary::validate_action;
use warden_types::{
    ActionKind, ActionRequest, ActorKind, DecisionContext, FinalDecision, TrustZone,
    WorkflowState,
};
use warden_workflow::aggregate;

/// Run one request through action validation and aggregation.
pub fn decide(
    actor: ActorKind,
    action: ActionKind,
    zone: TrustZone,
    state: WorkflowState,
) -> FinalDecision {
    let request = ActionRequest::new(actor, action, zone, "conformance-target");
    let verdict = validate_action(&request);
    let ctx = DecisionContext {
        validation: verdict.result,
        state,
        transition_allowed: true,
        actor,
        zone,
    };
    aggregate(&ctx).decision
}

/// Every actor, for exhaustive sweeps.
pub const ACTORS: [ActorKind; 2] = [ActorKind::Human, ActorKind::System];

/// Every action kind, for exhaustive sweeps.
pub const ACTIONS: [ActionKind; 5] = [
    ActionKind::Read,
    ActionKind::Write,
    ActionKind::Delete,
    ActionKind::Execute,
    ActionKind::Configure,
];

/// Every trust zone, for exhaustive sweeps.
pub const ZONES: [TrustZone; 4] = [
    TrustZone::Human,
    TrustZone::Governance,
    TrustZone::System,
    TrustZone::External,
];

/// Every workflow state, for exhaustive sweeps.
pub const STATES: [WorkflowState; 7] = [
    WorkflowState::Init,
    WorkflowState::Validated,
    WorkflowState::Escalated,
    WorkflowState::Approved,
    WorkflowState::Completed,
    WorkflowState::Aborted,
    WorkflowState::Rejected,
];
