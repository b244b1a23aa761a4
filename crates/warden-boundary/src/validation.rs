use serde::{Deserialize, Serialize};
use tracing::debug;

use warden_types::{ActionKind, ActionRequest, ActorKind, TrustZone, ValidationResult};

/// Verdict of per-action validation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionVerdict {
    pub result: ValidationResult,
    pub reason: String,
    pub requires_human: bool,
}

impl ActionVerdict {
    fn allow(reason: impl Into<String>) -> Self {
        Self {
            result: ValidationResult::Allow,
            reason: reason.into(),
            requires_human: false,
        }
    }

    fn deny(reason: impl Into<String>) -> Self {
        Self {
            result: ValidationResult::Deny,
            reason: reason.into(),
            requires_human: false,
        }
    }

    fn escalate(reason: impl Into<String>) -> Self {
        Self {
            result: ValidationResult::Escalate,
            reason: reason.into(),
            requires_human: true,
        }
    }
}

/// Validate one action request. Rules apply in priority order; the first
/// match wins, and anything that matches nothing is denied.
pub fn validate_action(req: &ActionRequest) -> ActionVerdict {
    let verdict = evaluate(req);
    debug!(
        actor = %req.actor,
        action = ?req.action,
        zone = %req.zone,
        result = ?verdict.result,
        "action validated"
    );
    verdict
}

fn evaluate(req: &ActionRequest) -> ActionVerdict {
    // Human authority first: a human actor, or any action inside the human
    // zone, is allowed outright.
    if req.actor == ActorKind::Human || req.zone == TrustZone::Human {
        return ActionVerdict::allow("human actor or human zone");
    }

    if req.zone == TrustZone::External
        && matches!(
            req.action,
            ActionKind::Write | ActionKind::Delete | ActionKind::Execute
        )
    {
        return ActionVerdict::deny(format!(
            "{:?} in the external zone is denied",
            req.action
        ));
    }

    if req.zone == TrustZone::Governance && req.action == ActionKind::Write {
        return ActionVerdict::deny("writes to the governance zone are denied");
    }

    if req.actor == ActorKind::System
        && matches!(
            req.action,
            ActionKind::Write | ActionKind::Delete | ActionKind::Execute | ActionKind::Configure
        )
    {
        return ActionVerdict::escalate(format!(
            "system actor requesting {:?} requires a human",
            req.action
        ));
    }

    if req.zone == TrustZone::Governance && req.action == ActionKind::Configure {
        return ActionVerdict::escalate("configuring the governance zone requires a human");
    }

    ActionVerdict::allow("no rule objects to this request")
}
