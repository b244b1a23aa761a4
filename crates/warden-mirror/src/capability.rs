use serde::{Deserialize, Serialize};

use warden_types::{BrowserAction, CapabilityDecision, RiskTier, WorkflowState};

/// Mirror verdict for a governed action.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MirrorCapabilityVerdict {
    pub decision: CapabilityDecision,
    pub tier: RiskTier,
}

/// The tier table restated as data.
const TIERS: &[(BrowserAction, RiskTier)] = &[
    (BrowserAction::Click, RiskTier::Low),
    (BrowserAction::Read, RiskTier::Low),
    (BrowserAction::Scroll, RiskTier::Low),
    (BrowserAction::Extract, RiskTier::Low),
    (BrowserAction::Screenshot, RiskTier::Low),
    (BrowserAction::Navigate, RiskTier::Medium),
    (BrowserAction::FillInput, RiskTier::Medium),
    (BrowserAction::SubmitForm, RiskTier::High),
    (BrowserAction::FileUpload, RiskTier::Forbidden),
    (BrowserAction::ScriptExecute, RiskTier::Forbidden),
];

fn tier_of(action: BrowserAction) -> RiskTier {
    TIERS
        .iter()
        .find(|(a, _)| *a == action)
        .map(|(_, t)| *t)
        .unwrap_or(RiskTier::Forbidden)
}

/// Re-derive a capability decision from the tier table and workflow state.
pub fn regovern_action(
    action: BrowserAction,
    state: WorkflowState,
    attempting: bool,
) -> MirrorCapabilityVerdict {
    let tier = tier_of(action);
    let decision = match () {
        _ if state.is_terminal() => CapabilityDecision::Denied,
        _ if tier == RiskTier::Forbidden => CapabilityDecision::Denied,
        _ if state == WorkflowState::Escalated => CapabilityDecision::HumanRequired,
        _ if !attempting => CapabilityDecision::Denied,
        _ if tier == RiskTier::High => CapabilityDecision::HumanRequired,
        _ => CapabilityDecision::Allowed,
    };
    MirrorCapabilityVerdict { decision, tier }
}
