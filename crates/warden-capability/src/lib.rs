//! Capability governance: risk classification of executor actions.
//!
//! Each browser/native action carries a fixed risk tier; the governance
//! table combines that tier with the workflow position. Forbidden actions
//! never pass, high-risk actions always pull a human in, and any state the
//! table does not name is denied.

#![deny(unsafe_code)]

use serde::{Deserialize, Serialize};
use tracing::debug;

use warden_types::{BrowserAction, CapabilityDecision, RiskTier, WorkflowState};

/// Verdict of capability governance for one attempted action.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapabilityVerdict {
    pub decision: CapabilityDecision,
    pub tier: RiskTier,
    pub reason: String,
}

/// The fixed risk tier of each action.
pub fn risk_tier(action: BrowserAction) -> RiskTier {
    match action {
        BrowserAction::Click
        | BrowserAction::Read
        | BrowserAction::Scroll
        | BrowserAction::Extract
        | BrowserAction::Screenshot => RiskTier::Low,
        BrowserAction::Navigate | BrowserAction::FillInput => RiskTier::Medium,
        BrowserAction::SubmitForm => RiskTier::High,
        BrowserAction::FileUpload | BrowserAction::ScriptExecute => RiskTier::Forbidden,
    }
}

/// Govern one action attempt against the current workflow position.
///
/// Workflow truth comes first: terminal states deny and an escalated
/// workflow keeps the human in charge regardless of tier. After that the
/// tier decides. An attempt flag that is off means nothing is being
/// attempted, and nothing is exactly what gets allowed.
pub fn govern_action(
    action: BrowserAction,
    state: WorkflowState,
    attempting: bool,
) -> CapabilityVerdict {
    let tier = risk_tier(action);
    let verdict = decide(action, tier, state, attempting);
    debug!(?action, ?tier, ?state, attempting, decision = ?verdict.decision, "capability governed");
    verdict
}

fn decide(
    action: BrowserAction,
    tier: RiskTier,
    state: WorkflowState,
    attempting: bool,
) -> CapabilityVerdict {
    if state.is_terminal() {
        return CapabilityVerdict {
            decision: CapabilityDecision::Denied,
            tier,
            reason: format!("workflow state {state:?} is terminal"),
        };
    }
    if tier == RiskTier::Forbidden {
        return CapabilityVerdict {
            decision: CapabilityDecision::Denied,
            tier,
            reason: format!("{action:?} is forbidden"),
        };
    }
    if state == WorkflowState::Escalated {
        return CapabilityVerdict {
            decision: CapabilityDecision::HumanRequired,
            tier,
            reason: "workflow is escalated; a human decides".into(),
        };
    }
    if !attempting {
        return CapabilityVerdict {
            decision: CapabilityDecision::Denied,
            tier,
            reason: "no action is being attempted".into(),
        };
    }
    match tier {
        RiskTier::High => CapabilityVerdict {
            decision: CapabilityDecision::HumanRequired,
            tier,
            reason: format!("{action:?} is high risk"),
        },
        RiskTier::Low | RiskTier::Medium => CapabilityVerdict {
            decision: CapabilityDecision::Allowed,
            tier,
            reason: format!("{action:?} is within tier {tier:?}"),
        },
        RiskTier::Forbidden => CapabilityVerdict {
            decision: CapabilityDecision::Denied,
            tier,
            reason: format!("{action:?} is forbidden"),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiers_are_fixed() {
        assert_eq!(risk_tier(BrowserAction::Click), RiskTier::Low);
        assert_eq!(risk_tier(BrowserAction::Screenshot), RiskTier::Low);
        assert_eq!(risk_tier(BrowserAction::Navigate), RiskTier::Medium);
        assert_eq!(risk_tier(BrowserAction::FillInput), RiskTier::Medium);
        assert_eq!(risk_tier(BrowserAction::SubmitForm), RiskTier::High);
        assert_eq!(risk_tier(BrowserAction::FileUpload), RiskTier::Forbidden);
        assert_eq!(risk_tier(BrowserAction::ScriptExecute), RiskTier::Forbidden);
    }

    #[test]
    fn forbidden_actions_are_denied_anywhere() {
        let v = govern_action(BrowserAction::ScriptExecute, WorkflowState::Approved, true);
        assert_eq!(v.decision, CapabilityDecision::Denied);
    }

    #[test]
    fn terminal_state_denies_even_low_risk() {
        let v = govern_action(BrowserAction::Read, WorkflowState::Completed, true);
        assert_eq!(v.decision, CapabilityDecision::Denied);
    }

    #[test]
    fn escalated_state_requires_a_human() {
        let v = govern_action(BrowserAction::Click, WorkflowState::Escalated, true);
        assert_eq!(v.decision, CapabilityDecision::HumanRequired);
    }

    #[test]
    fn high_risk_attempt_requires_a_human() {
        let v = govern_action(BrowserAction::SubmitForm, WorkflowState::Approved, true);
        assert_eq!(v.decision, CapabilityDecision::HumanRequired);
    }

    #[test]
    fn low_and_medium_attempts_are_allowed() {
        for action in [BrowserAction::Scroll, BrowserAction::Navigate] {
            let v = govern_action(action, WorkflowState::Approved, true);
            assert_eq!(v.decision, CapabilityDecision::Allowed, "{action:?}");
        }
    }

    #[test]
    fn no_attempt_is_denied() {
        let v = govern_action(BrowserAction::Read, WorkflowState::Validated, false);
        assert_eq!(v.decision, CapabilityDecision::Denied);
    }
}
