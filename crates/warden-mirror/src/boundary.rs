use serde::{Deserialize, Serialize};

use warden_types::{ActionKind, ActionRequest, ActorKind, TrustZone, ValidationResult};

/// Mirror verdict for a zone crossing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MirrorCrossing {
    pub allowed: bool,
}

/// Re-derive the crossing rule from trust arithmetic alone: movement is
/// legal exactly when it does not climb the trust order.
pub fn recheck_crossing(from: TrustZone, to: TrustZone) -> MirrorCrossing {
    MirrorCrossing {
        allowed: from.level() >= to.level() || from == TrustZone::Human,
    }
}

/// Mirror verdict for an action request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MirrorActionVerdict {
    pub result: ValidationResult,
}

/// The action table, restated as a scan over guard rows.
pub fn recheck_action(req: &ActionRequest) -> MirrorActionVerdict {
    type Guard = fn(&ActionRequest) -> bool;
    const ROWS: &[(Guard, ValidationResult)] = &[
        (
            |r| r.actor == ActorKind::Human || r.zone == TrustZone::Human,
            ValidationResult::Allow,
        ),
        (
            |r| {
                r.zone == TrustZone::External
                    && matches!(
                        r.action,
                        ActionKind::Write | ActionKind::Delete | ActionKind::Execute
                    )
            },
            ValidationResult::Deny,
        ),
        (
            |r| r.zone == TrustZone::Governance && r.action == ActionKind::Write,
            ValidationResult::Deny,
        ),
        (
            |r| r.actor == ActorKind::System && r.action != ActionKind::Read,
            ValidationResult::Escalate,
        ),
        (
            |r| r.zone == TrustZone::Governance && r.action == ActionKind::Configure,
            ValidationResult::Escalate,
        ),
    ];

    for (guard, result) in ROWS {
        if guard(req) {
            return MirrorActionVerdict { result: *result };
        }
    }
    MirrorActionVerdict {
        result: ValidationResult::Allow,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn human_zone_crossings_always_pass() {
        for to in [
            TrustZone::Human,
            TrustZone::Governance,
            TrustZone::System,
            TrustZone::External,
        ] {
            assert!(recheck_crossing(TrustZone::Human, to).allowed);
        }
    }

    #[test]
    fn climbing_is_refused() {
        assert!(!recheck_crossing(TrustZone::External, TrustZone::System).allowed);
        assert!(!recheck_crossing(TrustZone::System, TrustZone::Governance).allowed);
    }

    #[test]
    fn system_write_outside_special_zones_escalates() {
        let req = ActionRequest::new(
            ActorKind::System,
            ActionKind::Write,
            TrustZone::System,
            "target",
        );
        assert_eq!(recheck_action(&req).result, ValidationResult::Escalate);
    }

    #[test]
    fn external_delete_denies() {
        let req = ActionRequest::new(
            ActorKind::System,
            ActionKind::Delete,
            TrustZone::External,
            "target",
        );
        assert_eq!(recheck_action(&req).result, ValidationResult::Deny);
    }
}
