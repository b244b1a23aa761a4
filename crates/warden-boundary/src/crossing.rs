use serde::{Deserialize, Serialize};
use tracing::warn;

use warden_types::TrustZone;

/// Result of a zone-crossing check.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrossingCheck {
    pub allowed: bool,
    pub requires_validation: bool,
    pub reason: String,
}

impl CrossingCheck {
    fn allowed(reason: impl Into<String>) -> Self {
        Self {
            allowed: true,
            requires_validation: false,
            reason: reason.into(),
        }
    }

    fn blocked(reason: impl Into<String>) -> Self {
        Self {
            allowed: false,
            requires_validation: false,
            reason: reason.into(),
        }
    }
}

/// Check whether data may cross from one trust zone into another.
///
/// Same-zone movement is unconditional. The human zone may reach anywhere.
/// Higher trust may flow downward without validation. Lower trust may never
/// flow upward: there is no validation path that promotes trust, and no
/// mutation function exists anywhere in this module.
pub fn check_crossing(from: TrustZone, to: TrustZone) -> CrossingCheck {
    if from == to {
        return CrossingCheck::allowed(format!("same zone {from}"));
    }
    if from == TrustZone::Human {
        return CrossingCheck::allowed("human zone may reach any zone");
    }
    if from.level() > to.level() {
        return CrossingCheck::allowed(format!(
            "downhill crossing {from} ({}) -> {to} ({})",
            from.level(),
            to.level()
        ));
    }
    warn!(%from, %to, "uphill trust crossing blocked");
    CrossingCheck::blocked(format!(
        "uphill crossing {from} ({}) -> {to} ({}) is blocked; trust is never promoted",
        from.level(),
        to.level()
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    const ZONES: [TrustZone; 4] = [
        TrustZone::Human,
        TrustZone::Governance,
        TrustZone::System,
        TrustZone::External,
    ];

    #[test]
    fn same_zone_is_always_allowed() {
        for z in ZONES {
            let check = check_crossing(z, z);
            assert!(check.allowed, "{z} -> {z}");
            assert!(!check.requires_validation);
        }
    }

    #[test]
    fn human_reaches_everywhere() {
        for z in ZONES {
            assert!(check_crossing(TrustZone::Human, z).allowed);
        }
    }

    #[test]
    fn downhill_is_allowed_without_validation() {
        let check = check_crossing(TrustZone::Governance, TrustZone::External);
        assert!(check.allowed);
        assert!(!check.requires_validation);
    }

    #[test]
    fn uphill_is_blocked_for_every_pair() {
        for from in ZONES {
            for to in ZONES {
                if from.level() < to.level() {
                    let check = check_crossing(from, to);
                    assert!(!check.allowed, "{from} -> {to} must be blocked");
                }
            }
        }
    }

    #[test]
    fn external_cannot_reach_system() {
        let check = check_crossing(TrustZone::External, TrustZone::System);
        assert!(!check.allowed);
        assert!(check.reason.contains("never promoted"));
    }
}
