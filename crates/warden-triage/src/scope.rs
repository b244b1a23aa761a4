use serde::{Deserialize, Serialize};
use tracing::debug;

use warden_types::{EligibilityDecision, Severity, TargetClass};

/// Eligibility verdict with its reason.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EligibilityAssessment {
    pub decision: EligibilityDecision,
    pub reason: String,
}

/// Decide whether a report is eligible for the pipeline at all.
///
/// Priority order: out-of-scope loses first, duplicates second, then
/// anything critical or aimed at production is parked for review. Only what
/// survives all three is eligible.
pub fn assess_eligibility(
    in_scope: bool,
    known_duplicate: bool,
    severity: Severity,
    target: TargetClass,
) -> EligibilityAssessment {
    let assessment = if !in_scope {
        EligibilityAssessment {
            decision: EligibilityDecision::NotEligible,
            reason: "target is out of scope".into(),
        }
    } else if known_duplicate {
        EligibilityAssessment {
            decision: EligibilityDecision::Duplicate,
            reason: "fingerprint matches a known report".into(),
        }
    } else if severity == Severity::Critical || target == TargetClass::Production {
        EligibilityAssessment {
            decision: EligibilityDecision::NeedsReview,
            reason: format!("{severity:?} severity against {target:?} needs review"),
        }
    } else {
        EligibilityAssessment {
            decision: EligibilityDecision::Eligible,
            reason: "in scope, novel, below the review threshold".into(),
        }
    };
    debug!(decision = ?assessment.decision, "eligibility assessed");
    assessment
}
