use tracing::debug;

use warden_types::{
    Confidence, EvidenceState, HumanPresence, ReadinessDecision, Severity, TargetClass,
};

/// The pre-handoff safety gate.
///
/// Ready only for high-confidence, consistent, explicitly reviewed evidence.
/// High confidence that nobody has reviewed is parked, not passed. Anything
/// else is simply not ready.
pub fn handoff_readiness(
    confidence: Confidence,
    state: EvidenceState,
    explicitly_reviewed: bool,
) -> ReadinessDecision {
    let decision = if confidence == Confidence::High
        && state == EvidenceState::Consistent
        && explicitly_reviewed
    {
        ReadinessDecision::ReadyForBrowser
    } else if confidence == Confidence::High && !explicitly_reviewed {
        ReadinessDecision::ReviewRequired
    } else {
        ReadinessDecision::NotReady
    };
    debug!(?confidence, ?state, explicitly_reviewed, ?decision, "handoff readiness");
    decision
}

/// How strongly a human must be present for a handoff.
///
/// Not-ready work blocks outright. Critical severity and production targets
/// always require a human. Optional presence exists only for low-severity
/// work away from production.
pub fn human_presence(
    readiness: ReadinessDecision,
    severity: Severity,
    target: TargetClass,
) -> HumanPresence {
    if readiness == ReadinessDecision::NotReady {
        return HumanPresence::Blocking;
    }
    if severity == Severity::Critical || target == TargetClass::Production {
        return HumanPresence::Required;
    }
    if severity == Severity::Low && target != TargetClass::Production {
        return HumanPresence::Optional;
    }
    HumanPresence::Required
}
