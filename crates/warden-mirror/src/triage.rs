use warden_types::{
    Confidence, EligibilityDecision, EvidenceBundle, EvidenceState, HumanPresence,
    ReadinessDecision, Severity, TargetClass,
};

/// Re-derive eligibility as a single match over the four inputs.
pub fn reassess_eligibility(
    in_scope: bool,
    known_duplicate: bool,
    severity: Severity,
    target: TargetClass,
) -> EligibilityDecision {
    match (in_scope, known_duplicate) {
        (false, _) => EligibilityDecision::NotEligible,
        (true, true) => EligibilityDecision::Duplicate,
        (true, false) if severity == Severity::Critical || target == TargetClass::Production => {
            EligibilityDecision::NeedsReview
        }
        _ => EligibilityDecision::Eligible,
    }
}

/// Re-classify a bundle by counting distinct fingerprints.
pub fn reclassify_bundle(bundle: &EvidenceBundle) -> EvidenceState {
    let distinct = {
        let mut fps: Vec<&str> = bundle.sources.iter().map(|s| s.fingerprint.as_str()).collect();
        fps.sort_unstable();
        fps.dedup();
        fps.len()
    };
    match (bundle.sources.len(), distinct) {
        (0, _) => EvidenceState::Unverified,
        (1, _) => EvidenceState::Raw,
        (_, 1) => EvidenceState::Consistent,
        _ => EvidenceState::Inconsistent,
    }
}

/// Re-derive replay readiness as one conjunction.
pub fn rereplay(bundle: &EvidenceBundle) -> bool {
    !bundle.steps.is_empty() && bundle.deterministic && !bundle.external_dependencies
}

/// The confidence table restated as data.
const CONFIDENCE: &[(EvidenceState, Option<bool>, Confidence)] = &[
    (EvidenceState::Unverified, None, Confidence::Low),
    (EvidenceState::Raw, Some(false), Confidence::Low),
    (EvidenceState::Raw, Some(true), Confidence::Medium),
    (EvidenceState::Inconsistent, None, Confidence::Low),
    (EvidenceState::Consistent, Some(false), Confidence::Medium),
    (EvidenceState::Consistent, Some(true), Confidence::High),
    (EvidenceState::Replayable, Some(true), Confidence::High),
];

/// Re-assign confidence by scanning the table; anything off it is `Low`.
pub fn reassign_confidence(state: EvidenceState, replayable: bool) -> Confidence {
    CONFIDENCE
        .iter()
        .find(|(s, r, _)| *s == state && r.map_or(true, |r| r == replayable))
        .map(|(_, _, c)| *c)
        .unwrap_or(Confidence::Low)
}

/// Re-derive a duplicate verdict from the prior fingerprints alone.
/// Equality only; nothing resembling similarity is computed.
pub fn recheck_duplicate(prior: &[String], fingerprint: &str) -> bool {
    prior.iter().any(|fp| fp == fingerprint)
}

/// Re-derive handoff readiness as one conjunction plus one fallback.
pub fn recheck_readiness(
    confidence: Confidence,
    state: EvidenceState,
    explicitly_reviewed: bool,
) -> ReadinessDecision {
    let high = confidence == Confidence::High;
    if high && state == EvidenceState::Consistent && explicitly_reviewed {
        ReadinessDecision::ReadyForBrowser
    } else if high && !explicitly_reviewed {
        ReadinessDecision::ReviewRequired
    } else {
        ReadinessDecision::NotReady
    }
}

/// Re-derive human presence from the same three inputs.
pub fn recheck_presence(
    readiness: ReadinessDecision,
    severity: Severity,
    target: TargetClass,
) -> HumanPresence {
    match readiness {
        ReadinessDecision::NotReady => HumanPresence::Blocking,
        _ if severity == Severity::Critical || target == TargetClass::Production => {
            HumanPresence::Required
        }
        _ if severity == Severity::Low => HumanPresence::Optional,
        _ => HumanPresence::Required,
    }
}
