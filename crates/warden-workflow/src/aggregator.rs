use serde::{Deserialize, Serialize};
use tracing::info;

use warden_types::{ActorKind, DecisionContext, FinalDecision, TrustZone, ValidationResult};

/// The single aggregated decision for one request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateVerdict {
    pub decision: FinalDecision,
    pub reason: String,
}

/// Fold the upstream verdicts into one decision.
///
/// Rules apply in strict priority order; the first match wins:
///
/// 1. terminal workflow state denies — workflow truth outranks everyone,
///    including a human;
/// 2. a refused workflow transition denies;
/// 3. a human actor with a clean validation is allowed — system outputs
///    cannot override it;
/// 4. an escalating validation escalates;
/// 5. a denying validation denies;
/// 6. the external zone escalates;
/// 7. everything else is allowed.
pub fn aggregate(ctx: &DecisionContext) -> AggregateVerdict {
    let verdict = fold(ctx);
    info!(
        decision = ?verdict.decision,
        state = ?ctx.state,
        actor = %ctx.actor,
        "request aggregated"
    );
    verdict
}

fn fold(ctx: &DecisionContext) -> AggregateVerdict {
    if ctx.state.is_terminal() {
        return AggregateVerdict {
            decision: FinalDecision::Deny,
            reason: format!("workflow state {:?} is terminal", ctx.state),
        };
    }
    if !ctx.transition_allowed {
        return AggregateVerdict {
            decision: FinalDecision::Deny,
            reason: "workflow transition was refused".into(),
        };
    }
    if ctx.actor == ActorKind::Human && ctx.validation == ValidationResult::Allow {
        return AggregateVerdict {
            decision: FinalDecision::Allow,
            reason: "human actor with passing validation".into(),
        };
    }
    if ctx.validation == ValidationResult::Escalate {
        return AggregateVerdict {
            decision: FinalDecision::Escalate,
            reason: "validation escalated".into(),
        };
    }
    if ctx.validation == ValidationResult::Deny {
        return AggregateVerdict {
            decision: FinalDecision::Deny,
            reason: "validation denied".into(),
        };
    }
    if ctx.zone == TrustZone::External {
        return AggregateVerdict {
            decision: FinalDecision::Escalate,
            reason: "external trust zone".into(),
        };
    }
    AggregateVerdict {
        decision: FinalDecision::Allow,
        reason: "no rule objects to this request".into(),
    }
}
