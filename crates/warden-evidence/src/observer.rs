use tracing::{debug, warn};

use warden_types::{Digest, ObservationContext, StopCondition, StopVerdict, Timestamp};

/// Attach an observer to one execution loop.
///
/// A context with any empty identifying field is born halted: an observer
/// that cannot say what it is watching must not claim to be watching it.
pub fn attach_observer(
    loop_id: &str,
    executor_id: &str,
    envelope_hash: Digest,
    timestamp: Timestamp,
) -> ObservationContext {
    let halted = loop_id.is_empty() || executor_id.is_empty() || envelope_hash.is_zero();
    if halted {
        warn!(loop_id, executor_id, "observer attached halted: incomplete identity");
    } else {
        debug!(loop_id, executor_id, "observer attached");
    }
    ObservationContext {
        loop_id: loop_id.to_string(),
        executor_id: executor_id.to_string(),
        envelope_hash,
        attached_at: timestamp,
        halted,
    }
}

/// Evaluate a stop check. The default is `Halt`.
///
/// Execution continues only for a live context with no stop condition
/// raised. A missing context halts, a halted context stays halted, and
/// every one of the stop conditions halts.
pub fn check_stop(
    ctx: Option<&ObservationContext>,
    condition: Option<StopCondition>,
) -> StopVerdict {
    match (ctx, condition) {
        (Some(ctx), None) if ctx.is_live() => StopVerdict::Continue,
        (Some(ctx), Some(condition)) => {
            warn!(loop_id = %ctx.loop_id, ?condition, "stop condition raised");
            StopVerdict::Halt
        }
        _ => StopVerdict::Halt,
    }
}
