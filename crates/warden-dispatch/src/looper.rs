use tracing::debug;

use warden_types::{LoopState, LoopTransition};

/// Step the execution-loop state machine.
///
/// The kernel defines this machine for executors to consult and never runs
/// it. `Halted` is terminal, halting is always available, and any pair the
/// table does not name halts.
pub fn step_loop(state: LoopState, transition: LoopTransition) -> LoopState {
    use LoopState::*;
    use LoopTransition::*;

    let next = match (state, transition) {
        (Halted, _) => Halted,
        (_, Halt) => Halted,
        (Initialized, Init) => Ready,
        (Ready, Dispatch) => Dispatched,
        (Dispatched, Receive) => AwaitingResponse,
        (AwaitingResponse, Dispatch) => Dispatched,
        _ => Halted,
    };
    debug!(?state, ?transition, ?next, "loop stepped");
    next
}
