//! The execution boundary, minus the execution.
//!
//! Everything the kernel decides about dispatching — executor identity,
//! sealed instruction envelopes, the handshake, the pre-execution readiness
//! gate, the execution-loop state machine, and normalization of whatever the
//! executor claims happened. The kernel defines all of it and performs none
//! of it; actuation lives outside.

#![deny(unsafe_code)]

pub mod envelope;
pub mod handshake;
pub mod looper;
pub mod normalize;
pub mod readiness;
pub mod registry;

pub use envelope::{seal_envelope, verify_envelope};
pub use handshake::{handshake, HandshakeDecision};
pub use looper::step_loop;
pub use normalize::normalize_response;
pub use readiness::{execution_readiness, ExecutionReadiness, ReadinessInputs};
pub use registry::ExecutorRegistry;
