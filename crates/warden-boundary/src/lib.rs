//! Trust boundary and action validation.
//!
//! Two gates at the mouth of the pipeline: zone-crossing checks (no
//! validation path ever promotes trust) and the per-action
//! allow/deny/escalate table. Both are pure functions over their inputs;
//! neither exposes any mutation surface.

#![deny(unsafe_code)]

pub mod crossing;
pub mod validation;

pub use crossing::{check_crossing, CrossingCheck};
pub use validation::{validate_action, ActionVerdict};
