//! The mirror: independent re-validation of every pipeline decision.
//!
//! Every rule the primary pipeline applies is re-stated here from the shared
//! data model alone — no algorithmic code is shared, the implementations are
//! deliberately shaped differently (table scans where the primary matches,
//! arithmetic where the primary branches), and the verdict types are this
//! crate's own. On well-formed inputs the mirror and the primary agree;
//! divergence indicates a defect in one of them, and a downstream comparator
//! can say so.
//!
//! This crate depends only on `warden-types`.

#![deny(unsafe_code)]

pub mod authority;
pub mod boundary;
pub mod capability;
pub mod chain;
pub mod decision;
pub mod dispatch;
pub mod knowledge;
pub mod triage;
pub mod workflow;

pub use authority::{reauthorize, MirrorAuthorizationInputs};
pub use boundary::{recheck_action, recheck_crossing, MirrorActionVerdict, MirrorCrossing};
pub use capability::{regovern_action, MirrorCapabilityVerdict};
pub use chain::{revalidate_chain, revalidate_trail, MirrorChainVerdict};
pub use decision::{reclassify_answer, recheck_binding, MirrorAnswer, MirrorBinding};
pub use dispatch::{
    renormalize, rerun_handshake, restep_loop, rereadiness, MirrorReadiness,
    MirrorReadinessInputs,
};
pub use knowledge::relookup_bug_type;
pub use triage::{
    reassess_eligibility, reassign_confidence, recheck_duplicate, recheck_presence,
    recheck_readiness, reclassify_bundle, rereplay,
};
pub use workflow::{reaggregate, retransition, MirrorTransition};
