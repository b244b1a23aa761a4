//! Triage: scope, coordination, evidence consistency, and readiness.
//!
//! Everything between raw validation and the human decision surface: whether
//! a report is eligible at all, whether it collides with one already seen,
//! how consistent its evidence is, and whether it is safe to hand to a
//! browser executor. Confidence is capped below certainty by construction;
//! high confidence always pulls a human into the loop.

#![deny(unsafe_code)]

pub mod consistency;
pub mod coordination;
pub mod readiness;
pub mod scope;

pub use consistency::{assign_confidence, classify_bundle, replay_readiness, ConfidenceAssessment, Replayability};
pub use coordination::{order_queue, DuplicateCheck, FingerprintLedger, Submission};
pub use readiness::{handoff_readiness, human_presence};
pub use scope::{assess_eligibility, EligibilityAssessment};
