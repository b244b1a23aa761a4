//! Human decisions and intent binding.
//!
//! The layer where authority actually lives. Evidence is curated into a
//! summary a human can see (payload bytes never are), the human answers a
//! decision request before its deadline or the kernel records an abort on
//! their behalf, and an accepted decision binds to exactly one execution
//! intent. Revoking an intent is permanent.

#![deny(unsafe_code)]

pub mod intent;
pub mod record;
pub mod request;
pub mod summary;

pub use intent::{IntentFilter, IntentLedger};
pub use record::{accept_decision, DecisionOutcome};
pub use request::create_request;
pub use summary::{field_class, present_evidence};
