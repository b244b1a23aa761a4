//! Observation and the evidence hash chain.
//!
//! The tamper-evidence layer: every observation is appended to a SHA-256
//! hash-chained sequence with a single canonical byte encoding, and any
//! mutation of any recorded field is detectable by re-hashing. Observation
//! is passive — nothing in this crate modifies or performs execution, and
//! raw payload bytes are hashed, never parsed.

#![deny(unsafe_code)]

pub mod audit;
pub mod canonical;
pub mod chain;
pub mod filter;
pub mod observer;

pub use audit::{append_audit, validate_trail};
pub use canonical::{sha256_hex, CanonicalWriter};
pub use chain::{capture, validate_chain};
pub use filter::{ChainFilter, TrailFilter};
pub use observer::{attach_observer, check_stop};
