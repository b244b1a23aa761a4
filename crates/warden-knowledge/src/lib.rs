//! Bug-type knowledge and narrative composition.
//!
//! The registry is closed: lookups return the exact mapping or `Unknown`,
//! never a near match, and `Unknown` never gets a fabricated CWE. Narratives
//! are composed from fixed step templates keyed by decision and bug type;
//! there is no free-form generation anywhere in this crate.

#![deny(unsafe_code)]

pub mod narrative;
pub mod registry;

pub use narrative::{compose_narrative, render, Language, Narrative};
pub use registry::{explanation, lookup_bug_type};
