//! Shared data model for the Warden governance kernel.
//!
//! Every entity that crosses a layer boundary is defined here, so that the
//! primary pipeline and the mirror tree share data definitions and nothing
//! else. All entities are immutable once constructed; all enumerations are
//! closed. Unknown inputs are rejected at the boundary, never extended.
//!
//! Kernel doctrine, enforced by construction throughout the workspace:
//!
//! - Humans decide; systems bind, validate, and mirror.
//! - Deny-by-default: any path not explicitly positive resolves negatively.
//! - No autonomous authority: nothing here grants what a human decision has
//!   not already expressed.
//! - Audit trails are append-only and hash-chained.

#![deny(unsafe_code)]

pub mod action;
pub mod actor;
pub mod audit;
pub mod decision;
pub mod digest;
pub mod dispatch;
pub mod error;
pub mod evidence;
pub mod knowledge;
pub mod timestamp;
pub mod verdict;
pub mod workflow;
pub mod zone;

pub use action::{ActionKind, ActionRequest, ActionRequestBuilder};
pub use actor::{ActorKind, ActorProfile, Permission, HUMAN, SYSTEM};
pub use audit::{AuditRecord, AuditTrail, HeadAttestation};
pub use decision::{
    AuthorizationStatus, DecisionKind, DecisionRecord, DecisionRequest, EvidenceSummary,
    ExecutionAuthorization, ExecutionIntent, ExecutionState, IntentRevocation, SummaryFieldClass,
    SummaryRecord,
};
pub use digest::{Digest, ZERO_DIGEST};
pub use dispatch::{
    ExecutorIdentity, ExecutorRawResponse, InstructionEnvelope, InstructionEnvelopeBuilder,
    LoopState, LoopTransition, NormalizedDecision, NormalizedResult, ReportedStatus,
};
pub use error::{ErrorKind, GovernanceError};
pub use evidence::{
    EvidenceBundle, EvidenceBundleBuilder, EvidenceChain, EvidenceRecord, EvidenceSource,
    EvidenceState, EvidenceType, ObservationContext, ObservationPoint, StopCondition, StopVerdict,
};
pub use knowledge::{BugExplanation, BugType, NarrativeStep};
pub use timestamp::Timestamp;
pub use verdict::{
    BrowserAction, CapabilityDecision, Confidence, EligibilityDecision, FinalDecision,
    HumanPresence, ReadinessDecision, RiskTier, Severity, TargetClass, ValidationResult,
};
pub use workflow::{DecisionContext, WorkflowContext, WorkflowState, WorkflowTransition};
pub use zone::TrustZone;
