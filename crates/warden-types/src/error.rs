use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The closed error set of the kernel.
///
/// Errors never cross a layer boundary as panics: each layer catches inputs
/// that fail its preconditions and folds them into its negative verdict,
/// carrying the error kind and a readable reason. No error is fatal to the
/// process.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum GovernanceError {
    #[error("unauthorized actor: {0}")]
    UnauthorizedActor(String),

    #[error("trust violation: {0}")]
    TrustViolation(String),

    #[error("invalid transition: {0}")]
    InvalidTransition(String),

    #[error("unknown input: {0}")]
    UnknownInput(String),

    #[error("missing field: {0}")]
    MissingField(String),

    #[error("duplicate binding: {0}")]
    DuplicateBinding(String),

    #[error("hash mismatch: expected {expected}, got {actual}")]
    HashMismatch { expected: String, actual: String },

    #[error("chain integrity violation: {0}")]
    ChainIntegrity(String),

    #[error("timeout: {0}")]
    Timeout(String),

    #[error("revoked: {0}")]
    Revoked(String),
}

/// Discriminant-only view of [`GovernanceError`], for embedding in verdicts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    UnauthorizedActor,
    TrustViolation,
    InvalidTransition,
    UnknownInput,
    MissingField,
    DuplicateBinding,
    HashMismatch,
    ChainIntegrity,
    Timeout,
    Revoked,
}

impl GovernanceError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            GovernanceError::UnauthorizedActor(_) => ErrorKind::UnauthorizedActor,
            GovernanceError::TrustViolation(_) => ErrorKind::TrustViolation,
            GovernanceError::InvalidTransition(_) => ErrorKind::InvalidTransition,
            GovernanceError::UnknownInput(_) => ErrorKind::UnknownInput,
            GovernanceError::MissingField(_) => ErrorKind::MissingField,
            GovernanceError::DuplicateBinding(_) => ErrorKind::DuplicateBinding,
            GovernanceError::HashMismatch { .. } => ErrorKind::HashMismatch,
            GovernanceError::ChainIntegrity(_) => ErrorKind::ChainIntegrity,
            GovernanceError::Timeout(_) => ErrorKind::Timeout,
            GovernanceError::Revoked(_) => ErrorKind::Revoked,
        }
    }
}
