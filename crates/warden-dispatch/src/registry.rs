use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use warden_types::{ExecutorIdentity, GovernanceError};

/// Caller-owned registry of executor identities.
///
/// Registration yields an unverified identity; verification is a separate,
/// explicit step, and revocation is one-way. An executor this registry has
/// never seen is `Unknown`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutorRegistry {
    executors: BTreeMap<String, ExecutorIdentity>,
}

impl ExecutorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new executor as `Unverified`.
    pub fn register(&mut self, executor_id: &str) -> Result<(), GovernanceError> {
        if executor_id.is_empty() {
            return Err(GovernanceError::MissingField("executor_id".into()));
        }
        if self.executors.contains_key(executor_id) {
            return Err(GovernanceError::DuplicateBinding(format!(
                "executor {executor_id} is already registered"
            )));
        }
        debug!(executor_id, "executor registered unverified");
        self.executors
            .insert(executor_id.to_string(), ExecutorIdentity::Unverified);
        Ok(())
    }

    /// Promote a registered executor to `Verified`. Revoked identities stay
    /// revoked.
    pub fn verify(&mut self, executor_id: &str) -> Result<(), GovernanceError> {
        match self.executors.get_mut(executor_id) {
            None => Err(GovernanceError::UnknownInput(format!(
                "no such executor: {executor_id}"
            ))),
            Some(ExecutorIdentity::Revoked) => Err(GovernanceError::Revoked(format!(
                "executor {executor_id} is revoked"
            ))),
            Some(identity) => {
                *identity = ExecutorIdentity::Verified;
                debug!(executor_id, "executor verified");
                Ok(())
            }
        }
    }

    /// Revoke an executor. One-way.
    pub fn revoke(&mut self, executor_id: &str) -> Result<(), GovernanceError> {
        match self.executors.get_mut(executor_id) {
            None => Err(GovernanceError::UnknownInput(format!(
                "no such executor: {executor_id}"
            ))),
            Some(identity) => {
                warn!(executor_id, "executor revoked");
                *identity = ExecutorIdentity::Revoked;
                Ok(())
            }
        }
    }

    /// The identity of an executor; `Unknown` for anything unregistered.
    pub fn identity(&self, executor_id: &str) -> ExecutorIdentity {
        self.executors
            .get(executor_id)
            .copied()
            .unwrap_or(ExecutorIdentity::Unknown)
    }

    pub fn len(&self) -> usize {
        self.executors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.executors.is_empty()
    }
}
