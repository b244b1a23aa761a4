use serde::{Deserialize, Serialize};

use crate::actor::ActorKind;
use crate::error::GovernanceError;
use crate::zone::TrustZone;

/// Kinds of operations a request can ask for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    Read,
    Write,
    Delete,
    Execute,
    Configure,
}

impl ActionKind {
    /// Whether this action mutates or acts on its target.
    pub fn is_mutating(&self) -> bool {
        !matches!(self, ActionKind::Read)
    }
}

/// A single requested operation, consumed once by the validation pipeline.
///
/// Every field is required; there are no defaults.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRequest {
    pub actor: ActorKind,
    pub action: ActionKind,
    pub zone: TrustZone,
    pub target: String,
}

impl ActionRequest {
    pub fn new(
        actor: ActorKind,
        action: ActionKind,
        zone: TrustZone,
        target: impl Into<String>,
    ) -> Self {
        Self {
            actor,
            action,
            zone,
            target: target.into(),
        }
    }

    pub fn builder() -> ActionRequestBuilder {
        ActionRequestBuilder::default()
    }
}

/// Builder enforcing the no-defaults rule at `build()` time.
#[derive(Debug, Default)]
pub struct ActionRequestBuilder {
    actor: Option<ActorKind>,
    action: Option<ActionKind>,
    zone: Option<TrustZone>,
    target: Option<String>,
}

impl ActionRequestBuilder {
    pub fn actor(mut self, actor: ActorKind) -> Self {
        self.actor = Some(actor);
        self
    }

    pub fn action(mut self, action: ActionKind) -> Self {
        self.action = Some(action);
        self
    }

    pub fn zone(mut self, zone: TrustZone) -> Self {
        self.zone = Some(zone);
        self
    }

    pub fn target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    pub fn build(self) -> Result<ActionRequest, GovernanceError> {
        let target = self
            .target
            .ok_or_else(|| GovernanceError::MissingField("target".into()))?;
        if target.is_empty() {
            return Err(GovernanceError::MissingField("target".into()));
        }
        Ok(ActionRequest {
            actor: self
                .actor
                .ok_or_else(|| GovernanceError::MissingField("actor".into()))?,
            action: self
                .action
                .ok_or_else(|| GovernanceError::MissingField("action".into()))?,
            zone: self
                .zone
                .ok_or_else(|| GovernanceError::MissingField("zone".into()))?,
            target,
        })
    }
}
