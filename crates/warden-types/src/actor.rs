use serde::{Deserialize, Serialize};

use crate::error::GovernanceError;

/// The closed set of principals a request can run on behalf of.
///
/// There is no registration surface: these two actors exist for the lifetime
/// of the process and no others can be introduced at runtime.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActorKind {
    Human,
    System,
}

/// Fixed trust attributes of an actor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActorProfile {
    pub kind: ActorKind,
    /// Trust level in [0, 100].
    pub trust_level: u8,
    /// Whether this actor's decisions carry authority on their own.
    pub authoritative: bool,
}

/// The human principal: full trust, authoritative.
pub const HUMAN: ActorProfile = ActorProfile {
    kind: ActorKind::Human,
    trust_level: 100,
    authoritative: true,
};

/// The system principal: zero trust, never authoritative.
pub const SYSTEM: ActorProfile = ActorProfile {
    kind: ActorKind::System,
    trust_level: 0,
    authoritative: false,
};

/// Permissions over the execution lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Permission {
    Initiate,
    Confirm,
    Override,
    Execute,
    Audit,
}

impl ActorKind {
    /// The fixed profile for this actor.
    pub fn profile(&self) -> &'static ActorProfile {
        match self {
            ActorKind::Human => &HUMAN,
            ActorKind::System => &SYSTEM,
        }
    }

    /// Permission table. HUMAN holds every permission; SYSTEM holds only
    /// `Execute`. There is no path that widens this at runtime.
    pub fn is_permitted(&self, permission: Permission) -> bool {
        match (self, permission) {
            (ActorKind::Human, _) => true,
            (ActorKind::System, Permission::Execute) => true,
            (ActorKind::System, _) => false,
        }
    }

    /// Exact-name parse. Unknown actors are refused, never invented.
    pub fn parse(input: &str) -> Result<Self, GovernanceError> {
        match input {
            "human" => Ok(ActorKind::Human),
            "system" => Ok(ActorKind::System),
            other => Err(GovernanceError::UnauthorizedActor(format!(
                "no such actor: {other}"
            ))),
        }
    }

    /// Check a permission, producing the kernel error on refusal.
    pub fn require_permission(&self, permission: Permission) -> Result<(), GovernanceError> {
        if self.is_permitted(permission) {
            Ok(())
        } else {
            Err(GovernanceError::UnauthorizedActor(format!(
                "{self:?} lacks permission {permission:?}"
            )))
        }
    }
}

impl std::fmt::Display for ActorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ActorKind::Human => write!(f, "human"),
            ActorKind::System => write!(f, "system"),
        }
    }
}
