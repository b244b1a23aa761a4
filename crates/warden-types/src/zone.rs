use serde::{Deserialize, Serialize};

use crate::error::GovernanceError;

/// Trust zones, totally ordered by trust level.
///
/// Variants are declared in ascending trust order so the derived `Ord`
/// agrees with [`TrustZone::level`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrustZone {
    External,
    System,
    Governance,
    Human,
}

impl TrustZone {
    /// Numeric trust level of this zone.
    pub fn level(&self) -> u8 {
        match self {
            TrustZone::Human => 100,
            TrustZone::Governance => 80,
            TrustZone::System => 50,
            TrustZone::External => 0,
        }
    }

    /// Exact-name parse. Unknown names are rejected, never approximated.
    pub fn parse(input: &str) -> Result<Self, GovernanceError> {
        match input {
            "human" => Ok(TrustZone::Human),
            "governance" => Ok(TrustZone::Governance),
            "system" => Ok(TrustZone::System),
            "external" => Ok(TrustZone::External),
            other => Err(GovernanceError::UnknownInput(format!(
                "no such trust zone: {other}"
            ))),
        }
    }
}

impl std::fmt::Display for TrustZone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TrustZone::Human => write!(f, "human"),
            TrustZone::Governance => write!(f, "governance"),
            TrustZone::System => write!(f, "system"),
            TrustZone::External => write!(f, "external"),
        }
    }
}
