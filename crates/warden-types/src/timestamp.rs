use chrono::DateTime;
use serde::{Deserialize, Serialize};

use crate::error::GovernanceError;

/// Caller-supplied ISO-8601 timestamp.
///
/// The kernel never reads a clock: every timestamp is validated at the
/// boundary and then stored and compared as its original string. Ordering is
/// lexicographic, which agrees with chronological order for the normalized
/// UTC form this type accepts.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(String);

impl Timestamp {
    /// Validate and wrap a caller-supplied ISO-8601 timestamp.
    ///
    /// Malformed timestamps are rejected here; nothing downstream re-checks.
    pub fn parse(input: &str) -> Result<Self, GovernanceError> {
        let parsed = DateTime::parse_from_rfc3339(input)
            .map_err(|e| GovernanceError::UnknownInput(format!("malformed timestamp: {e}")))?;
        // Lexicographic comparison is only sound within a single offset.
        if parsed.offset().local_minus_utc() != 0 {
            return Err(GovernanceError::UnknownInput(
                "timestamp must be UTC (Z or +00:00)".into(),
            ));
        }
        Ok(Self(input.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
