use serde::{Deserialize, Serialize};

use crate::error::GovernanceError;

/// The prior hash of the first record in every chain: 64 ASCII zeros.
pub const ZERO_DIGEST: &str =
    "0000000000000000000000000000000000000000000000000000000000000000";

/// A SHA-256 digest in its wire form: 64 lowercase hex characters.
///
/// The kernel never computes payload hashes on behalf of callers; it compares
/// digests it is given and produces digests over its own records.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Digest(String);

impl Digest {
    /// Validate and wrap a caller-supplied digest string.
    pub fn parse(input: &str) -> Result<Self, GovernanceError> {
        if input.len() != 64
            || !input
                .bytes()
                .all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b))
        {
            return Err(GovernanceError::UnknownInput(format!(
                "not a lowercase sha-256 hex digest: {input:?}"
            )));
        }
        Ok(Self(input.to_string()))
    }

    /// Wrap a digest the kernel itself just computed.
    ///
    /// Callers inside the workspace hand this the output of `hex::encode`,
    /// which is lowercase by construction.
    pub fn from_computed(hex64: String) -> Self {
        debug_assert_eq!(hex64.len(), 64);
        Self(hex64)
    }

    /// The fixed zero digest used as the first record's prior hash.
    pub fn zero() -> Self {
        Self(ZERO_DIGEST.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == ZERO_DIGEST
    }
}

impl std::fmt::Display for Digest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
