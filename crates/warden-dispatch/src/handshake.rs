use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use warden_types::{Digest, ExecutorIdentity};

/// Outcome of the pre-dispatch handshake.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandshakeDecision {
    pub accepted: bool,
    pub reason: String,
}

/// The handshake table.
///
/// Only a verified executor presenting exactly the expected envelope hash is
/// accepted. Absent, unknown, unverified, and revoked identities are
/// rejected before the hash is even considered.
pub fn handshake(
    identity: Option<ExecutorIdentity>,
    expected_hash: &Digest,
    presented_hash: &Digest,
) -> HandshakeDecision {
    match identity {
        None | Some(ExecutorIdentity::Unknown) => reject("executor identity is unknown"),
        Some(ExecutorIdentity::Revoked) => reject("executor identity is revoked"),
        Some(ExecutorIdentity::Unverified) => reject("executor identity is unverified"),
        Some(ExecutorIdentity::Verified) => {
            if presented_hash != expected_hash {
                warn!("handshake rejected: envelope hash mismatch");
                reject("envelope hash does not match")
            } else {
                debug!("handshake accepted");
                HandshakeDecision {
                    accepted: true,
                    reason: "verified executor, matching envelope hash".into(),
                }
            }
        }
    }
}

fn reject(reason: &str) -> HandshakeDecision {
    HandshakeDecision {
        accepted: false,
        reason: reason.to_string(),
    }
}
