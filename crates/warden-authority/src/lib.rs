//! Execution authorization.
//!
//! The last permission object before the execution boundary. An
//! authorization is issued exactly once per intent, only for an intent whose
//! hash still verifies and which nobody has revoked. Every status other than
//! `Authorized` maps to deny, and deny is also the default for anything this
//! layer has never heard of.

#![deny(unsafe_code)]

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use warden_decision::IntentLedger;
use warden_evidence::CanonicalWriter;
use warden_types::{
    AuthorizationStatus, Digest, ExecutionAuthorization, ExecutionIntent, FinalDecision,
    GovernanceError, Timestamp,
};

/// Permanent withdrawal of one authorization.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorizationRevocation {
    pub revocation_id: String,
    pub auth_id: String,
    pub revoked_by: String,
    pub reason: String,
    pub timestamp: Timestamp,
}

/// Caller-supplied expiry fact for one authorization.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorizationExpiry {
    pub auth_id: String,
    pub timestamp: Timestamp,
}

/// Caller-owned ledger of authorizations, revocations, and expiries.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AuthorityLedger {
    authorizations: Vec<ExecutionAuthorization>,
    revocations: Vec<AuthorizationRevocation>,
    expiries: Vec<AuthorizationExpiry>,
}

impl AuthorityLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Authorize execution of an intent, or record why not.
    ///
    /// Every call yields an authorization object; refusals are first-class
    /// records with status `Rejected`. `Authorized` requires all of: an
    /// intent, complete identifiers, a verifying intent hash, no revocation,
    /// and no prior authorization for the same intent.
    pub fn authorize_execution(
        &mut self,
        intent: Option<&ExecutionIntent>,
        intents: &IntentLedger,
        authorizer: &str,
        session_id: &str,
        now: Timestamp,
    ) -> ExecutionAuthorization {
        let (status, intent_id, detail) = match self.evaluate(intent, intents, authorizer, session_id)
        {
            Ok(intent_id) => (AuthorizationStatus::Authorized, intent_id, String::new()),
            Err((intent_id, err)) => {
                warn!(%err, "authorization refused");
                (AuthorizationStatus::Rejected, intent_id, err.to_string())
            }
        };

        let auth = seal_authorization(status, &intent_id, authorizer, session_id, &now, &detail);
        if status == AuthorizationStatus::Authorized {
            info!(auth = %auth.auth_id, intent = %intent_id, "execution authorized");
        }
        self.authorizations.push(auth.clone());
        auth
    }

    fn evaluate(
        &self,
        intent: Option<&ExecutionIntent>,
        intents: &IntentLedger,
        authorizer: &str,
        session_id: &str,
    ) -> Result<String, (String, GovernanceError)> {
        let Some(intent) = intent else {
            return Err((
                String::new(),
                GovernanceError::MissingField("intent".into()),
            ));
        };
        let intent_id = intent.intent_id.clone();

        if intent.intent_id.is_empty()
            || intent.decision_id.is_empty()
            || intent.session_id.is_empty()
            || intent.created_by.is_empty()
        {
            return Err((
                intent_id,
                GovernanceError::MissingField("intent identifier fields".into()),
            ));
        }
        if authorizer.is_empty() {
            return Err((intent_id, GovernanceError::MissingField("authorizer".into())));
        }
        if session_id.is_empty() {
            return Err((intent_id, GovernanceError::MissingField("session_id".into())));
        }
        if let Err(err) = intents.verify_intent_hash(intent) {
            return Err((intent_id, err));
        }
        if intents.is_revoked(&intent.intent_id) {
            return Err((
                intent_id.clone(),
                GovernanceError::Revoked(format!("intent {intent_id} is revoked")),
            ));
        }
        if self
            .authorizations
            .iter()
            .any(|a| a.intent_id == intent.intent_id)
        {
            return Err((
                intent_id.clone(),
                GovernanceError::DuplicateBinding(format!(
                    "intent {intent_id} already has an authorization"
                )),
            ));
        }
        Ok(intent_id)
    }

    /// Withdraw an authorization. Permanent; the reason is mandatory.
    pub fn revoke_authorization(
        &mut self,
        auth_id: &str,
        revoked_by: &str,
        reason: &str,
        now: Timestamp,
    ) -> Result<AuthorizationRevocation, GovernanceError> {
        if reason.is_empty() {
            return Err(GovernanceError::MissingField("reason".into()));
        }
        if self.authorization(auth_id).is_none() {
            return Err(GovernanceError::UnknownInput(format!(
                "no such authorization: {auth_id}"
            )));
        }
        if self.revocations.iter().any(|r| r.auth_id == auth_id) {
            return Err(GovernanceError::Revoked(format!(
                "authorization {auth_id} is already revoked"
            )));
        }

        let hex = CanonicalWriter::new()
            .str_field(auth_id)
            .str_field(revoked_by)
            .str_field(reason)
            .str_field(now.as_str())
            .digest_hex();
        let revocation = AuthorizationRevocation {
            revocation_id: format!("arev-{}", &hex[..16]),
            auth_id: auth_id.to_string(),
            revoked_by: revoked_by.to_string(),
            reason: reason.to_string(),
            timestamp: now,
        };
        warn!(auth = %auth_id, revoked_by, "authorization revoked");
        self.revocations.push(revocation.clone());
        Ok(revocation)
    }

    /// Record that an authorization's deadline has passed. The caller
    /// supplies the clock reading; the kernel only compares.
    pub fn expire_authorization(
        &mut self,
        auth_id: &str,
        now: Timestamp,
    ) -> Result<(), GovernanceError> {
        if self.authorization(auth_id).is_none() {
            return Err(GovernanceError::UnknownInput(format!(
                "no such authorization: {auth_id}"
            )));
        }
        if !self.expiries.iter().any(|e| e.auth_id == auth_id) {
            self.expiries.push(AuthorizationExpiry {
                auth_id: auth_id.to_string(),
                timestamp: now,
            });
        }
        Ok(())
    }

    /// Effective status: revocation wins, then expiry, then what was sealed.
    pub fn effective_status(&self, auth_id: &str) -> AuthorizationStatus {
        if self.revocations.iter().any(|r| r.auth_id == auth_id) {
            return AuthorizationStatus::Revoked;
        }
        if self.expiries.iter().any(|e| e.auth_id == auth_id) {
            return AuthorizationStatus::Expired;
        }
        self.authorization(auth_id)
            .map(|a| a.status)
            .unwrap_or(AuthorizationStatus::Rejected)
    }

    pub fn authorization(&self, auth_id: &str) -> Option<&ExecutionAuthorization> {
        self.authorizations.iter().find(|a| a.auth_id == auth_id)
    }

    pub fn authorization_for_intent(&self, intent_id: &str) -> Option<&ExecutionAuthorization> {
        self.authorizations.iter().find(|a| a.intent_id == intent_id)
    }

    pub fn len(&self) -> usize {
        self.authorizations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.authorizations.is_empty()
    }

    /// All authorizations matching a filter, in issuance order. Status is
    /// matched against the effective status, not the sealed one.
    pub fn query(&self, filter: &AuthorizationFilter) -> Vec<&ExecutionAuthorization> {
        self.authorizations
            .iter()
            .filter(|a| {
                if let Some(ref session) = filter.session_id {
                    if &a.session_id != session {
                        return false;
                    }
                }
                if let Some(status) = filter.status {
                    if self.effective_status(&a.auth_id) != status {
                        return false;
                    }
                }
                true
            })
            .collect()
    }
}

/// Filter for querying the authority ledger. Read-only.
#[derive(Clone, Debug, Default)]
pub struct AuthorizationFilter {
    pub session_id: Option<String>,
    pub status: Option<AuthorizationStatus>,
}

impl AuthorizationFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_session(mut self, session_id: impl Into<String>) -> Self {
        self.session_id = Some(session_id.into());
        self
    }

    pub fn with_status(mut self, status: AuthorizationStatus) -> Self {
        self.status = Some(status);
        self
    }
}

/// Map an authorization status to the pipeline decision it implies.
/// Only `Authorized` allows; everything else, including absence, denies.
pub fn authorization_decision(status: Option<AuthorizationStatus>) -> FinalDecision {
    match status {
        Some(AuthorizationStatus::Authorized) => FinalDecision::Allow,
        Some(AuthorizationStatus::Rejected)
        | Some(AuthorizationStatus::Revoked)
        | Some(AuthorizationStatus::Expired)
        | None => FinalDecision::Deny,
    }
}

fn seal_authorization(
    status: AuthorizationStatus,
    intent_id: &str,
    authorizer: &str,
    session_id: &str,
    now: &Timestamp,
    detail: &str,
) -> ExecutionAuthorization {
    let status_token = match status {
        AuthorizationStatus::Authorized => "authorized",
        AuthorizationStatus::Rejected => "rejected",
        AuthorizationStatus::Revoked => "revoked",
        AuthorizationStatus::Expired => "expired",
    };
    let hex = CanonicalWriter::new()
        .str_field(intent_id)
        .str_field(status_token)
        .str_field(authorizer)
        .str_field(session_id)
        .str_field(now.as_str())
        .str_field(detail)
        .digest_hex();
    ExecutionAuthorization {
        auth_id: format!("auth-{}", &hex[..16]),
        intent_id: intent_id.to_string(),
        status,
        created_by: authorizer.to_string(),
        session_id: session_id.to_string(),
        created_at: now.clone(),
        decided_at: now.clone(),
        auth_hash: Digest::from_computed(hex),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use warden_types::{DecisionKind, DecisionRecord};

    fn ts(s: &str) -> Timestamp {
        Timestamp::parse(s).unwrap()
    }

    fn bound_intent() -> (IntentLedger, ExecutionIntent) {
        let mut intents = IntentLedger::new();
        let record = DecisionRecord {
            decision_id: "dec-1".into(),
            request_id: "req-1".into(),
            human_id: "human-1".into(),
            decision: DecisionKind::Continue,
            reason: None,
            escalation_target: None,
            timestamp: ts("2026-03-01T00:00:00Z"),
            evidence_chain_hash: Digest::zero(),
        };
        let intent = intents.bind(&record, "sess-1").unwrap();
        (intents, intent)
    }

    #[test]
    fn clean_intent_is_authorized() {
        let (intents, intent) = bound_intent();
        let mut ledger = AuthorityLedger::new();
        let auth = ledger.authorize_execution(
            Some(&intent),
            &intents,
            "human-1",
            "sess-1",
            ts("2026-03-01T00:05:00Z"),
        );
        assert_eq!(auth.status, AuthorizationStatus::Authorized);
        assert_eq!(authorization_decision(Some(auth.status)), FinalDecision::Allow);
    }

    #[test]
    fn missing_intent_is_rejected() {
        let (intents, _) = bound_intent();
        let mut ledger = AuthorityLedger::new();
        let auth = ledger.authorize_execution(
            None,
            &intents,
            "human-1",
            "sess-1",
            ts("2026-03-01T00:05:00Z"),
        );
        assert_eq!(auth.status, AuthorizationStatus::Rejected);
    }

    #[test]
    fn revoked_intent_is_rejected() {
        let (mut intents, intent) = bound_intent();
        intents
            .revoke(&intent.intent_id, "human-1", "compromised", ts("2026-03-01T00:01:00Z"))
            .unwrap();
        let mut ledger = AuthorityLedger::new();
        let auth = ledger.authorize_execution(
            Some(&intent),
            &intents,
            "human-1",
            "sess-1",
            ts("2026-03-01T00:05:00Z"),
        );
        assert_eq!(auth.status, AuthorizationStatus::Rejected);
        assert_eq!(authorization_decision(Some(auth.status)), FinalDecision::Deny);
    }

    #[test]
    fn forged_intent_hash_is_rejected() {
        let (intents, intent) = bound_intent();
        let mut forged = intent;
        forged.created_by = "impostor".into();
        let mut ledger = AuthorityLedger::new();
        let auth = ledger.authorize_execution(
            Some(&forged),
            &intents,
            "human-1",
            "sess-1",
            ts("2026-03-01T00:05:00Z"),
        );
        assert_eq!(auth.status, AuthorizationStatus::Rejected);
    }

    #[test]
    fn second_authorization_for_the_same_intent_is_rejected() {
        let (intents, intent) = bound_intent();
        let mut ledger = AuthorityLedger::new();
        let first = ledger.authorize_execution(
            Some(&intent),
            &intents,
            "human-1",
            "sess-1",
            ts("2026-03-01T00:05:00Z"),
        );
        assert_eq!(first.status, AuthorizationStatus::Authorized);

        let second = ledger.authorize_execution(
            Some(&intent),
            &intents,
            "human-2",
            "sess-1",
            ts("2026-03-01T00:06:00Z"),
        );
        assert_eq!(second.status, AuthorizationStatus::Rejected);
    }

    #[test]
    fn revocation_flips_the_effective_status() {
        let (intents, intent) = bound_intent();
        let mut ledger = AuthorityLedger::new();
        let auth = ledger.authorize_execution(
            Some(&intent),
            &intents,
            "human-1",
            "sess-1",
            ts("2026-03-01T00:05:00Z"),
        );
        ledger
            .revoke_authorization(&auth.auth_id, "human-1", "scope changed", ts("2026-03-01T00:10:00Z"))
            .unwrap();
        assert_eq!(ledger.effective_status(&auth.auth_id), AuthorizationStatus::Revoked);
        assert_eq!(
            authorization_decision(Some(ledger.effective_status(&auth.auth_id))),
            FinalDecision::Deny
        );
    }

    #[test]
    fn expiry_maps_to_deny() {
        let (intents, intent) = bound_intent();
        let mut ledger = AuthorityLedger::new();
        let auth = ledger.authorize_execution(
            Some(&intent),
            &intents,
            "human-1",
            "sess-1",
            ts("2026-03-01T00:05:00Z"),
        );
        ledger
            .expire_authorization(&auth.auth_id, ts("2026-03-02T00:00:00Z"))
            .unwrap();
        assert_eq!(ledger.effective_status(&auth.auth_id), AuthorizationStatus::Expired);
    }

    #[test]
    fn absent_status_denies_by_default() {
        assert_eq!(authorization_decision(None), FinalDecision::Deny);
    }

    #[test]
    fn query_sees_effective_status() {
        let (intents, intent) = bound_intent();
        let mut ledger = AuthorityLedger::new();
        let auth = ledger.authorize_execution(
            Some(&intent),
            &intents,
            "human-1",
            "sess-1",
            ts("2026-03-01T00:05:00Z"),
        );
        assert_eq!(
            ledger
                .query(&AuthorizationFilter::new().with_status(AuthorizationStatus::Authorized))
                .len(),
            1
        );

        ledger
            .revoke_authorization(&auth.auth_id, "human-1", "withdrawn", ts("2026-03-01T00:06:00Z"))
            .unwrap();
        assert!(ledger
            .query(&AuthorizationFilter::new().with_status(AuthorizationStatus::Authorized))
            .is_empty());
        assert_eq!(
            ledger
                .query(
                    &AuthorizationFilter::new()
                        .with_session("sess-1")
                        .with_status(AuthorizationStatus::Revoked)
                )
                .len(),
            1
        );
    }
}
