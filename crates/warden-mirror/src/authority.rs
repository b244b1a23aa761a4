use warden_types::{AuthorizationStatus, ExecutionIntent};

/// What the mirror needs to re-derive an authorization decision. Ledger
/// facts (hash validity, revocation, prior issuance) arrive as inputs; the
/// mirror re-applies the rule, not the bookkeeping.
#[derive(Clone, Debug)]
pub struct MirrorAuthorizationInputs<'a> {
    pub intent: Option<&'a ExecutionIntent>,
    pub authorizer: &'a str,
    pub session_id: &'a str,
    pub intent_hash_valid: bool,
    pub intent_revoked: bool,
    pub prior_authorization_exists: bool,
}

/// Re-derive the authorization status from the five conditions.
pub fn reauthorize(inputs: &MirrorAuthorizationInputs<'_>) -> AuthorizationStatus {
    let Some(intent) = inputs.intent else {
        return AuthorizationStatus::Rejected;
    };
    let identifiers_complete = !intent.intent_id.is_empty()
        && !intent.decision_id.is_empty()
        && !intent.session_id.is_empty()
        && !intent.created_by.is_empty()
        && !inputs.authorizer.is_empty()
        && !inputs.session_id.is_empty();

    let authorized = identifiers_complete
        && inputs.intent_hash_valid
        && !inputs.intent_revoked
        && !inputs.prior_authorization_exists;

    if authorized {
        AuthorizationStatus::Authorized
    } else {
        AuthorizationStatus::Rejected
    }
}
