use warden_types::BugType;

/// The registry restated as a token table; anything off the table is
/// `Unknown`.
const TOKENS: &[(&str, BugType)] = &[
    ("cross_site_scripting", BugType::CrossSiteScripting),
    ("sql_injection", BugType::SqlInjection),
    ("cross_site_request_forgery", BugType::CrossSiteRequestForgery),
    ("insecure_direct_object_reference", BugType::InsecureDirectObjectReference),
    ("authentication_bypass", BugType::AuthenticationBypass),
    ("information_disclosure", BugType::InformationDisclosure),
    ("open_redirect", BugType::OpenRedirect),
    ("server_side_request_forgery", BugType::ServerSideRequestForgery),
    ("path_traversal", BugType::PathTraversal),
    ("race_condition", BugType::RaceCondition),
    ("business_logic_flaw", BugType::BusinessLogicFlaw),
];

/// Re-derive a bug-type lookup by scanning the token table.
pub fn relookup_bug_type(token: &str) -> BugType {
    TOKENS
        .iter()
        .find(|(t, _)| *t == token)
        .map(|(_, b)| *b)
        .unwrap_or(BugType::Unknown)
}
