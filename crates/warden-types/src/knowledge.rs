use serde::{Deserialize, Serialize};

/// Closed registry of bug classes the kernel can explain.
///
/// The kernel does not interpret bug semantics; this set exists so that
/// explanations and narratives are looked up, never guessed. Anything
/// outside the set resolves to `Unknown`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BugType {
    CrossSiteScripting,
    SqlInjection,
    CrossSiteRequestForgery,
    InsecureDirectObjectReference,
    AuthenticationBypass,
    InformationDisclosure,
    OpenRedirect,
    ServerSideRequestForgery,
    PathTraversal,
    RaceCondition,
    BusinessLogicFlaw,
    Unknown,
}

/// Bilingual explanation of a bug class.
///
/// `Unknown` carries no CWE; the kernel never fabricates one.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BugExplanation {
    pub bug_type: BugType,
    pub english: String,
    pub hindi: String,
    pub cwe: Option<String>,
}

/// One step of a composed narrative, in both languages.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NarrativeStep {
    pub english: String,
    pub hindi: String,
}
