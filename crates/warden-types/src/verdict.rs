use serde::{Deserialize, Serialize};

/// Outcome of per-action validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationResult {
    Allow,
    Deny,
    Escalate,
}

/// The aggregated outcome of the whole decision pipeline for one request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FinalDecision {
    Allow,
    Deny,
    Escalate,
}

/// Confidence buckets. `High` is the ceiling: there is no certainty bucket,
/// and nothing the kernel computes can express full confidence on its own.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Confidence {
    Low,
    Medium,
    High,
}

/// Report severity as supplied by triage callers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

/// Class of the targeted surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetClass {
    Development,
    Staging,
    Production,
}

/// Scope/eligibility outcome.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EligibilityDecision {
    Eligible,
    NotEligible,
    Duplicate,
    NeedsReview,
}

/// Pre-handoff readiness.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadinessDecision {
    ReadyForBrowser,
    ReviewRequired,
    NotReady,
}

/// How strongly a human must be in the loop for a handoff.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HumanPresence {
    Blocking,
    Required,
    Optional,
}

/// Browser and native actions the capability layer governs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BrowserAction {
    Click,
    Read,
    Scroll,
    Extract,
    Screenshot,
    Navigate,
    FillInput,
    SubmitForm,
    FileUpload,
    ScriptExecute,
}

/// Risk tier of a governed action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskTier {
    Low,
    Medium,
    High,
    Forbidden,
}

/// Verdict of the capability governance table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CapabilityDecision {
    Allowed,
    HumanRequired,
    Denied,
}
