use serde::{Deserialize, Serialize};

use warden_types::{BugType, FinalDecision, NarrativeStep};

use crate::registry::explanation;

/// Which language a narrative renders in. Both are always carried; callers
/// choose at render time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    English,
    Hindi,
}

/// A composed explanation of one decision about one bug class.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Narrative {
    pub decision: FinalDecision,
    pub bug_type: BugType,
    pub steps: Vec<NarrativeStep>,
}

fn step(english: impl Into<String>, hindi: impl Into<String>) -> NarrativeStep {
    NarrativeStep {
        english: english.into(),
        hindi: hindi.into(),
    }
}

/// Compose the narrative for a (decision, bug type) pair.
///
/// The step sequence is fixed per pair: an opening line for the decision,
/// the registered explanation, and a closing line naming what happens next.
/// Equal inputs always produce equal narratives.
pub fn compose_narrative(decision: FinalDecision, bug: BugType) -> Narrative {
    let exp = explanation(bug);
    let mut steps = Vec::with_capacity(4);

    steps.push(match decision {
        FinalDecision::Allow => step(
            "The request passed every validation layer.",
            "अनुरोध हर सत्यापन परत से सफलतापूर्वक गुज़रा।",
        ),
        FinalDecision::Deny => step(
            "The request was denied by the validation pipeline.",
            "सत्यापन पाइपलाइन ने अनुरोध को अस्वीकार कर दिया।",
        ),
        FinalDecision::Escalate => step(
            "The request was escalated for a human decision.",
            "अनुरोध मानवीय निर्णय के लिए आगे बढ़ाया गया।",
        ),
    });

    steps.push(step(exp.english.clone(), exp.hindi.clone()));

    if let Some(cwe) = &exp.cwe {
        steps.push(step(
            format!("The report is classified under {cwe}."),
            format!("रिपोर्ट {cwe} के अंतर्गत वर्गीकृत है।"),
        ));
    }

    steps.push(match decision {
        FinalDecision::Allow => step(
            "Execution may proceed under the recorded authorization.",
            "दर्ज प्राधिकरण के अंतर्गत निष्पादन आगे बढ़ सकता है।",
        ),
        FinalDecision::Deny => step(
            "No execution will take place; the denial is on the audit trail.",
            "कोई निष्पादन नहीं होगा; अस्वीकृति ऑडिट ट्रेल पर दर्ज है।",
        ),
        FinalDecision::Escalate => step(
            "Nothing executes until a human records a decision.",
            "जब तक कोई मानव निर्णय दर्ज नहीं करता, कुछ भी निष्पादित नहीं होगा।",
        ),
    });

    Narrative {
        decision,
        bug_type: bug,
        steps,
    }
}

/// Render a narrative as numbered plain text in one language.
pub fn render(narrative: &Narrative, language: Language) -> String {
    narrative
        .steps
        .iter()
        .enumerate()
        .map(|(i, s)| {
            let text = match language {
                Language::English => &s.english,
                Language::Hindi => &s.hindi,
            };
            format!("{}. {}", i + 1, text)
        })
        .collect::<Vec<_>>()
        .join("\n")
}
