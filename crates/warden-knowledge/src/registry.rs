use tracing::debug;

use warden_types::{BugExplanation, BugType};

/// Exact-match lookup of a bug-type token.
///
/// Anything that is not a registered token resolves to [`BugType::Unknown`].
/// There is no string-similarity fallback and no partial matching.
pub fn lookup_bug_type(token: &str) -> BugType {
    let bug = match token {
        "cross_site_scripting" => BugType::CrossSiteScripting,
        "sql_injection" => BugType::SqlInjection,
        "cross_site_request_forgery" => BugType::CrossSiteRequestForgery,
        "insecure_direct_object_reference" => BugType::InsecureDirectObjectReference,
        "authentication_bypass" => BugType::AuthenticationBypass,
        "information_disclosure" => BugType::InformationDisclosure,
        "open_redirect" => BugType::OpenRedirect,
        "server_side_request_forgery" => BugType::ServerSideRequestForgery,
        "path_traversal" => BugType::PathTraversal,
        "race_condition" => BugType::RaceCondition,
        "business_logic_flaw" => BugType::BusinessLogicFlaw,
        _ => BugType::Unknown,
    };
    if bug == BugType::Unknown {
        debug!(token, "bug type token not in registry");
    }
    bug
}

/// The registered explanation for a bug type, in both languages.
pub fn explanation(bug: BugType) -> BugExplanation {
    let (english, hindi, cwe) = match bug {
        BugType::CrossSiteScripting => (
            "Untrusted input is reflected into a page and runs as script in the victim's browser.",
            "अविश्वसनीय इनपुट पृष्ठ में वापस भेजा जाता है और पीड़ित के ब्राउज़र में स्क्रिप्ट के रूप में चलता है।",
            Some("CWE-79"),
        ),
        BugType::SqlInjection => (
            "Untrusted input reaches a database query and changes its structure.",
            "अविश्वसनीय इनपुट डेटाबेस क्वेरी तक पहुँचता है और उसकी संरचना बदल देता है।",
            Some("CWE-89"),
        ),
        BugType::CrossSiteRequestForgery => (
            "A victim's browser is made to send a state-changing request the victim never intended.",
            "पीड़ित के ब्राउज़र से ऐसा अनुरोध भेजवाया जाता है जो स्थिति बदलता है और जिसका पीड़ित ने कभी इरादा नहीं किया।",
            Some("CWE-352"),
        ),
        BugType::InsecureDirectObjectReference => (
            "An object is fetched by caller-supplied identifier without checking the caller may access it.",
            "कॉलर द्वारा दिए गए पहचानकर्ता से ऑब्जेक्ट लाया जाता है, बिना यह जाँचे कि कॉलर को उस तक पहुँच की अनुमति है।",
            Some("CWE-639"),
        ),
        BugType::AuthenticationBypass => (
            "A protected path can be reached without completing authentication.",
            "संरक्षित मार्ग तक प्रमाणीकरण पूरा किए बिना पहुँचा जा सकता है।",
            Some("CWE-287"),
        ),
        BugType::InformationDisclosure => (
            "Data meant to stay private is exposed to an unauthorized party.",
            "निजी रहने वाला डेटा अनधिकृत पक्ष के सामने उजागर हो जाता है।",
            Some("CWE-200"),
        ),
        BugType::OpenRedirect => (
            "A redirect target is taken from untrusted input, sending users to attacker-chosen sites.",
            "रीडायरेक्ट का लक्ष्य अविश्वसनीय इनपुट से लिया जाता है, जिससे उपयोगकर्ता हमलावर द्वारा चुनी गई साइटों पर भेजे जाते हैं।",
            Some("CWE-601"),
        ),
        BugType::ServerSideRequestForgery => (
            "The server is induced to make requests to targets the attacker chooses.",
            "सर्वर को हमलावर द्वारा चुने गए लक्ष्यों की ओर अनुरोध भेजने के लिए प्रेरित किया जाता है।",
            Some("CWE-918"),
        ),
        BugType::PathTraversal => (
            "Crafted path segments escape the intended directory and reach other files.",
            "रची गई पथ कड़ियाँ निर्धारित डायरेक्टरी से बाहर निकलकर अन्य फ़ाइलों तक पहुँच जाती हैं।",
            Some("CWE-22"),
        ),
        BugType::RaceCondition => (
            "Concurrent operations interleave so that a check and its use disagree.",
            "समवर्ती क्रियाएँ इस तरह गुँथ जाती हैं कि जाँच और उसका उपयोग असंगत हो जाते हैं।",
            Some("CWE-362"),
        ),
        BugType::BusinessLogicFlaw => (
            "The application's rules can be sequenced or combined in a way their authors never intended.",
            "एप्लिकेशन के नियमों को ऐसे क्रम या संयोजन में चलाया जा सकता है जिसका उनके रचनाकारों ने कभी इरादा नहीं किया।",
            Some("CWE-840"),
        ),
        BugType::Unknown => (
            "This report does not match any registered bug class.",
            "यह रिपोर्ट किसी पंजीकृत बग वर्ग से मेल नहीं खाती।",
            None,
        ),
    };
    BugExplanation {
        bug_type: bug,
        english: english.to_string(),
        hindi: hindi.to_string(),
        cwe: cwe.map(str::to_string),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [BugType; 12] = [
        BugType::CrossSiteScripting,
        BugType::SqlInjection,
        BugType::CrossSiteRequestForgery,
        BugType::InsecureDirectObjectReference,
        BugType::AuthenticationBypass,
        BugType::InformationDisclosure,
        BugType::OpenRedirect,
        BugType::ServerSideRequestForgery,
        BugType::PathTraversal,
        BugType::RaceCondition,
        BugType::BusinessLogicFlaw,
        BugType::Unknown,
    ];

    #[test]
    fn lookup_is_exact() {
        assert_eq!(lookup_bug_type("sql_injection"), BugType::SqlInjection);
        assert_eq!(lookup_bug_type("SQL_INJECTION"), BugType::Unknown);
        assert_eq!(lookup_bug_type("sql injection"), BugType::Unknown);
        assert_eq!(lookup_bug_type("sql_injectio"), BugType::Unknown);
        assert_eq!(lookup_bug_type(""), BugType::Unknown);
    }

    #[test]
    fn every_explanation_is_bilingual() {
        for bug in ALL {
            let exp = explanation(bug);
            assert!(!exp.english.is_empty(), "{bug:?}");
            assert!(!exp.hindi.is_empty(), "{bug:?}");
        }
    }

    #[test]
    fn unknown_has_no_cwe() {
        assert!(explanation(BugType::Unknown).cwe.is_none());
    }

    #[test]
    fn registered_types_carry_a_cwe() {
        for bug in ALL.into_iter().filter(|b| *b != BugType::Unknown) {
            let exp = explanation(bug);
            assert!(exp.cwe.as_deref().unwrap_or("").starts_with("CWE-"), "{bug:?}");
        }
    }

    #[test]
    fn explanation_is_deterministic() {
        assert_eq!(
            explanation(BugType::PathTraversal),
            explanation(BugType::PathTraversal)
        );
    }
}
