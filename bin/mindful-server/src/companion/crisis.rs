//! Crisis phrase detection and the fixed support-resource list.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Lower-case phrases that flag a message as a possible crisis.
const CRISIS_PHRASES: &[&str] = &[
    "suicide",
    "suicidal",
    "kill myself",
    "killing myself",
    "end my life",
    "ending my life",
    "want to die",
    "wanna die",
    "better off dead",
    "no reason to live",
    "self harm",
    "self-harm",
    "hurt myself",
    "cut myself",
    "overdose",
];

/// Returns `true` when `text` contains any crisis phrase (case-insensitive).
pub fn detect_crisis(text: &str) -> bool {
    let lowered = text.to_lowercase();
    CRISIS_PHRASES.iter().any(|p| lowered.contains(p))
}

/// A single support-resource record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CrisisResource {
    pub name: String,
    pub contact: String,
    pub description: String,
    pub available: String,
}

/// The hardcoded support resources, always four entries in this order.
pub fn crisis_resources() -> Vec<CrisisResource> {
    [
        (
            "988 Suicide & Crisis Lifeline",
            "Call or text 988",
            "Free, confidential support for people in distress.",
            "24/7",
        ),
        (
            "Crisis Text Line",
            "Text HOME to 741741",
            "Text with a trained crisis counselor.",
            "24/7",
        ),
        (
            "SAMHSA National Helpline",
            "1-800-662-4357",
            "Treatment referral and information for mental health and substance use.",
            "24/7, 365 days a year",
        ),
        (
            "Emergency Services",
            "911",
            "Call if you or someone else is in immediate danger.",
            "24/7",
        ),
    ]
    .into_iter()
    .map(|(name, contact, description, available)| CrisisResource {
        name: name.to_owned(),
        contact: contact.to_owned(),
        description: description.to_owned(),
        available: available.to_owned(),
    })
    .collect()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn detects_phrases_case_insensitively() {
        assert!(detect_crisis("Sometimes I want to DIE"));
        assert!(detect_crisis("thinking about self-harm again"));
        assert!(!detect_crisis("I had a stressful day at work"));
        assert!(!detect_crisis(""));
    }

    #[test]
    fn resources_are_fixed() {
        let resources = crisis_resources();
        assert_eq!(resources.len(), 4);
        assert_eq!(resources, crisis_resources());
        assert_eq!(resources[0].contact, "Call or text 988");
    }
}
