//! Keyword classifier and curated coping guides used when no hosted model
//! is configured.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use strum::{Display, EnumIter, IntoEnumIterator};

/// Topic a message is routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum GuideCategory {
    Stress,
    Panic,
    Depression,
    Sleep,
    General,
}

impl GuideCategory {
    fn keywords(self) -> &'static [&'static str] {
        match self {
            GuideCategory::Stress => &[
                "stress", "pressure", "exam", "deadline", "overwhelm", "burnout", "workload",
            ],
            GuideCategory::Panic => &[
                "panic", "anxiety", "anxious", "attack", "racing", "can't breathe", "nervous",
            ],
            GuideCategory::Depression => &[
                "sad", "hopeless", "depress", "empty", "lonely", "worthless", "numb",
            ],
            GuideCategory::Sleep => &[
                "sleep", "insomnia", "awake", "nightmare", "tired", "exhausted", "bedtime",
            ],
            GuideCategory::General => &[],
        }
    }

    /// Short coping tips; one is picked per reply.
    pub fn tips(self) -> &'static [&'static str] {
        match self {
            GuideCategory::Stress => &[
                "Try slow, deep breathing for two minutes: in for four counts, out for six.",
                "Drink some water and take a short walk, even five minutes helps.",
                "Write your worries down before bed so your mind can set them aside.",
            ],
            GuideCategory::Panic => &[
                "Try 5-4-3-2-1 grounding: name five things you see, four you feel, three you hear, two you smell, one you taste.",
                "Call or message someone you trust and let them know how you feel.",
                "Put on calming sounds and breathe along with them. This feeling will pass.",
            ],
            GuideCategory::Depression => &[
                "Set one small goal for today, like making your bed or stepping outside.",
                "Send one person a message today, even a simple 'hi'.",
                "Write down one good thing about today, however small.",
            ],
            GuideCategory::Sleep => &[
                "Keep the lights dim for the hour before bed.",
                "Put screens away an hour before sleep.",
                "A warm shower before bed can help your body wind down.",
            ],
            GuideCategory::General => &[
                "Take a moment to notice how you're feeling without judging it.",
                "A short walk or a few stretches can shift your mood.",
                "Reaching out to a friend can make a heavy day feel lighter.",
            ],
        }
    }

    /// Follow-up actions surfaced next to the reply.
    pub fn suggested_actions(self) -> Vec<String> {
        let actions: &[&str] = match self {
            GuideCategory::Stress => &[
                "Try a breathing exercise",
                "Take a short break",
                "Log your mood",
            ],
            GuideCategory::Panic => &[
                "Try grounding (5-4-3-2-1)",
                "Breathe slowly",
                "Contact someone you trust",
            ],
            GuideCategory::Depression => &[
                "Set one small goal",
                "Reach out to a friend",
                "Log your mood",
            ],
            GuideCategory::Sleep => &[
                "Start a wind-down routine",
                "Limit screens before bed",
                "Log your mood",
            ],
            GuideCategory::General => &[
                "Log your mood",
                "Read today's tip",
                "Take a mindful minute",
            ],
        };
        actions.iter().map(|a| (*a).to_owned()).collect()
    }
}

/// Route `text` to the category with the most keyword hits; ties go to the
/// earlier category and no hits means [`GuideCategory::General`].
pub fn classify(text: &str) -> GuideCategory {
    let lowered = text.to_lowercase();
    let mut best = (GuideCategory::General, 0usize);
    for category in GuideCategory::iter() {
        let hits = category
            .keywords()
            .iter()
            .filter(|k| lowered.contains(*k))
            .count();
        if hits > best.1 {
            best = (category, hits);
        }
    }
    best.0
}

/// Pick a tip for `category`, stable for the same `text`.
pub fn pick_tip(category: GuideCategory, text: &str) -> &'static str {
    let tips = category.tips();
    let mut hasher = DefaultHasher::new();
    text.hash(&mut hasher);
    tips[(hasher.finish() % tips.len() as u64) as usize]
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn classifies_by_keyword() {
        assert_eq!(classify("I am stressed with exams"), GuideCategory::Stress);
        assert_eq!(classify("Having an anxiety attack"), GuideCategory::Panic);
        assert_eq!(classify("I feel very sad and hopeless"), GuideCategory::Depression);
        assert_eq!(classify("Suffering from insomnia"), GuideCategory::Sleep);
        assert_eq!(classify("Just need some advice"), GuideCategory::General);
    }

    #[test]
    fn tip_choice_is_stable() {
        let a = pick_tip(GuideCategory::Sleep, "can't sleep");
        let b = pick_tip(GuideCategory::Sleep, "can't sleep");
        assert_eq!(a, b);
        assert!(GuideCategory::Sleep.tips().contains(&a));
    }

    #[test]
    fn every_category_has_tips_and_actions() {
        for category in GuideCategory::iter() {
            assert!(!category.tips().is_empty(), "{category} has no tips");
            assert!(!category.suggested_actions().is_empty());
        }
    }
}
