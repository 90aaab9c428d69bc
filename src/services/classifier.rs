use tracing::debug;

use crate::model::emotion::{Emotion, EmotionResult};
use crate::services::normalize;

pub const SAD_WORDS: &[&str] = &["tired", "alone", "empty", "sad"];
pub const ANGRY_WORDS: &[&str] = &["angry", "mad", "furious"];

// Evaluated in order; a later matching group overwrites an earlier one.
const RULE_GROUPS: &[(&[&str], Emotion)] = &[
    (SAD_WORDS, Emotion::Sad),
    (ANGRY_WORDS, Emotion::Angry),
];

/// Every trigger word, in declaration order (sad group first).
pub fn vocabulary() -> impl Iterator<Item = &'static str> {
    SAD_WORDS.iter().chain(ANGRY_WORDS.iter()).copied()
}

pub fn classify(text: &str) -> EmotionResult {
    let lower = normalize::fold_case(text);

    let mut emotion = Emotion::Neutral;
    for (words, label) in RULE_GROUPS {
        if words.iter().any(|w| lower.contains(w)) {
            emotion = *label;
        }
    }

    let keywords: Vec<&'static str> = vocabulary().filter(|w| lower.contains(w)).collect();

    debug!(%emotion, keywords = keywords.len(), input_len = text.len(), "classified input");

    EmotionResult::new(emotion, keywords)
}
