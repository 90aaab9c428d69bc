use std::fmt;

use serde::Serialize;

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    #[default]
    Neutral,
    Sad,
    Angry,
}

impl Emotion {
    /// Fixed intensity attached to each label. Not a computed score.
    pub fn intensity(self) -> f64 {
        match self {
            Emotion::Neutral => 0.0,
            Emotion::Sad => 0.7,
            Emotion::Angry => 0.8,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Emotion::Neutral => "neutral",
            Emotion::Sad => "sad",
            Emotion::Angry => "angry",
        }
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Field order is the JSON key order.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct EmotionResult {
    pub emotion: Emotion,
    pub intensity: f64,
    pub keywords: Vec<&'static str>,
}

impl EmotionResult {
    pub fn new(emotion: Emotion, keywords: Vec<&'static str>) -> Self {
        Self {
            emotion,
            intensity: emotion.intensity(),
            keywords,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_serialize_lowercase() {
        assert_eq!(serde_json::to_string(&Emotion::Neutral).unwrap(), "\"neutral\"");
        assert_eq!(serde_json::to_string(&Emotion::Sad).unwrap(), "\"sad\"");
        assert_eq!(serde_json::to_string(&Emotion::Angry).unwrap(), "\"angry\"");
        assert_eq!(Emotion::Angry.to_string(), "angry");
    }

    #[test]
    fn result_takes_intensity_from_label() {
        let r = EmotionResult::new(Emotion::Sad, vec!["tired"]);
        assert_eq!(r.intensity, 0.7);
        assert_eq!(EmotionResult::new(Emotion::Neutral, vec![]).intensity, 0.0);
        assert_eq!(EmotionResult::new(Emotion::Angry, vec![]).intensity, 0.8);
    }
}
