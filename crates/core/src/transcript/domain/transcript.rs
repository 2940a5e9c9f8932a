use serde::{Deserialize, Serialize};

/// One timed word as delivered by a speech-to-text provider.
///
/// Field names on the wire follow the provider payload (`word`, `start`, `end`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TranscriptWord {
    pub word: String,
    #[serde(rename = "start")]
    pub start_time: f64,
    #[serde(rename = "end")]
    pub end_time: f64,
}

impl TranscriptWord {
    pub fn new(word: impl Into<String>, start_time: f64, end_time: f64) -> Self {
        Self {
            word: word.into(),
            start_time,
            end_time,
        }
    }

    pub fn duration(&self) -> f64 {
        self.end_time - self.start_time
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_transcript_word_fields() {
        let w = TranscriptWord::new("hallo", 1.0, 1.5);
        assert_eq!(w.word, "hallo");
        assert_eq!(w.start_time, 1.0);
        assert_eq!(w.end_time, 1.5);
    }

    #[test]
    fn test_transcript_word_duration() {
        let w = TranscriptWord::new("test", 2.0, 2.8);
        assert_relative_eq!(w.duration(), 0.8, epsilon = 0.001);
    }

    #[test]
    fn test_deserializes_provider_field_names() {
        let w: TranscriptWord =
            serde_json::from_str(r#"{"word":"Tag","start":0.5,"end":1.0}"#).unwrap();
        assert_eq!(w, TranscriptWord::new("Tag", 0.5, 1.0));
    }

    #[test]
    fn test_missing_field_is_rejected() {
        let result: Result<TranscriptWord, _> = serde_json::from_str(r#"{"word":"Tag","start":0.5}"#);
        assert!(result.is_err());
    }
}
