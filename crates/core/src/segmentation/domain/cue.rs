use std::fmt;

use serde::Serialize;

/// Which phrase-break signal ended a cue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PhraseSignal {
    /// The cue's last word is a configured break word.
    BreakWord,
    /// A breath pause precedes the cue's last word.
    Pause,
    /// No clean signal, but the cue is long enough to break anyway.
    TargetReached,
}

/// Why a cue was closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BreakReason {
    LongWord,
    MaxWords,
    StrongPunctuation,
    WeakPunctuation,
    SmartBreak(PhraseSignal),
    MaxDuration,
    LastWord,
}

impl BreakReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            BreakReason::LongWord => "long_word",
            BreakReason::MaxWords => "max_words",
            BreakReason::StrongPunctuation => "strong_punctuation",
            BreakReason::WeakPunctuation => "weak_punctuation",
            BreakReason::SmartBreak(PhraseSignal::BreakWord) => "smart_break:break_word",
            BreakReason::SmartBreak(PhraseSignal::Pause) => "smart_break:pause",
            BreakReason::SmartBreak(PhraseSignal::TargetReached) => "smart_break:target",
            BreakReason::MaxDuration => "max_duration",
            BreakReason::LastWord => "last_word",
        }
    }
}

impl fmt::Display for BreakReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One subtitle cue produced by the segmenter.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Cue {
    pub start_time: f64,
    pub end_time: f64,
    pub text: String,
    pub reason: BreakReason,
    /// Index of the cue's first word in the input word list.
    pub first_word: usize,
    pub word_count: usize,
}

impl Cue {
    pub fn duration(&self) -> f64 {
        self.end_time - self.start_time
    }

    pub fn last_word(&self) -> usize {
        self.first_word + self.word_count.saturating_sub(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn cue(start: f64, end: f64) -> Cue {
        Cue {
            start_time: start,
            end_time: end,
            text: "Guten Tag".to_string(),
            reason: BreakReason::LastWord,
            first_word: 3,
            word_count: 2,
        }
    }

    #[test]
    fn test_duration() {
        assert_relative_eq!(cue(1.0, 2.4).duration(), 1.4, epsilon = 1e-9);
    }

    #[test]
    fn test_last_word_index() {
        assert_eq!(cue(0.0, 1.0).last_word(), 4);
    }

    #[test]
    fn test_reason_display() {
        assert_eq!(BreakReason::MaxWords.to_string(), "max_words");
        assert_eq!(
            BreakReason::SmartBreak(PhraseSignal::Pause).to_string(),
            "smart_break:pause"
        );
    }

    #[test]
    fn test_serializes_reason_snake_case() {
        let json = serde_json::to_value(cue(0.0, 1.0)).unwrap();
        assert_eq!(json["reason"], "last_word");
        let json = serde_json::to_value(BreakReason::SmartBreak(PhraseSignal::BreakWord)).unwrap();
        assert_eq!(json["smart_break"], "break_word");
    }
}
