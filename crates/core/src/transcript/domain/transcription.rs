use serde::{Deserialize, Serialize};

use super::transcript::TranscriptWord;

/// Full provider output: the transcript text plus its word timings.
///
/// `words` may be missing from the payload entirely; that case is handled
/// by [`MissingWordsPolicy`] in the pipeline.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Transcription {
    pub text: String,
    #[serde(default)]
    pub words: Vec<TranscriptWord>,
    /// Media duration in seconds, when the provider reports it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
}

impl Transcription {
    pub fn new(text: impl Into<String>, words: Vec<TranscriptWord>) -> Self {
        Self {
            text: text.into(),
            words,
            duration: None,
        }
    }

    pub fn has_words(&self) -> bool {
        !self.words.is_empty()
    }
}

/// What to do when a transcription carries text but no word timings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MissingWordsPolicy {
    /// Treat the transcription as unusable.
    #[default]
    Fail,
    /// Show the whole text as a single unsegmented cue.
    WholeText,
}
