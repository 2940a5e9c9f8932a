use std::fs;
use std::path::Path;

use crate::transcript::domain::transcription::Transcription;
use crate::transcript::domain::transcription_reader::{TranscriptReadError, TranscriptionReader};

/// Reads provider output stored as `{ "text": ..., "words": [...] }` JSON.
pub struct JsonTranscriptionReader;

impl JsonTranscriptionReader {
    pub fn new() -> Self {
        Self
    }

    pub fn parse(json: &str) -> Result<Transcription, TranscriptReadError> {
        Ok(serde_json::from_str(json)?)
    }
}

impl Default for JsonTranscriptionReader {
    fn default() -> Self {
        Self::new()
    }
}

impl TranscriptionReader for JsonTranscriptionReader {
    fn read(&self, path: &Path) -> Result<Transcription, TranscriptReadError> {
        let json = fs::read_to_string(path).map_err(|source| TranscriptReadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let transcription = Self::parse(&json)?;
        log::debug!(
            "Read transcription from {} ({} words)",
            path.display(),
            transcription.words.len()
        );
        Ok(transcription)
    }
}
