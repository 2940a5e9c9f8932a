use std::path::{Path, PathBuf};

use thiserror::Error;

use super::transcription::Transcription;
use super::validation::ValidationError;

#[derive(Error, Debug)]
pub enum TranscriptReadError {
    #[error("failed to read transcription from {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed transcription JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("transcription contains no word timings")]
    MissingWords,
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Domain interface for loading a transcription produced by an external
/// speech-to-text provider.
pub trait TranscriptionReader: Send {
    fn read(&self, path: &Path) -> Result<Transcription, TranscriptReadError>;
}
