pub mod transcript;
pub mod transcription;
pub mod transcription_reader;
pub mod validation;
