pub mod json_transcription_reader;
