pub mod cue_formatter;
pub mod cue_parser;
pub mod cue_validation;
pub mod subtitle_export;
pub mod timed_text;
