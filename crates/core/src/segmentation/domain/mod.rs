pub mod cue;
pub mod gap_filler;
pub mod phrase_break;
pub mod punctuation;
pub mod segment_observer;
pub mod segmenter;
pub mod segmenter_config;
pub mod transcript_locator;
pub mod word_cleaner;
