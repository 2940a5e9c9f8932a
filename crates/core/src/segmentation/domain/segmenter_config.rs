use std::collections::HashSet;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::word_cleaner::WordCleaner;
use crate::shared::constants::*;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed config JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid config value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Tuning knobs for the segmenter. Every field falls back to its default
/// when missing from a config file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SegmenterConfig {
    pub max_words: usize,
    pub long_word_chars: usize,
    pub min_duration: f64,
    pub weak_punct_min_duration: f64,
    pub target_duration: f64,
    pub max_duration: f64,
    pub lookahead_words: usize,
    pub pause_threshold: f64,
    pub target_fallback_ratio: f64,
    pub gap_fill_threshold: f64,
    pub gap_fill_buffer: f64,
    pub break_words: Vec<String>,
    pub extra_word_chars: Vec<char>,
}

impl Default for SegmenterConfig {
    fn default() -> Self {
        Self {
            max_words: DEFAULT_MAX_WORDS,
            long_word_chars: DEFAULT_LONG_WORD_CHARS,
            min_duration: DEFAULT_MIN_DURATION,
            weak_punct_min_duration: DEFAULT_WEAK_PUNCT_MIN_DURATION,
            target_duration: DEFAULT_TARGET_DURATION,
            max_duration: DEFAULT_MAX_DURATION,
            lookahead_words: DEFAULT_LOOKAHEAD_WORDS,
            pause_threshold: DEFAULT_PAUSE_THRESHOLD,
            target_fallback_ratio: DEFAULT_TARGET_FALLBACK_RATIO,
            gap_fill_threshold: DEFAULT_GAP_FILL_THRESHOLD,
            gap_fill_buffer: DEFAULT_GAP_FILL_BUFFER,
            break_words: DEFAULT_BREAK_WORDS.iter().map(|w| w.to_string()).collect(),
            extra_word_chars: DEFAULT_EXTRA_WORD_CHARS.to_vec(),
        }
    }
}

impl SegmenterConfig {
    pub fn with_max_words(mut self, max_words: usize) -> Self {
        self.max_words = max_words;
        self
    }

    pub fn with_max_duration(mut self, max_duration: f64) -> Self {
        self.max_duration = max_duration;
        self
    }

    pub fn with_break_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.break_words = words.into_iter().map(Into::into).collect();
        self
    }

    pub fn cleaner(&self) -> WordCleaner {
        WordCleaner::new(self.extra_word_chars.clone())
    }

    /// Break words lowercased for comparison against normalized tokens.
    pub fn break_word_set(&self) -> HashSet<String> {
        self.break_words.iter().map(|w| w.to_lowercase()).collect()
    }

    /// Reject values the segmenter cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_words == 0 {
            return Err(invalid("max_words", "must be at least 1"));
        }
        if self.long_word_chars == 0 {
            return Err(invalid("long_word_chars", "must be at least 1"));
        }
        let durations = [
            ("min_duration", self.min_duration),
            ("weak_punct_min_duration", self.weak_punct_min_duration),
            ("target_duration", self.target_duration),
            ("max_duration", self.max_duration),
            ("pause_threshold", self.pause_threshold),
            ("gap_fill_threshold", self.gap_fill_threshold),
            ("gap_fill_buffer", self.gap_fill_buffer),
        ];
        for (field, value) in durations {
            if !value.is_finite() || value < 0.0 {
                return Err(invalid(field, "must be a finite, non-negative number of seconds"));
            }
        }
        if self.max_duration <= 0.0 {
            return Err(invalid("max_duration", "must be positive"));
        }
        if self.min_duration > self.max_duration {
            return Err(invalid(
                "min_duration",
                format!("{} exceeds max_duration {}", self.min_duration, self.max_duration),
            ));
        }
        if self.target_duration > self.max_duration {
            return Err(invalid(
                "target_duration",
                format!("{} exceeds max_duration {}", self.target_duration, self.max_duration),
            ));
        }
        if !(0.0..=1.0).contains(&self.target_fallback_ratio) {
            return Err(invalid("target_fallback_ratio", "must be within 0.0..=1.0"));
        }
        Ok(())
    }
}

fn invalid(field: &'static str, reason: impl Into<String>) -> ConfigError {
    ConfigError::Invalid {
        field,
        reason: reason.into(),
    }
}
