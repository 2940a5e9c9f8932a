use thiserror::Error;

use super::transcript::TranscriptWord;

/// Structural problems with a word list. Raised before any segmentation work.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("word list is empty")]
    EmptyWordList,
    #[error("word {index} has no text")]
    MissingText { index: usize },
    #[error("word {index} has a non-finite timestamp")]
    NonFiniteTime { index: usize },
    #[error("word {index} has a negative timestamp")]
    NegativeTime { index: usize },
    #[error("word {index} ends before it starts ({start}s >= {end}s)")]
    InvertedTime { index: usize, start: f64, end: f64 },
    #[error("word {index} starts before the previous word ({start}s < {previous_start}s)")]
    OutOfOrder {
        index: usize,
        start: f64,
        previous_start: f64,
    },
}

/// Validate every word in the list.
///
/// Checks shape (non-empty text, finite non-negative times, `start < end`)
/// and that start times never go backwards.
pub fn validate_words(words: &[TranscriptWord]) -> Result<(), ValidationError> {
    if words.is_empty() {
        return Err(ValidationError::EmptyWordList);
    }

    let mut previous_start: Option<f64> = None;
    for (index, w) in words.iter().enumerate() {
        validate_word(index, w)?;
        if let Some(previous_start) = previous_start {
            if w.start_time < previous_start {
                return Err(ValidationError::OutOfOrder {
                    index,
                    start: w.start_time,
                    previous_start,
                });
            }
        }
        previous_start = Some(w.start_time);
    }
    Ok(())
}

fn validate_word(index: usize, w: &TranscriptWord) -> Result<(), ValidationError> {
    if w.word.trim().is_empty() {
        return Err(ValidationError::MissingText { index });
    }
    if !w.start_time.is_finite() || !w.end_time.is_finite() {
        return Err(ValidationError::NonFiniteTime { index });
    }
    if w.start_time < 0.0 || w.end_time < 0.0 {
        return Err(ValidationError::NegativeTime { index });
    }
    if w.start_time >= w.end_time {
        return Err(ValidationError::InvertedTime {
            index,
            start: w.start_time,
            end: w.end_time,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn word(w: &str, start: f64, end: f64) -> TranscriptWord {
        TranscriptWord::new(w, start, end)
    }

    #[test]
    fn test_empty_list_is_rejected() {
        assert_eq!(validate_words(&[]), Err(ValidationError::EmptyWordList));
    }

    #[test]
    fn test_well_formed_list_passes() {
        let words = vec![word("Guten", 0.0, 0.5), word("Tag", 0.5, 1.0)];
        assert!(validate_words(&words).is_ok());
    }

    #[rstest]
    #[case::blank_text(word("  ", 0.0, 0.5), ValidationError::MissingText { index: 1 })]
    #[case::nan_start(word("a", f64::NAN, 0.5), ValidationError::NonFiniteTime { index: 1 })]
    #[case::infinite_end(word("a", 0.5, f64::INFINITY), ValidationError::NonFiniteTime { index: 1 })]
    #[case::negative_start(word("a", -0.1, 0.5), ValidationError::NegativeTime { index: 1 })]
    #[case::equal_times(word("a", 1.0, 1.0), ValidationError::InvertedTime { index: 1, start: 1.0, end: 1.0 })]
    #[case::inverted(word("a", 1.5, 1.0), ValidationError::InvertedTime { index: 1, start: 1.5, end: 1.0 })]
    fn test_malformed_word_is_rejected(#[case] bad: TranscriptWord, #[case] expected: ValidationError) {
        let words = vec![word("ok", 0.0, 0.4), bad];
        assert_eq!(validate_words(&words), Err(expected));
    }

    #[test]
    fn test_out_of_order_start_is_rejected() {
        let words = vec![word("a", 1.0, 1.5), word("b", 0.5, 0.9)];
        assert!(matches!(
            validate_words(&words),
            Err(ValidationError::OutOfOrder { index: 1, .. })
        ));
    }

    #[test]
    fn test_equal_starts_are_allowed() {
        let words = vec![word("a", 1.0, 1.5), word("b", 1.0, 1.6)];
        assert!(validate_words(&words).is_ok());
    }

    #[test]
    fn test_error_reports_first_bad_word() {
        let words = vec![word("a", 0.0, 0.5), word("", 0.5, 1.0), word("c", 2.0, 1.0)];
        assert_eq!(
            validate_words(&words),
            Err(ValidationError::MissingText { index: 1 })
        );
    }
}
