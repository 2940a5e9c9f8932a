use thiserror::Error;

use super::timed_text::TimedText;

/// A broken invariant in a cue sequence.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CueViolation {
    #[error("cue {index} starts before the cue preceding it")]
    OutOfOrder { index: usize },
    #[error("cue {index} ends at {end}s, after the next cue starts at {next_start}s")]
    Overlap {
        index: usize,
        end: f64,
        next_start: f64,
    },
    #[error("cue {index} has no positive duration")]
    NonPositiveDuration { index: usize },
    #[error("cue {index} has no text")]
    EmptyText { index: usize },
    #[error("cue {index} text has surrounding whitespace")]
    UntrimmedText { index: usize },
}

/// Check ordering, overlap, duration and text invariants across a cue sequence.
pub fn validate_cues<T: TimedText>(cues: &[T]) -> Vec<CueViolation> {
    let mut violations = Vec::new();

    for (index, cue) in cues.iter().enumerate() {
        if cue.start_time() >= cue.end_time() {
            violations.push(CueViolation::NonPositiveDuration { index });
        }
        let text = cue.text();
        if text.trim().is_empty() {
            violations.push(CueViolation::EmptyText { index });
        } else if text.trim() != text {
            violations.push(CueViolation::UntrimmedText { index });
        }
    }

    for (index, pair) in cues.windows(2).enumerate() {
        let (current, next) = (&pair[0], &pair[1]);
        if next.start_time() < current.start_time() {
            violations.push(CueViolation::OutOfOrder { index: index + 1 });
        }
        if current.end_time() > next.start_time() {
            violations.push(CueViolation::Overlap {
                index,
                end: current.end_time(),
                next_start: next.start_time(),
            });
        }
    }

    violations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formatting::domain::cue_parser::ParsedCue;

    fn cue(start: f64, end: f64, text: &str) -> ParsedCue {
        ParsedCue {
            start_time: start,
            end_time: end,
            text: text.to_string(),
            tag: None,
        }
    }

    #[test]
    fn test_valid_sequence_has_no_violations() {
        let cues = vec![cue(0.0, 1.0, "Eins"), cue(1.0, 2.0, "Zwei")];
        assert!(validate_cues(&cues).is_empty());
    }

    #[test]
    fn test_detects_overlap() {
        let cues = vec![cue(0.0, 1.5, "Eins"), cue(1.0, 2.0, "Zwei")];
        assert_eq!(
            validate_cues(&cues),
            vec![CueViolation::Overlap {
                index: 0,
                end: 1.5,
                next_start: 1.0
            }]
        );
    }

    #[test]
    fn test_detects_out_of_order() {
        let cues = vec![cue(2.0, 3.0, "Zwei"), cue(0.0, 1.0, "Eins")];
        let violations = validate_cues(&cues);
        assert!(violations.contains(&CueViolation::OutOfOrder { index: 1 }));
    }

    #[test]
    fn test_detects_text_problems_and_zero_duration() {
        let cues = vec![cue(0.0, 0.0, " Eins"), cue(1.0, 2.0, "  ")];
        let violations = validate_cues(&cues);
        assert!(violations.contains(&CueViolation::NonPositiveDuration { index: 0 }));
        assert!(violations.contains(&CueViolation::UntrimmedText { index: 0 }));
        assert!(violations.contains(&CueViolation::EmptyText { index: 1 }));
    }

    #[test]
    fn test_violation_message() {
        let v = CueViolation::Overlap {
            index: 2,
            end: 3.5,
            next_start: 3.0,
        };
        assert_eq!(v.to_string(), "cue 2 ends at 3.5s, after the next cue starts at 3s");
    }
}
