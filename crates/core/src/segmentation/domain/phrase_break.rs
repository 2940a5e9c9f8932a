use std::collections::HashSet;

use super::cue::PhraseSignal;
use super::segmenter_config::SegmenterConfig;
use super::word_cleaner::WordCleaner;
use crate::transcript::domain::transcript::TranscriptWord;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhraseDecision {
    Break(PhraseSignal),
    Continue,
}

/// Lookahead heuristic choosing a natural phrase boundary once a cue has
/// reached its target duration.
pub struct PhraseBreaker<'a> {
    config: &'a SegmenterConfig,
    cleaner: &'a WordCleaner,
    break_words: HashSet<String>,
}

impl<'a> PhraseBreaker<'a> {
    pub fn new(config: &'a SegmenterConfig, cleaner: &'a WordCleaner) -> Self {
        Self {
            config,
            cleaner,
            break_words: config.break_word_set(),
        }
    }

    pub fn is_break_word(&self, word: &str) -> bool {
        self.break_words.contains(&self.cleaner.normalize(word))
    }

    /// Decide whether the cue that starts at `cue_start` and currently ends
    /// with `words[index]` should close now.
    ///
    /// Checked in order:
    /// 1. current word is a break word: break after it;
    /// 2. a break word follows within the lookahead window and within the
    ///    max duration: keep going so the break lands on it;
    /// 3. silence before the current word exceeds the pause threshold: break;
    /// 4. elapsed time is past the fallback share of the target: break;
    /// 5. otherwise keep going.
    pub fn decide(&self, words: &[TranscriptWord], index: usize, cue_start: f64) -> PhraseDecision {
        let current = &words[index];
        if self.is_break_word(&current.word) {
            return PhraseDecision::Break(PhraseSignal::BreakWord);
        }

        if self.break_word_ahead(words, index, cue_start) {
            return PhraseDecision::Continue;
        }

        if index > 0 {
            let pause = current.start_time - words[index - 1].end_time;
            if pause > self.config.pause_threshold {
                return PhraseDecision::Break(PhraseSignal::Pause);
            }
        }

        let elapsed = current.end_time - cue_start;
        if elapsed >= self.config.target_duration * self.config.target_fallback_ratio {
            return PhraseDecision::Break(PhraseSignal::TargetReached);
        }

        PhraseDecision::Continue
    }

    fn break_word_ahead(&self, words: &[TranscriptWord], index: usize, cue_start: f64) -> bool {
        words
            .iter()
            .skip(index + 1)
            .take(self.config.lookahead_words)
            .take_while(|w| w.end_time - cue_start <= self.config.max_duration)
            .any(|w| self.is_break_word(&w.word))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(w: &str, start: f64, end: f64) -> TranscriptWord {
        TranscriptWord::new(w, start, end)
    }

    fn decide(config: &SegmenterConfig, words: &[TranscriptWord], index: usize) -> PhraseDecision {
        let cleaner = config.cleaner();
        PhraseBreaker::new(config, &cleaner).decide(words, index, words[0].start_time)
    }

    #[test]
    fn test_break_word_breaks_immediately() {
        let words = vec![
            word("Wir", 0.0, 0.6),
            word("gehen", 0.6, 1.2),
            word("und", 1.2, 1.9),
            word("essen", 1.9, 2.2),
        ];
        assert_eq!(
            decide(&SegmenterConfig::default(), &words, 2),
            PhraseDecision::Break(PhraseSignal::BreakWord)
        );
    }

    #[test]
    fn test_break_word_match_ignores_case_and_punctuation() {
        let config = SegmenterConfig::default();
        let cleaner = config.cleaner();
        let breaker = PhraseBreaker::new(&config, &cleaner);
        assert!(breaker.is_break_word("Und,"));
        assert!(breaker.is_break_word("DASS"));
        assert!(!breaker.is_break_word("Haus"));
    }

    #[test]
    fn test_waits_for_break_word_within_lookahead() {
        let words = vec![
            word("Wir", 0.0, 0.9),
            word("gehen", 0.9, 1.9),
            word("heute", 1.9, 2.1),
            word("mit", 2.1, 2.3),
        ];
        assert_eq!(
            decide(&SegmenterConfig::default(), &words, 1),
            PhraseDecision::Continue
        );
    }

    #[test]
    fn test_ignores_break_word_beyond_max_duration() {
        let words = vec![
            word("Wir", 0.0, 0.9),
            word("gehen", 0.9, 1.9),
            word("heute", 1.9, 2.4),
            word("mit", 2.4, 2.7),
        ];
        // "mit" would end the cue at 2.7s, past the 2.5s ceiling.
        assert_eq!(
            decide(&SegmenterConfig::default(), &words, 1),
            PhraseDecision::Break(PhraseSignal::TargetReached)
        );
    }

    #[test]
    fn test_ignores_break_word_beyond_lookahead_window() {
        let config = SegmenterConfig {
            lookahead_words: 1,
            ..SegmenterConfig::default()
        };
        let words = vec![
            word("Wir", 0.0, 0.9),
            word("gehen", 0.9, 1.9),
            word("heute", 1.9, 2.0),
            word("mit", 2.0, 2.1),
        ];
        assert_eq!(
            decide(&config, &words, 1),
            PhraseDecision::Break(PhraseSignal::TargetReached)
        );
    }

    #[test]
    fn test_pause_before_current_word_breaks() {
        let words = vec![
            word("Wir", 0.0, 0.9),
            word("gehen", 1.2, 1.9),
            word("heute", 1.9, 2.1),
        ];
        assert_eq!(
            decide(&SegmenterConfig::default(), &words, 1),
            PhraseDecision::Break(PhraseSignal::Pause)
        );
    }

    #[test]
    fn test_continues_below_fallback_share() {
        let words = vec![word("Wir", 0.0, 0.5), word("gehen", 0.5, 1.0)];
        assert_eq!(
            decide(&SegmenterConfig::default(), &words, 1),
            PhraseDecision::Continue
        );
    }

    #[test]
    fn test_fallback_share_is_configurable() {
        let config = SegmenterConfig {
            target_fallback_ratio: 0.5,
            ..SegmenterConfig::default()
        };
        let words = vec![word("Wir", 0.0, 0.5), word("gehen", 0.5, 1.0)];
        assert_eq!(
            decide(&config, &words, 1),
            PhraseDecision::Break(PhraseSignal::TargetReached)
        );
    }
}
