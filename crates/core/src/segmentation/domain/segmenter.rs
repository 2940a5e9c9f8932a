use super::cue::{BreakReason, Cue};
use super::gap_filler::GapFiller;
use super::phrase_break::{PhraseBreaker, PhraseDecision};
use super::punctuation::{trailing_punctuation, PunctuationKind};
use super::segment_observer::{NullSegmentObserver, SegmentObserver};
use super::segmenter_config::SegmenterConfig;
use super::transcript_locator::{join_tokens, LocatedTranscript};
use super::word_cleaner::WordCleaner;
use crate::formatting::domain::cue_formatter::deciseconds;
use crate::transcript::domain::transcript::TranscriptWord;
use crate::transcript::domain::validation::{validate_words, ValidationError};

/// Turns timed words into subtitle cues.
///
/// Words are folded left to right into an open cue. After each word joins,
/// a fixed cascade decides whether the cue closes:
///
/// | # | Rule                | Closes when                                          |
/// |---|---------------------|------------------------------------------------------|
/// | 1 | long word           | the word is long; the words before it close first    |
/// | 2 | max words           | the cue holds `max_words` words                      |
/// | 3 | strong punctuation  | `. ! ?` follows the word                             |
/// | 4 | weak punctuation    | `, ; :` follows and `weak_punct_min_duration` passed |
/// | 5 | smart break         | target duration passed and [`PhraseBreaker`] agrees  |
/// | 6 | max duration        | elapsed time reached `max_duration`                  |
/// | 7 | last word           | the input ends                                       |
///
/// A cue's end is always clamped to the next word's start, so consecutive
/// cues never overlap. A cue that would not span a full decisecond is never
/// closed; it absorbs the next word instead.
pub struct Segmenter {
    config: SegmenterConfig,
    cleaner: WordCleaner,
}

impl Segmenter {
    pub fn new(config: SegmenterConfig) -> Self {
        let cleaner = config.cleaner();
        Self { config, cleaner }
    }

    pub fn config(&self) -> &SegmenterConfig {
        &self.config
    }

    /// Validate `words`, segment them and fill small gaps between cues.
    pub fn segment(
        &self,
        words: &[TranscriptWord],
        transcript: &str,
        observer: &mut dyn SegmentObserver,
    ) -> Result<Vec<Cue>, ValidationError> {
        validate_words(words)?;

        let located = LocatedTranscript::locate(transcript, words, &self.cleaner);
        let ctx = SegmentContext {
            words,
            located: &located,
            config: &self.config,
            cleaner: &self.cleaner,
            breaker: PhraseBreaker::new(&self.config, &self.cleaner),
        };

        let state = (0..words.len()).fold(SegmentState::default(), |state, index| {
            ctx.step(state, index, &mut *observer)
        });
        let mut cues = state.finished;

        GapFiller::new(
            self.config.gap_fill_threshold,
            self.config.gap_fill_buffer,
            self.config.max_duration,
        )
        .fill(&mut cues, observer);

        Ok(cues)
    }
}

impl Default for Segmenter {
    fn default() -> Self {
        Self::new(SegmenterConfig::default())
    }
}

/// Segment with default settings and no observer.
pub fn segment(words: &[TranscriptWord], transcript: &str) -> Result<Vec<Cue>, ValidationError> {
    Segmenter::default().segment(words, transcript, &mut NullSegmentObserver)
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct OpenCue {
    first: usize,
    start: f64,
    end: f64,
}

impl OpenCue {
    /// Whether the cue still spans at least one decisecond once its times
    /// are written out in the canonical text format.
    fn has_duration(&self) -> bool {
        deciseconds(self.end) > deciseconds(self.start)
    }
}

#[derive(Debug, Default)]
struct SegmentState {
    open: Option<OpenCue>,
    finished: Vec<Cue>,
}

struct SegmentContext<'a> {
    words: &'a [TranscriptWord],
    located: &'a LocatedTranscript<'a>,
    config: &'a SegmenterConfig,
    cleaner: &'a WordCleaner,
    breaker: PhraseBreaker<'a>,
}

impl SegmentContext<'_> {
    fn step(
        &self,
        mut state: SegmentState,
        index: usize,
        observer: &mut dyn SegmentObserver,
    ) -> SegmentState {
        let word = &self.words[index];

        // A word that would stretch the open cue past the ceiling starts a new one.
        if let Some(open) = state.open {
            if word.end_time - open.start > self.config.max_duration && open.has_duration() {
                self.close(&mut state, open, index - 1, BreakReason::MaxDuration, observer);
            }
        }

        let long_word = self.cleaner.char_len(&word.word) >= self.config.long_word_chars;
        if long_word {
            if let Some(open) = state.open {
                let end = self.words[index - 1].end_time.min(word.start_time);
                let before = OpenCue { end, ..open };
                if before.has_duration() {
                    self.close(&mut state, before, index - 1, BreakReason::LongWord, observer);
                }
            }
        }

        let open = match state.open {
            Some(open) => open,
            None => OpenCue {
                first: index,
                start: word.start_time,
                end: word.start_time,
            },
        };
        let open = OpenCue {
            end: self.cue_end(open.start, index),
            ..open
        };
        state.open = Some(open);

        // A cue with no visible duration keeps absorbing words instead.
        if let Some(reason) = self.decide(&open, index) {
            if open.has_duration() {
                self.close(&mut state, open, index, reason, observer);
            }
        }
        state
    }

    /// Rules 2-7 of the cascade for the open cue ending at `index`.
    fn decide(&self, open: &OpenCue, index: usize) -> Option<BreakReason> {
        let word = &self.words[index];
        let word_count = index - open.first + 1;
        let elapsed = word.end_time - open.start;

        if word_count >= self.config.max_words {
            return Some(BreakReason::MaxWords);
        }

        match self.punctuation_after(index) {
            Some(PunctuationKind::Strong) => return Some(BreakReason::StrongPunctuation),
            Some(PunctuationKind::Weak) if elapsed >= self.config.weak_punct_min_duration => {
                return Some(BreakReason::WeakPunctuation)
            }
            _ => {}
        }

        if elapsed >= self.config.target_duration {
            if let PhraseDecision::Break(signal) = self.breaker.decide(self.words, index, open.start)
            {
                return Some(BreakReason::SmartBreak(signal));
            }
        }

        if elapsed >= self.config.max_duration {
            return Some(BreakReason::MaxDuration);
        }

        if index + 1 == self.words.len() {
            return Some(BreakReason::LastWord);
        }

        None
    }

    /// End time for a cue starting at `start` whose last word is `index`:
    /// the word's end, raised to the minimum duration, then clamped to the
    /// next word's start.
    fn cue_end(&self, start: f64, index: usize) -> f64 {
        let mut end = self.words[index].end_time;
        if end - start < self.config.min_duration {
            end = start + self.config.min_duration;
        }
        match self.words.get(index + 1) {
            Some(next) => end.min(next.start_time),
            None => end,
        }
    }

    fn punctuation_after(&self, index: usize) -> Option<PunctuationKind> {
        let from_token = trailing_punctuation(&self.words[index].word);
        let from_text = self.located.punctuation_after(index);
        if from_token == Some(PunctuationKind::Strong) || from_text == Some(PunctuationKind::Strong)
        {
            Some(PunctuationKind::Strong)
        } else {
            from_token.or(from_text)
        }
    }

    fn close(
        &self,
        state: &mut SegmentState,
        open: OpenCue,
        last: usize,
        reason: BreakReason,
        observer: &mut dyn SegmentObserver,
    ) {
        let text = match self.located.cue_text(open.first, last) {
            Some(text) => text,
            None => {
                observer.lookup_miss(open.first, last);
                join_tokens(&self.words[open.first..=last])
            }
        };

        let cue = Cue {
            start_time: open.start,
            end_time: open.end,
            text,
            reason,
            first_word: open.first,
            word_count: last - open.first + 1,
        };
        observer.cue_closed(&cue);
        state.finished.push(cue);
        state.open = None;
    }
}
