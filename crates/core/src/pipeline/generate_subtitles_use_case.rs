use crate::formatting::domain::cue_formatter::format_cues;
use crate::segmentation::domain::cue::{BreakReason, Cue};
use crate::segmentation::domain::segment_observer::{NullSegmentObserver, SegmentObserver};
use crate::segmentation::domain::segmenter::Segmenter;
use crate::transcript::domain::transcript::TranscriptWord;
use crate::transcript::domain::transcription::{MissingWordsPolicy, Transcription};
use crate::transcript::domain::transcription_reader::TranscriptReadError;
use crate::transcript::domain::validation::ValidationError;

/// Transcription in, reviewable subtitle text out.
///
/// Stateless apart from the observer, so re-running it on the same
/// transcription after a downstream failure yields the same cues.
pub struct GenerateSubtitlesUseCase {
    segmenter: Segmenter,
    observer: Box<dyn SegmentObserver>,
    missing_words: MissingWordsPolicy,
}

impl GenerateSubtitlesUseCase {
    pub fn new(
        segmenter: Segmenter,
        observer: Box<dyn SegmentObserver>,
        missing_words: MissingWordsPolicy,
    ) -> Self {
        Self {
            segmenter,
            observer,
            missing_words,
        }
    }

    /// Produce cues for a transcription.
    pub fn segment(&mut self, transcription: &Transcription) -> Result<Vec<Cue>, TranscriptReadError> {
        if !transcription.has_words() {
            return match self.missing_words {
                MissingWordsPolicy::Fail => Err(TranscriptReadError::MissingWords),
                MissingWordsPolicy::WholeText => Ok(self.whole_text_cue(transcription)),
            };
        }

        let cues = self.segmenter.segment(
            &transcription.words,
            &transcription.text,
            self.observer.as_mut(),
        )?;
        self.observer.summary();
        Ok(cues)
    }

    /// Produce the canonical text block for a transcription.
    pub fn execute(&mut self, transcription: &Transcription) -> Result<String, TranscriptReadError> {
        let cues = self.segment(transcription)?;
        Ok(format_cues(&cues))
    }

    fn whole_text_cue(&mut self, transcription: &Transcription) -> Vec<Cue> {
        let text = transcription.text.split_whitespace().collect::<Vec<_>>().join(" ");
        if text.is_empty() {
            return Vec::new();
        }

        let end_time = transcription
            .duration
            .filter(|d| d.is_finite() && *d > 0.0)
            .unwrap_or(self.segmenter.config().min_duration);
        log::warn!("Transcription has no word timings, showing whole text for {end_time:.1}s");

        let cue = Cue {
            start_time: 0.0,
            end_time,
            text,
            reason: BreakReason::LastWord,
            first_word: 0,
            word_count: 0,
        };
        self.observer.cue_closed(&cue);
        vec![cue]
    }
}

impl Default for GenerateSubtitlesUseCase {
    fn default() -> Self {
        Self::new(
            Segmenter::default(),
            Box::new(NullSegmentObserver),
            MissingWordsPolicy::Fail,
        )
    }
}

/// Segment `words` against `full_text` with default settings and return the
/// canonical `MM:SS.d - MM:SS.d` text block.
pub fn generate_subtitles(full_text: &str, words: &[TranscriptWord]) -> Result<String, ValidationError> {
    let cues = Segmenter::default().segment(words, full_text, &mut NullSegmentObserver)?;
    Ok(format_cues(&cues))
}
