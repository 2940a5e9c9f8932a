use std::collections::HashMap;

use super::cue::Cue;

/// Observer for segmentation decisions.
///
/// Keeps the segmenter free of output concerns: the CLI logs through the
/// `log` crate, tests record events and assert on them directly.
pub trait SegmentObserver: Send {
    /// A cue was finalized.
    fn cue_closed(&mut self, cue: &Cue);

    /// Words `first..=last` could not be located in the transcript; the cue
    /// text fell back to joined word tokens.
    fn lookup_miss(&mut self, first: usize, last: usize);

    /// The elastic gap-fill pass extended cue `index`.
    fn gap_filled(&mut self, index: usize, old_end: f64, new_end: f64);

    /// Emit an end-of-run summary. Default: no-op.
    fn summary(&self) {}
}

/// Observer that discards all events.
pub struct NullSegmentObserver;

impl SegmentObserver for NullSegmentObserver {
    fn cue_closed(&mut self, _cue: &Cue) {}
    fn lookup_miss(&mut self, _first: usize, _last: usize) {}
    fn gap_filled(&mut self, _index: usize, _old_end: f64, _new_end: f64) {}
}

/// Observer forwarding decisions to the `log` crate and tallying close
/// reasons for a summary report.
#[derive(Default)]
pub struct LogSegmentObserver {
    reasons: HashMap<&'static str, usize>,
    cue_count: usize,
    lookup_misses: usize,
    gaps_filled: usize,
}

impl LogSegmentObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the formatted summary string, or `None` if no cue was seen.
    pub fn summary_string(&self) -> Option<String> {
        if self.cue_count == 0 {
            return None;
        }

        let mut lines = vec![format!("Segmentation summary ({} cues):", self.cue_count)];

        let mut reasons: Vec<_> = self.reasons.iter().collect();
        reasons.sort();
        for (reason, count) in reasons {
            let pct = *count as f64 / self.cue_count as f64 * 100.0;
            lines.push(format!("  {reason:24}: {count:5}  ({pct:4.1}%)"));
        }

        if self.lookup_misses > 0 {
            lines.push(format!("  Transcript lookup misses: {}", self.lookup_misses));
        }
        if self.gaps_filled > 0 {
            lines.push(format!("  Gaps filled: {}", self.gaps_filled));
        }

        Some(lines.join("\n"))
    }

    pub fn count_for(&self, reason: &str) -> usize {
        self.reasons.get(reason).copied().unwrap_or(0)
    }
}

impl SegmentObserver for LogSegmentObserver {
    fn cue_closed(&mut self, cue: &Cue) {
        self.cue_count += 1;
        *self.reasons.entry(cue.reason.as_str()).or_default() += 1;
        log::debug!(
            "Cue {:.2}-{:.2}s ({} words, {}): {}",
            cue.start_time,
            cue.end_time,
            cue.word_count,
            cue.reason,
            cue.text
        );
    }

    fn lookup_miss(&mut self, first: usize, last: usize) {
        self.lookup_misses += 1;
        log::warn!("Words {first}..={last} not found in transcript, joining raw tokens");
    }

    fn gap_filled(&mut self, index: usize, old_end: f64, new_end: f64) {
        self.gaps_filled += 1;
        log::debug!("Cue {index} extended from {old_end:.2}s to {new_end:.2}s");
    }

    fn summary(&self) {
        if let Some(text) = self.summary_string() {
            log::info!("\n\n{text}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segmentation::domain::cue::BreakReason;

    fn cue(reason: BreakReason) -> Cue {
        Cue {
            start_time: 0.0,
            end_time: 1.0,
            text: "Hallo".to_string(),
            reason,
            first_word: 0,
            word_count: 1,
        }
    }

    #[test]
    fn test_null_observer_all_methods_are_noop() {
        let mut observer = NullSegmentObserver;
        observer.cue_closed(&cue(BreakReason::LastWord));
        observer.lookup_miss(0, 1);
        observer.gap_filled(0, 1.0, 1.2);
        observer.summary();
    }

    #[test]
    fn test_counts_reasons() {
        let mut observer = LogSegmentObserver::new();
        observer.cue_closed(&cue(BreakReason::MaxWords));
        observer.cue_closed(&cue(BreakReason::MaxWords));
        observer.cue_closed(&cue(BreakReason::LastWord));
        assert_eq!(observer.count_for("max_words"), 2);
        assert_eq!(observer.count_for("last_word"), 1);
        assert_eq!(observer.count_for("long_word"), 0);
    }

    #[test]
    fn test_summary_lists_reasons_and_anomalies() {
        let mut observer = LogSegmentObserver::new();
        observer.cue_closed(&cue(BreakReason::StrongPunctuation));
        observer.lookup_miss(2, 3);
        observer.gap_filled(0, 1.0, 1.3);

        let summary = observer.summary_string().unwrap();
        assert!(summary.contains("Segmentation summary (1 cues)"));
        assert!(summary.contains("strong_punctuation"));
        assert!(summary.contains("lookup misses: 1"));
        assert!(summary.contains("Gaps filled: 1"));
    }

    #[test]
    fn test_empty_summary_returns_none() {
        assert!(LogSegmentObserver::new().summary_string().is_none());
    }
}
