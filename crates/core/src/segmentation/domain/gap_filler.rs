use super::cue::Cue;
use super::segment_observer::SegmentObserver;

/// Elastic gap filling between adjacent cues.
///
/// A silent gap that is positive but shorter than `threshold` is closed up
/// to `buffer` seconds before the next cue starts, without letting the cue
/// grow past `max_duration`. Only `end_time` changes, and it only ever grows.
pub struct GapFiller {
    threshold: f64,
    buffer: f64,
    max_duration: f64,
}

impl GapFiller {
    pub fn new(threshold: f64, buffer: f64, max_duration: f64) -> Self {
        Self {
            threshold,
            buffer,
            max_duration,
        }
    }

    pub fn fill(&self, cues: &mut [Cue], observer: &mut dyn SegmentObserver) {
        for index in 0..cues.len().saturating_sub(1) {
            let next_start = cues[index + 1].start_time;
            let cue = &mut cues[index];
            let gap = next_start - cue.end_time;
            if gap <= 0.0 || gap >= self.threshold {
                continue;
            }

            let new_end = (next_start - self.buffer).min(cue.start_time + self.max_duration);
            if new_end > cue.end_time {
                observer.gap_filled(index, cue.end_time, new_end);
                cue.end_time = new_end;
            }
        }
    }
}
