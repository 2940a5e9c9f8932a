use crate::formatting::domain::cue_parser::ParsedCue;
use crate::segmentation::domain::cue::Cue;

/// Anything with a display window and a line of text.
///
/// Lets the formatter and exporters accept fresh segmenter output and cues
/// parsed back from a reviewed text block alike.
pub trait TimedText {
    fn start_time(&self) -> f64;
    fn end_time(&self) -> f64;
    fn text(&self) -> &str;
}

impl TimedText for Cue {
    fn start_time(&self) -> f64 {
        self.start_time
    }

    fn end_time(&self) -> f64 {
        self.end_time
    }

    fn text(&self) -> &str {
        &self.text
    }
}

impl TimedText for ParsedCue {
    fn start_time(&self) -> f64 {
        self.start_time
    }

    fn end_time(&self) -> f64 {
        self.end_time
    }

    fn text(&self) -> &str {
        &self.text
    }
}
