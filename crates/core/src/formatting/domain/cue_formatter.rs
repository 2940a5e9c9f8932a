use super::timed_text::TimedText;

/// Whole deciseconds in `seconds`, rounded down.
///
/// The small bias absorbs binary representation error so that e.g. `2.3`
/// counts as 23 deciseconds rather than 22.
pub(crate) fn deciseconds(seconds: f64) -> u64 {
    (seconds.max(0.0) * 10.0 + 1e-6).floor() as u64
}

/// Format seconds as `MM:SS.d`.
///
/// Truncates to the decisecond; nothing rounds up into the next second.
pub fn format_time(seconds: f64) -> String {
    let total = deciseconds(seconds);
    let minutes = total / 600;
    let secs = (total / 10) % 60;
    let decis = total % 10;
    format!("{minutes:02}:{secs:02}.{decis}")
}

/// Render cues as the canonical review format: a `MM:SS.d - MM:SS.d` line
/// followed by the text, one blank line between cues.
pub fn format_cues<T: TimedText>(cues: &[T]) -> String {
    cues.iter()
        .map(|cue| {
            format!(
                "{} - {}\n{}",
                format_time(cue.start_time()),
                format_time(cue.end_time()),
                cue.text()
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}
