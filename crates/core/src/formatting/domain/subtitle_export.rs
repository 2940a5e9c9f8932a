use super::timed_text::TimedText;
use crate::segmentation::domain::cue::Cue;

fn milliseconds(seconds: f64) -> u64 {
    (seconds.max(0.0) * 1000.0).round() as u64
}

fn split_millis(ms: u64) -> (u64, u64, u64, u64) {
    (ms / 3_600_000, (ms % 3_600_000) / 60_000, (ms % 60_000) / 1_000, ms % 1_000)
}

/// Format seconds as SRT timestamp: "HH:MM:SS,mmm"
pub fn format_srt_time(seconds: f64) -> String {
    let (h, m, s, ms) = split_millis(milliseconds(seconds));
    format!("{h:02}:{m:02}:{s:02},{ms:03}")
}

/// Format seconds as WebVTT timestamp: "HH:MM:SS.mmm"
pub fn format_vtt_time(seconds: f64) -> String {
    let (h, m, s, ms) = split_millis(milliseconds(seconds));
    format!("{h:02}:{m:02}:{s:02}.{ms:03}")
}

/// Render cues as SubRip, numbered from 1.
pub fn to_srt<T: TimedText>(cues: &[T]) -> String {
    let mut out = String::new();
    for (i, cue) in cues.iter().enumerate() {
        out.push_str(&format!("{}\n", i + 1));
        out.push_str(&format!(
            "{} --> {}\n",
            format_srt_time(cue.start_time()),
            format_srt_time(cue.end_time())
        ));
        out.push_str(cue.text());
        out.push_str("\n\n");
    }
    out
}

/// Render cues as WebVTT.
pub fn to_vtt<T: TimedText>(cues: &[T]) -> String {
    let mut out = String::from("WEBVTT\n\n");
    for cue in cues {
        out.push_str(&format!(
            "{} --> {}\n",
            format_vtt_time(cue.start_time()),
            format_vtt_time(cue.end_time())
        ));
        out.push_str(cue.text());
        out.push_str("\n\n");
    }
    out
}

/// Cues with their close reasons as pretty-printed JSON, for inspection.
pub fn to_json(cues: &[Cue]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(cues)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segmentation::domain::cue::BreakReason;
    use rstest::rstest;

    fn cue(start: f64, end: f64, text: &str) -> Cue {
        Cue {
            start_time: start,
            end_time: end,
            text: text.to_string(),
            reason: BreakReason::MaxWords,
            first_word: 0,
            word_count: 2,
        }
    }

    #[rstest]
    #[case(0.0, "00:00:00,000")]
    #[case(65.5, "00:01:05,500")]
    #[case(3661.123, "01:01:01,123")]
    #[case(0.9996, "00:00:01,000")]
    fn test_format_srt_time(#[case] seconds: f64, #[case] expected: &str) {
        assert_eq!(format_srt_time(seconds), expected);
    }

    #[test]
    fn test_format_vtt_time() {
        assert_eq!(format_vtt_time(65.5), "00:01:05.500");
    }

    #[test]
    fn test_to_srt() {
        let srt = to_srt(&[cue(0.0, 1.8, "Guten Tag"), cue(2.0, 3.0, "zusammen.")]);
        assert_eq!(
            srt,
            "1\n00:00:00,000 --> 00:00:01,800\nGuten Tag\n\n2\n00:00:02,000 --> 00:00:03,000\nzusammen.\n\n"
        );
    }

    #[test]
    fn test_to_vtt() {
        let vtt = to_vtt(&[cue(0.0, 1.8, "Guten Tag")]);
        assert!(vtt.starts_with("WEBVTT\n\n"));
        assert!(vtt.contains("00:00:00.000 --> 00:00:01.800\nGuten Tag\n"));
    }

    #[test]
    fn test_to_json_includes_reason() {
        let json = to_json(&[cue(0.0, 1.0, "Hallo")]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["reason"], "max_words");
        assert_eq!(value[0]["text"], "Hallo");
    }
}
