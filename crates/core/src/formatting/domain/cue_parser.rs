use once_cell::sync::Lazy;
use regex::Regex;

/// Optional rendering tag after the time range, e.g. `[HIGHLIGHT]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CueTag {
    Highlight,
    Static,
    Other(String),
}

impl CueTag {
    fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_uppercase().as_str() {
            "HIGHLIGHT" => CueTag::Highlight,
            "STATIC" => CueTag::Static,
            _ => CueTag::Other(raw.trim().to_string()),
        }
    }
}

/// A cue recovered from the canonical text format.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedCue {
    pub start_time: f64,
    pub end_time: f64,
    pub text: String,
    pub tag: Option<CueTag>,
}

/// Why a block was dropped while parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    MalformedTime,
    NonPositiveDuration,
    EmptyText,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParseSkip {
    /// Zero-based index of the block in the document.
    pub block: usize,
    pub header: String,
    pub reason: SkipReason,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParseReport {
    pub cues: Vec<ParsedCue>,
    pub skipped: Vec<ParseSkip>,
}

static TIME_RANGE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d+):(\d{1,2})\.(\d)\s*-\s*(\d+):(\d{1,2})\.(\d)\s*(?:\[([^\]]*)\])?\s*$")
        .unwrap()
});

static TIME_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d+):(\d{1,2})\.(\d)$").unwrap());

/// Parse a single `MM:SS.d` timestamp into seconds.
pub fn parse_time(value: &str) -> Option<f64> {
    let caps = TIME_PATTERN.captures(value.trim())?;
    to_seconds(&caps[1], &caps[2], &caps[3])
}

fn to_seconds(minutes: &str, seconds: &str, decis: &str) -> Option<f64> {
    let minutes: u64 = minutes.parse().ok()?;
    let seconds: u64 = seconds.parse().ok()?;
    let decis: u64 = decis.parse().ok()?;
    if seconds >= 60 {
        return None;
    }
    let total = (minutes * 60 + seconds) * 10 + decis;
    Some(total as f64 / 10.0)
}

/// Parse a canonical text block, silently dropping malformed blocks.
///
/// Cues come back sorted by start time.
pub fn parse_cues(text: &str) -> Vec<ParsedCue> {
    parse_cues_detailed(text).cues
}

/// Parse a canonical text block and report which blocks were dropped.
pub fn parse_cues_detailed(text: &str) -> ParseReport {
    let mut report = ParseReport::default();

    for (block, lines) in split_blocks(text).into_iter().enumerate() {
        match parse_block(&lines) {
            Ok(cue) => report.cues.push(cue),
            Err(reason) => {
                let header = lines.first().map(|l| l.to_string()).unwrap_or_default();
                log::warn!("Skipping subtitle block {block} ({reason:?}): {header}");
                report.skipped.push(ParseSkip {
                    block,
                    header,
                    reason,
                });
            }
        }
    }

    report
        .cues
        .sort_by(|a, b| a.start_time.total_cmp(&b.start_time));
    report
}

fn split_blocks(text: &str) -> Vec<Vec<&str>> {
    let mut blocks = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    for line in text.lines() {
        let line = line.trim_end_matches('\r');
        if line.trim().is_empty() {
            if !current.is_empty() {
                blocks.push(std::mem::take(&mut current));
            }
        } else {
            current.push(line);
        }
    }
    if !current.is_empty() {
        blocks.push(current);
    }
    blocks
}

fn parse_block(lines: &[&str]) -> Result<ParsedCue, SkipReason> {
    let (header, body) = lines.split_first().ok_or(SkipReason::EmptyText)?;
    let caps = TIME_RANGE_PATTERN
        .captures(header.trim())
        .ok_or(SkipReason::MalformedTime)?;

    let start_time = to_seconds(&caps[1], &caps[2], &caps[3]).ok_or(SkipReason::MalformedTime)?;
    let end_time = to_seconds(&caps[4], &caps[5], &caps[6]).ok_or(SkipReason::MalformedTime)?;
    if start_time >= end_time {
        return Err(SkipReason::NonPositiveDuration);
    }

    let text = body
        .iter()
        .map(|l| l.trim())
        .filter(|l| !l.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    if text.is_empty() {
        return Err(SkipReason::EmptyText);
    }

    Ok(ParsedCue {
        start_time,
        end_time,
        text,
        tag: caps.get(7).map(|m| CueTag::parse(m.as_str())),
    })
}
