use super::punctuation::{self, PunctuationKind};
use super::word_cleaner::WordCleaner;
use crate::transcript::domain::transcript::TranscriptWord;

/// Opening quotes and brackets pulled into a cue together with its first word.
const OPENING_MARKS: &[char] = &['"', '\'', '„', '“', '‚', '‘', '«', '»', '(', '[', '¿', '¡'];

/// Byte range of a word inside the transcript.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordSpan {
    pub start: usize,
    pub end: usize,
}

/// Positions of every word inside the transcript text.
///
/// Words are matched case-insensitively, left to right, with a cursor that
/// only moves forward. A repeated word therefore always binds to the
/// occurrence after its predecessor. A word that cannot be found leaves the
/// cursor where it was and has no span.
pub struct LocatedTranscript<'a> {
    text: &'a str,
    spans: Vec<Option<WordSpan>>,
    cleaner: WordCleaner,
}

impl<'a> LocatedTranscript<'a> {
    pub fn locate(text: &'a str, words: &[TranscriptWord], cleaner: &WordCleaner) -> Self {
        let haystack: Vec<(usize, char)> = text.char_indices().collect();

        let (_, spans) = words.iter().fold(
            (0usize, Vec::with_capacity(words.len())),
            |(cursor, mut spans), w| {
                let needle: Vec<char> = cleaner.trim(&w.word).chars().collect();
                match find_from(&haystack, &needle, cursor) {
                    Some((first, past_last)) => {
                        spans.push(Some(WordSpan {
                            start: haystack[first].0,
                            end: byte_offset(&haystack, past_last, text.len()),
                        }));
                        (past_last, spans)
                    }
                    None => {
                        spans.push(None);
                        (cursor, spans)
                    }
                }
            },
        );

        Self {
            text,
            spans,
            cleaner: cleaner.clone(),
        }
    }

    pub fn text(&self) -> &'a str {
        self.text
    }

    pub fn span(&self, index: usize) -> Option<WordSpan> {
        self.spans.get(index).copied().flatten()
    }

    pub fn missing_count(&self) -> usize {
        self.spans.iter().filter(|s| s.is_none()).count()
    }

    /// Punctuation the transcript places right after word `index`.
    pub fn punctuation_after(&self, index: usize) -> Option<PunctuationKind> {
        let span = self.span(index)?;
        punctuation::punctuation_after(self.text, span.end)
    }

    /// Transcript slice covering words `first..=last`, with original
    /// spacing, casing and punctuation. `None` when either boundary word
    /// was not located.
    pub fn cue_text(&self, first: usize, last: usize) -> Option<String> {
        let start = self.extend_backward(self.span(first)?.start);
        let end = self.extend_forward(self.span(last)?.end);
        if start >= end {
            return None;
        }

        let text = single_line(&self.text[start..end]);
        let trimmed = text.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }

    fn extend_backward(&self, start: usize) -> usize {
        self.text[..start]
            .char_indices()
            .rev()
            .take_while(|(_, c)| OPENING_MARKS.contains(c))
            .last()
            .map_or(start, |(i, _)| i)
    }

    fn extend_forward(&self, end: usize) -> usize {
        self.text[end..]
            .char_indices()
            .take_while(|(_, c)| !c.is_whitespace() && !self.cleaner.is_word_char(*c))
            .last()
            .map_or(end, |(i, c)| end + i + c.len_utf8())
    }
}

/// Fallback cue text: raw tokens joined with single spaces.
pub fn join_tokens(words: &[TranscriptWord]) -> String {
    let joined = words
        .iter()
        .map(|w| w.word.trim())
        .filter(|w| !w.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    single_line(&joined)
}

fn single_line(text: &str) -> String {
    text.replace(['\r', '\n'], " ")
}

fn byte_offset(haystack: &[(usize, char)], char_index: usize, text_len: usize) -> usize {
    haystack.get(char_index).map_or(text_len, |(i, _)| *i)
}

/// Find `needle` in `haystack` at or after char index `from`.
/// Returns `(first_char, one_past_last_char)`.
fn find_from(haystack: &[(usize, char)], needle: &[char], from: usize) -> Option<(usize, usize)> {
    if needle.is_empty() || needle.len() > haystack.len() {
        return None;
    }
    let last_start = haystack.len() - needle.len();
    (from..=last_start)
        .find(|&start| {
            needle
                .iter()
                .zip(&haystack[start..])
                .all(|(n, (_, h))| chars_match(*n, *h))
        })
        .map(|start| (start, start + needle.len()))
}

fn chars_match(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase())
}
