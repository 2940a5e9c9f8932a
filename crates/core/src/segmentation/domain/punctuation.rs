use crate::shared::constants::{STRONG_PUNCTUATION, WEAK_PUNCTUATION};

/// Closing quotes and brackets that may sit between a word and its punctuation.
const CLOSING_MARKS: &[char] = &['"', '\'', '”', '“', '’', '»', '«', ')', ']'];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PunctuationKind {
    /// Sentence-final: `. ! ?`
    Strong,
    /// Clause-level: `, ; :`
    Weak,
}

pub fn is_strong_punctuation(c: char) -> bool {
    STRONG_PUNCTUATION.contains(&c)
}

pub fn is_weak_punctuation(c: char) -> bool {
    WEAK_PUNCTUATION.contains(&c)
}

pub fn classify(c: char) -> Option<PunctuationKind> {
    if is_strong_punctuation(c) {
        Some(PunctuationKind::Strong)
    } else if is_weak_punctuation(c) {
        Some(PunctuationKind::Weak)
    } else {
        None
    }
}

/// Punctuation ending a raw word token, looking through closing quotes.
pub fn trailing_punctuation(token: &str) -> Option<PunctuationKind> {
    token
        .trim_end()
        .chars()
        .rev()
        .find(|c| !CLOSING_MARKS.contains(c))
        .and_then(classify)
}

/// Punctuation directly after byte offset `at` in `text`, looking through closing quotes.
///
/// Whitespace ends the search: punctuation after a space belongs to nothing.
pub fn punctuation_after(text: &str, at: usize) -> Option<PunctuationKind> {
    text.get(at..)?
        .chars()
        .find(|c| !CLOSING_MARKS.contains(c))
        .and_then(classify)
}
