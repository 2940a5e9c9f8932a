use crate::shared::constants::DEFAULT_EXTRA_WORD_CHARS;

/// Character-class predicate deciding which characters make up a word.
///
/// Letters and digits of any script always count (so umlauts and `ß` need
/// no special handling); `extra_chars` adds language-specific joiners.
#[derive(Debug, Clone, PartialEq)]
pub struct WordCleaner {
    extra_chars: Vec<char>,
}

impl WordCleaner {
    pub fn new(extra_chars: Vec<char>) -> Self {
        Self { extra_chars }
    }

    pub fn is_word_char(&self, c: char) -> bool {
        c.is_alphanumeric() || self.extra_chars.contains(&c)
    }

    /// Drop every non-word character.
    pub fn clean(&self, word: &str) -> String {
        word.chars().filter(|c| self.is_word_char(*c)).collect()
    }

    /// Strip non-word characters from both ends only.
    pub fn trim<'a>(&self, word: &'a str) -> &'a str {
        word.trim_matches(|c: char| !self.is_word_char(c))
    }

    /// Length in characters once punctuation is removed.
    pub fn char_len(&self, word: &str) -> usize {
        word.chars().filter(|c| self.is_word_char(*c)).count()
    }

    /// Lowercased cleaned form used for break-word lookups.
    pub fn normalize(&self, word: &str) -> String {
        self.clean(word).to_lowercase()
    }
}

impl Default for WordCleaner {
    fn default() -> Self {
        Self::new(DEFAULT_EXTRA_WORD_CHARS.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::trailing_period("zusammen.", "zusammen")]
    #[case::umlaut("Grüße!", "Grüße")]
    #[case::eszett("Straße,", "Straße")]
    #[case::hyphen_kept("Know-how", "Know-how")]
    #[case::apostrophe_kept("geht's?", "geht's")]
    #[case::quotes("„Hallo“", "Hallo")]
    fn test_clean(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(WordCleaner::default().clean(input), expected);
    }

    #[test]
    fn test_trim_keeps_inner_punctuation() {
        let cleaner = WordCleaner::default();
        assert_eq!(cleaner.trim("z.B."), "z.B");
        assert_eq!(cleaner.clean("z.B."), "zB");
    }

    #[test]
    fn test_char_len_counts_chars_not_bytes() {
        let cleaner = WordCleaner::default();
        assert_eq!(cleaner.char_len("Sozialversicherungsbeiträge."), 27);
    }

    #[test]
    fn test_normalize_lowercases() {
        assert_eq!(WordCleaner::default().normalize("Und,"), "und");
    }

    #[test]
    fn test_custom_extra_chars() {
        let cleaner = WordCleaner::new(vec!['.']);
        assert_eq!(cleaner.clean("z.B.-Liste"), "z.B.Liste");
        assert!(!cleaner.is_word_char('-'));
    }

    #[test]
    fn test_punctuation_only_word_cleans_to_empty() {
        assert_eq!(WordCleaner::default().trim("…"), "");
    }
}
