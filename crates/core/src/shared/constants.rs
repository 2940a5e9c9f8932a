pub const DEFAULT_MAX_WORDS: usize = 4;
/// Words at least this many characters long (punctuation excluded) get their own cue.
pub const DEFAULT_LONG_WORD_CHARS: usize = 15;

pub const DEFAULT_MIN_DURATION: f64 = 1.0;
pub const DEFAULT_WEAK_PUNCT_MIN_DURATION: f64 = 1.0;
pub const DEFAULT_TARGET_DURATION: f64 = 1.8;
pub const DEFAULT_MAX_DURATION: f64 = 2.5;

pub const DEFAULT_LOOKAHEAD_WORDS: usize = 3;
/// Silence between two words that counts as a breath.
pub const DEFAULT_PAUSE_THRESHOLD: f64 = 0.1;
/// Share of the target duration after which the phrase heuristic breaks without a signal.
pub const DEFAULT_TARGET_FALLBACK_RATIO: f64 = 0.85;

pub const DEFAULT_GAP_FILL_THRESHOLD: f64 = 0.6;
/// Blank time left between two cues after elastic gap filling.
pub const DEFAULT_GAP_FILL_BUFFER: f64 = 0.1;

/// Articles, prepositions and conjunctions after which a German phrase reads naturally split.
pub const DEFAULT_BREAK_WORDS: &[&str] = &[
    "der", "die", "das", "den", "dem", "des", "ein", "eine", "einen", "einem", "einer", "eines",
    "und", "oder", "aber", "sondern", "denn", "dass", "weil", "wenn", "als", "wie", "ob", "mit",
    "von", "zu", "zum", "zur", "für", "auf", "in", "im", "an", "am", "bei", "nach", "aus", "über",
    "unter", "vor", "durch", "gegen", "ohne", "um",
];

/// Characters besides letters and digits that belong to a word ("Know-how", "geht's").
pub const DEFAULT_EXTRA_WORD_CHARS: &[char] = &['-', '\''];

pub const STRONG_PUNCTUATION: &[char] = &['.', '!', '?'];
pub const WEAK_PUNCTUATION: &[char] = &[',', ';', ':'];

pub const CONFIG_DIR_NAME: &str = "subcue";
pub const CONFIG_FILE_NAME: &str = "config.json";
