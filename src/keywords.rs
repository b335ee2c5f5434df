use crate::lexicon::Lexicons;

/// Shortest token (in characters) kept as a keyword.
pub const MIN_KEYWORD_CHARS: usize = 4;

/// Whitespace tokenizer that keeps purely alphabetic, lowercased tokens of at least
/// `MIN_KEYWORD_CHARS` characters which are not stop-words. Output keeps input order
/// and duplicates.
pub fn extract_keywords(text: &str, lexicons: &Lexicons) -> Vec<String> {
    text.split_whitespace()
        .filter(|w| w.chars().all(char::is_alphabetic))
        .map(str::to_lowercase)
        .filter(|w| !lexicons.is_stop_word(w) && w.chars().count() >= MIN_KEYWORD_CHARS)
        .collect()
}
