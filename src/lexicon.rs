//! Closed word lists used by the heuristics, bundled so analyzers take them as data.

pub const STOP_WORDS: &[&str] = &["the", "and", "but", "are", "is", "i", "you", "me"];

pub const POSITIVE_WORDS: &[&str] = &["love", "great", "awesome", "happy", "nice"];
pub const NEGATIVE_WORDS: &[&str] = &["hate", "awful", "terrible", "bad", "angry"];

pub const US_INDICATORS: &[&str] = &["america", "usa", "us", "united states"];
pub const UK_INDICATORS: &[&str] = &["uk", "britain", "england", "london"];

/// Named lexicon sets injected into the analyzers.
/// All entries are stored lowercase.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Lexicons {
    pub stop_words: Vec<String>,
    pub positive: Vec<String>,
    pub negative: Vec<String>,
    pub us_indicators: Vec<String>,
    pub uk_indicators: Vec<String>,
}

impl Default for Lexicons {
    fn default() -> Self {
        Self {
            stop_words: owned(STOP_WORDS),
            positive: owned(POSITIVE_WORDS),
            negative: owned(NEGATIVE_WORDS),
            us_indicators: owned(US_INDICATORS),
            uk_indicators: owned(UK_INDICATORS),
        }
    }
}

impl Lexicons {
    pub fn with_stop_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.stop_words = normalize_list(words);
        self
    }
    pub fn with_positive<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.positive = normalize_list(words);
        self
    }
    pub fn with_negative<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.negative = normalize_list(words);
        self
    }
    pub fn with_us_indicators<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.us_indicators = normalize_list(words);
        self
    }
    pub fn with_uk_indicators<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.uk_indicators = normalize_list(words);
        self
    }

    pub fn is_stop_word(&self, token: &str) -> bool {
        self.stop_words.iter().any(|w| w == token)
    }
}

/// Number of distinct lexicon entries occurring anywhere in `lowered`,
/// including inside longer words.
pub fn count_substring_hits(lowered: &str, words: &[String]) -> usize {
    words.iter().filter(|w| lowered.contains(w.as_str())).count()
}

pub fn contains_any(lowered: &str, words: &[String]) -> bool {
    words.iter().any(|w| lowered.contains(w.as_str()))
}

fn owned(words: &[&str]) -> Vec<String> {
    words.iter().map(|s| s.to_string()).collect()
}

fn normalize_list<I, S>(words: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut v: Vec<String> = Vec::new();
    for w in words {
        let w = w.as_ref().trim().to_lowercase();
        if !w.is_empty() && !v.contains(&w) {
            v.push(w);
        }
    }
    v
}
