use crate::behavior::avg_comment_length;
use crate::lexicon::{count_substring_hits, Lexicons};
use crate::model::ActivityCorpus;
use serde::Serialize;
use std::fmt;

/// Ratio one sentiment count must exceed the other by to be reported.
pub const SENTIMENT_DOMINANCE: f64 = 1.5;
pub const DETAILED_MIN_CHARS: f64 = 150.0;
pub const CONCISE_MAX_CHARS: f64 = 50.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Trait {
    Positive,
    Negative,
    DetailedThoughtful,
    Concise,
}

impl fmt::Display for Trait {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Trait::Positive => "Positive",
            Trait::Negative => "Negative",
            Trait::DetailedThoughtful => "Detailed/Thoughtful",
            Trait::Concise => "Concise",
        };
        f.write_str(s)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SentimentCounts {
    pub positive: usize,
    pub negative: usize,
}

/// Per comment, counts how many lexicon words occur as substrings of the
/// lowercased body, summed over the corpus.
pub fn sentiment_counts(corpus: &ActivityCorpus, lexicons: &Lexicons) -> SentimentCounts {
    corpus.comments.iter().fold(SentimentCounts::default(), |mut acc, c| {
        let body = c.body.to_lowercase();
        acc.positive += count_substring_hits(&body, &lexicons.positive);
        acc.negative += count_substring_hits(&body, &lexicons.negative);
        acc
    })
}

pub fn analyze_personality(corpus: &ActivityCorpus, lexicons: &Lexicons) -> Vec<Trait> {
    let mut traits = Vec::new();

    let counts = sentiment_counts(corpus, lexicons);
    let (pos, neg) = (counts.positive as f64, counts.negative as f64);
    if pos > neg * SENTIMENT_DOMINANCE {
        traits.push(Trait::Positive);
    } else if neg > pos * SENTIMENT_DOMINANCE {
        traits.push(Trait::Negative);
    }

    // a fully empty corpus gets no length trait; comment-free ones average 0
    if !corpus.is_empty() {
        let avg = avg_comment_length(&corpus.comments);
        if avg > DETAILED_MIN_CHARS {
            traits.push(Trait::DetailedThoughtful);
        } else if avg < CONCISE_MAX_CHARS {
            traits.push(Trait::Concise);
        }
    }

    traits
}
