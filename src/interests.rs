use crate::keywords::extract_keywords;
use crate::lexicon::Lexicons;
use crate::model::ActivityCorpus;
use crate::ranking::FrequencyTable;
use serde::Serialize;
use std::collections::BTreeMap;

pub const TOP_COMMUNITIES: usize = 5;
pub const TOP_KEYWORDS: usize = 10;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Interests {
    /// Most frequent communities, first-seen order on ties.
    pub top_communities: Vec<String>,
    pub common_keywords: Vec<String>,
    pub community_counts: BTreeMap<String, u64>,
}

pub fn analyze_interests(corpus: &ActivityCorpus, lexicons: &Lexicons) -> Interests {
    let communities: FrequencyTable<String> =
        corpus.items().map(|item| item.community().to_string()).collect();

    let mut keywords = FrequencyTable::new();
    for c in &corpus.comments {
        extract_keywords(&c.body, lexicons).into_iter().for_each(|k| keywords.add(k));
    }
    for s in &corpus.submissions {
        if !s.body.is_empty() {
            extract_keywords(&s.body, lexicons).into_iter().for_each(|k| keywords.add(k));
        }
        extract_keywords(&s.title, lexicons).into_iter().for_each(|k| keywords.add(k));
    }

    Interests {
        top_communities: communities.top(TOP_COMMUNITIES),
        common_keywords: keywords.top(TOP_KEYWORDS),
        community_counts: communities.entries().iter().cloned().collect(),
    }
}
