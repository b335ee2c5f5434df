//! Posting behavior: comment length, comment/submission mix, active hours and
//! an engagement tier.

use crate::clock::HourClock;
use crate::model::{ActivityCorpus, Comment};
use crate::ranking::FrequencyTable;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

pub const TOP_HOURS: usize = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Engagement {
    Inactive,
    Occasional,
    Active,
    HighlyEngaged,
}

impl Engagement {
    /// Rules are checked in order; the first match wins.
    pub fn classify(total: usize, avg_score: f64) -> Self {
        if total == 0 {
            Engagement::Inactive
        } else if total > 50 && avg_score > 10.0 {
            Engagement::HighlyEngaged
        } else if total > 20 || avg_score > 5.0 {
            Engagement::Active
        } else {
            Engagement::Occasional
        }
    }
}

impl fmt::Display for Engagement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Engagement::Inactive => "Inactive",
            Engagement::Occasional => "Occasional",
            Engagement::Active => "Active",
            Engagement::HighlyEngaged => "Highly Engaged",
        };
        f.write_str(s)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct TypeRatio {
    pub comments: f64,
    pub submissions: f64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ActiveHours {
    /// Half-open clock ranges such as `"14:00-15:00"`.
    pub top_hours: Vec<String>,
    pub hour_distribution: BTreeMap<u8, u64>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Behavior {
    pub avg_comment_length: f64,
    pub type_ratio: TypeRatio,
    /// `None` when the corpus has no items.
    pub active_hours: Option<ActiveHours>,
    pub engagement: Engagement,
}

pub fn analyze_behavior(corpus: &ActivityCorpus, clock: &HourClock) -> Behavior {
    Behavior {
        avg_comment_length: avg_comment_length(&corpus.comments),
        type_ratio: type_ratio(corpus),
        active_hours: active_hours(corpus, clock),
        engagement: engagement(corpus),
    }
}

/// Mean body length in characters; 0 without comments.
pub fn avg_comment_length(comments: &[Comment]) -> f64 {
    if comments.is_empty() {
        return 0.0;
    }
    let total: usize = comments.iter().map(|c| c.body.chars().count()).sum();
    total as f64 / comments.len() as f64
}

pub fn type_ratio(corpus: &ActivityCorpus) -> TypeRatio {
    let total = corpus.total();
    if total == 0 {
        return TypeRatio::default();
    }
    TypeRatio {
        comments: corpus.comments.len() as f64 / total as f64,
        submissions: corpus.submissions.len() as f64 / total as f64,
    }
}

/// Hour-of-day counts over comments then submissions.
pub fn hour_table(corpus: &ActivityCorpus, clock: &HourClock) -> FrequencyTable<u8> {
    corpus
        .items()
        .filter_map(|item| {
            let hour = clock.hour_of(item.created_at());
            if hour.is_none() {
                tracing::debug!("{}: timestamp {} out of range, left out of hours", item.id(), item.created_at());
            }
            hour
        })
        .collect()
}

pub fn format_hour_range(hour: u8) -> String {
    format!("{}:00-{}:00", hour, u32::from(hour) + 1)
}

pub fn active_hours(corpus: &ActivityCorpus, clock: &HourClock) -> Option<ActiveHours> {
    let table = hour_table(corpus, clock);
    if table.is_empty() {
        return None;
    }
    Some(ActiveHours {
        top_hours: table.top(TOP_HOURS).into_iter().map(format_hour_range).collect(),
        hour_distribution: table.entries().iter().copied().collect(),
    })
}

pub fn engagement(corpus: &ActivityCorpus) -> Engagement {
    let total = corpus.total();
    if total == 0 {
        return Engagement::Inactive;
    }
    let score_sum: i64 = corpus.items().map(|item| item.score()).sum();
    Engagement::classify(total, score_sum as f64 / total as f64)
}
