//! Normalized activity shapes consumed by the analyzers.

use serde::{Deserialize, Serialize};

/// Fields shared by comments and submissions.
pub trait ContentItem {
    fn id(&self) -> &str;
    fn community(&self) -> &str;
    fn score(&self) -> i64;
    /// Unix epoch seconds, UTC.
    fn created_at(&self) -> i64;
    /// Relative URL fragment, e.g. `/r/rust/comments/abc/...`.
    fn permalink(&self) -> &str;
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: String,
    pub community: String,
    pub body: String,
    pub score: i64,
    pub created_at: i64,
    pub permalink: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    pub id: String,
    pub community: String,
    pub title: String,
    /// Self text; empty for link posts.
    pub body: String,
    pub score: i64,
    pub created_at: i64,
    pub permalink: String,
    pub url: String,
}

macro_rules! impl_content_item {
    ($ty:ty) => {
        impl ContentItem for $ty {
            fn id(&self) -> &str { &self.id }
            fn community(&self) -> &str { &self.community }
            fn score(&self) -> i64 { self.score }
            fn created_at(&self) -> i64 { self.created_at }
            fn permalink(&self) -> &str { &self.permalink }
        }
    };
}

impl_content_item!(Comment);
impl_content_item!(Submission);

/// One user's fetched activity. Each list is most-recent-first as delivered
/// by the source; no ordering holds across the two lists.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityCorpus {
    pub comments: Vec<Comment>,
    pub submissions: Vec<Submission>,
}

impl ActivityCorpus {
    pub fn new(comments: Vec<Comment>, submissions: Vec<Submission>) -> Self {
        Self { comments, submissions }
    }

    pub fn total(&self) -> usize {
        self.comments.len() + self.submissions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Comments first, then submissions.
    pub fn items(&self) -> impl Iterator<Item = &dyn ContentItem> {
        self.comments
            .iter()
            .map(|c| c as &dyn ContentItem)
            .chain(self.submissions.iter().map(|s| s as &dyn ContentItem))
    }
}

/// Account metadata passed through verbatim into the persona.
/// `None` means the source could not provide the value.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountInfo {
    pub name: Option<String>,
    pub created_at: Option<i64>,
    pub comment_karma: i64,
    pub link_karma: i64,
    pub is_premium: bool,
    pub is_moderator: bool,
}

impl AccountInfo {
    pub fn named(name: impl Into<String>) -> Self {
        Self { name: Some(name.into()), ..Default::default() }
    }
}

/// What an activity source hands back for one user.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Activity {
    pub account: AccountInfo,
    pub corpus: ActivityCorpus,
}
