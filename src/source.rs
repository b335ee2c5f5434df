use crate::error::Result;
use crate::model::{AccountInfo, Activity, ActivityCorpus};

/// Supplies one user's account metadata and recent activity.
pub trait ActivitySource {
    /// Up to `limit` most-recent items per content type, each list newest first.
    fn try_fetch(&self, username: &str, limit: usize) -> Result<Activity>;

    /// Like `try_fetch`, but an unreachable source degrades to an empty corpus
    /// so analysis still produces a (sparse) persona.
    fn fetch(&self, username: &str, limit: usize) -> Activity {
        match self.try_fetch(username, limit) {
            Ok(activity) => activity,
            Err(e) => {
                tracing::warn!("Could not fetch activity for {}: {}", username, e);
                Activity { account: AccountInfo::default(), corpus: ActivityCorpus::default() }
            }
        }
    }
}

/// Counters for one load, logged once at the end.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoadStats {
    pub comments: usize,
    pub submissions: usize,
    pub skipped: usize,
}

impl LoadStats {
    pub fn log(&self, username: &str) {
        tracing::info!(
            "Loaded {} comments and {} submissions for {} ({} malformed records skipped)",
            self.comments,
            self.submissions,
            username,
            self.skipped
        );
    }
}

/// Most recent first, then keep `limit`.
pub(crate) fn newest_first<T>(mut items: Vec<T>, created_at: impl Fn(&T) -> i64, limit: usize) -> Vec<T> {
    // stable, so equal timestamps keep source order
    items.sort_by_key(|item| std::cmp::Reverse(created_at(item)));
    items.truncate(limit);
    items
}
