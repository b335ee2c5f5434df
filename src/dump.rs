//! Activity from a JSON dump of one user's API responses:
//! `{"account": {...}, "comments": [...], "submissions": [...]}`.

use crate::error::{Result, SourceError};
use crate::model::{AccountInfo, Activity, ActivityCorpus};
use crate::record::{RawAccount, RawRecord};
use crate::source::{ActivitySource, LoadStats};
use serde::Deserialize;
use serde_json::Value;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

#[derive(Debug, Default, Deserialize)]
struct RawDump {
    #[serde(default)]
    account: Option<RawAccount>,
    #[serde(default)]
    comments: Vec<Value>,
    #[serde(default)]
    submissions: Vec<Value>,
}

/// Reads a dump file. Items stay in file order (expected newest first) and are
/// cut to `limit` per content type.
#[derive(Clone, Debug)]
pub struct DumpSource {
    path: PathBuf,
}

impl DumpSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self { path: path.as_ref().to_path_buf() }
    }
}

impl ActivitySource for DumpSource {
    fn try_fetch(&self, username: &str, limit: usize) -> Result<Activity> {
        if !self.path.is_file() {
            return Err(SourceError::Unavailable(self.path.clone()));
        }
        let reader = BufReader::new(File::open(&self.path)?);
        let dump: RawDump = serde_json::from_reader(reader)?;
        Ok(activity_from_values(username, dump.account, dump.comments, dump.submissions, limit))
    }
}

/// Convert raw JSON items, skipping any that fail to map onto a typed item.
pub fn activity_from_values(
    username: &str,
    account: Option<RawAccount>,
    comments: Vec<Value>,
    submissions: Vec<Value>,
    limit: usize,
) -> Activity {
    let mut stats = LoadStats::default();

    let comments: Vec<_> = comments
        .into_iter()
        .filter_map(|v| convert(v, RawRecord::into_comment, &mut stats.skipped))
        .take(limit)
        .collect();
    let submissions: Vec<_> = submissions
        .into_iter()
        .filter_map(|v| convert(v, RawRecord::into_submission, &mut stats.skipped))
        .take(limit)
        .collect();

    stats.comments = comments.len();
    stats.submissions = submissions.len();
    stats.log(username);

    let account = account.map(AccountInfo::from).unwrap_or_default();
    Activity { account, corpus: ActivityCorpus::new(comments, submissions) }
}

fn convert<T>(v: Value, into: fn(RawRecord) -> Result<T>, skipped: &mut usize) -> Option<T> {
    let parsed = serde_json::from_value::<RawRecord>(v)
        .map_err(SourceError::from)
        .and_then(into);
    match parsed {
        Ok(item) => Some(item),
        Err(e) => {
            tracing::debug!("skipping record: {}", e);
            *skipped += 1;
            None
        }
    }
}
