//! Activity from a local archive of monthly dump files laid out as
//! `comments/RC_YYYY-MM.{zst,jsonl}` and `submissions/RS_YYYY-MM.{zst,jsonl}`.

use crate::config::SourceConfig;
use crate::error::{Result, SourceError};
use crate::jsonl::for_each_line;
use crate::model::{AccountInfo, Activity, ActivityCorpus};
use crate::paths::{discover_newest_first, FileJob, FileKind};
use crate::progress::make_count_progress;
use crate::record::{parse_record, RawRecord};
use crate::source::{newest_first, ActivitySource, LoadStats};
use crate::util::init_tracing_once;
use rayon::prelude::*;
use std::path::Path;

#[derive(Clone, Debug)]
pub struct ArchiveSource {
    cfg: SourceConfig,
}

impl ArchiveSource {
    pub fn new(cfg: SourceConfig) -> Self {
        Self { cfg }
    }

    /// Scan months newest first, `file_concurrency` files at a time, and stop once
    /// `limit` matches are in hand: every item in an older month is older still.
    fn scan_kind<T: Send>(
        &self,
        dir: &Path,
        kind: FileKind,
        username: &str,
        limit: usize,
        into: fn(RawRecord) -> Result<T>,
        created_at: fn(&T) -> i64,
    ) -> (Vec<T>, usize) {
        let jobs = discover_newest_first(dir, kind);
        if jobs.is_empty() || limit == 0 {
            return (Vec::new(), 0);
        }
        tracing::info!("Planned up to {} {:?} files in {}.", jobs.len(), kind, dir.display());

        let pb = if self.cfg.progress {
            Some(make_count_progress(jobs.len() as u64, &format!("Scanning {kind:?} files")))
        } else {
            None
        };

        let mut found = Vec::new();
        let mut skipped = 0usize;
        for chunk in jobs.chunks(self.cfg.file_concurrency.max(1)) {
            let parts: Vec<(Vec<T>, usize)> = chunk
                .par_iter()
                .map(|job| scan_file(job, username, self.cfg.read_buffer_bytes, into))
                .collect();
            for (items, bad) in parts {
                found.extend(items);
                skipped += bad;
            }
            if let Some(pb) = &pb { pb.inc(chunk.len() as u64); }
            if found.len() >= limit {
                break;
            }
        }
        if let Some(pb) = pb { pb.finish_with_message(format!("Scanned {kind:?} files")); }

        (newest_first(found, created_at, limit), skipped)
    }
}

/// Matching items of one file; malformed lines and records are counted, not fatal.
fn scan_file<T>(
    job: &FileJob,
    username: &str,
    read_buf_bytes: usize,
    into: fn(RawRecord) -> Result<T>,
) -> (Vec<T>, usize) {
    let mut items = Vec::new();
    let mut skipped = 0usize;
    let res = for_each_line(&job.path, read_buf_bytes, |line| {
        match parse_record(line) {
            Ok(rec) if rec.author_is(username) => match into(rec) {
                Ok(item) => items.push(item),
                Err(e) => {
                    tracing::debug!("{}: skipping record: {}", job.path.display(), e);
                    skipped += 1;
                }
            },
            Ok(_) => {}
            Err(_) => skipped += 1,
        }
        Ok(())
    });
    if let Err(e) = res {
        tracing::warn!("{}: {}", job.path.display(), e);
    }
    let (year, month) = job.month;
    tracing::debug!("{:?} {}-{:02}: {} matches, {} skipped", job.kind, year, month, items.len(), skipped);
    (items, skipped)
}

impl ActivitySource for ArchiveSource {
    fn try_fetch(&self, username: &str, limit: usize) -> Result<Activity> {
        init_tracing_once();
        if !self.cfg.base_dir.is_dir() {
            return Err(SourceError::Unavailable(self.cfg.base_dir.clone()));
        }

        let (comments, bad_c) = self.scan_kind(
            &self.cfg.comments_dir,
            FileKind::Comment,
            username,
            limit,
            RawRecord::into_comment,
            |c| c.created_at,
        );
        let (submissions, bad_s) = self.scan_kind(
            &self.cfg.submissions_dir,
            FileKind::Submission,
            username,
            limit,
            RawRecord::into_submission,
            |s| s.created_at,
        );

        let stats = LoadStats { comments: comments.len(), submissions: submissions.len(), skipped: bad_c + bad_s };
        stats.log(username);

        // monthly dumps carry no account metadata beyond the author name
        Ok(Activity {
            account: AccountInfo::named(username),
            corpus: ActivityCorpus::new(comments, submissions),
        })
    }
}
