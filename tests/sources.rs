#[path = "common/mod.rs"]
mod common;

use common::*;
use persona::{AccountInfo, ActivitySource, ArchiveSource, DumpSource, SourceConfig, SourceError};
use serde_json::json;
use std::fs;

fn write_dump(dir: &std::path::Path) -> std::path::PathBuf {
    let dump = json!({
        "account": {
            "name": "alice", "created_utc": 1136073600.0, "comment_karma": 5,
            "link_karma": 7, "is_gold": false, "is_mod": true
        },
        "comments": [
            {"id":"c1","subreddit":"rust","body":"hi there","score":3,
             "created_utc":1136080000,"permalink":"/r/rust/comments/x/c1/"},
            {"id":"c2","subreddit":"rust","score":1,"created_utc":1136079000},
            {"id":"c3","subreddit":"golang","body":"no score here","created_utc":1136070000.5}
        ],
        "submissions": [
            {"id":"s1","subreddit":"rust","title":"Rust news","selftext":"details",
             "url":"http://example.com/x","score":2,"created_utc":1136075000,
             "permalink":"/r/rust/comments/s1/"},
            {"title":"no id or subreddit"}
        ]
    });
    let path = dir.join("alice.json");
    fs::write(&path, dump.to_string()).unwrap();
    path
}

/// c2 has no body and the second submission has no id, so both are skipped.
#[test]
fn dump_skips_malformed_items() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_dump(dir.path());

    let activity = DumpSource::new(&path).try_fetch("alice", 100).unwrap();
    let ids: Vec<&str> = activity.corpus.comments.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["c1", "c3"]);
    assert_eq!(activity.corpus.comments[1].score, 0);
    assert_eq!(activity.corpus.comments[1].created_at, 1136070000);
    assert_eq!(activity.corpus.comments[1].permalink, "");

    assert_eq!(activity.corpus.submissions.len(), 1);
    let s1 = &activity.corpus.submissions[0];
    assert_eq!((s1.title.as_str(), s1.body.as_str(), s1.url.as_str()), ("Rust news", "details", "http://example.com/x"));

    assert_eq!(activity.account.name.as_deref(), Some("alice"));
    assert_eq!(activity.account.created_at, Some(1136073600));
    assert_eq!((activity.account.comment_karma, activity.account.link_karma), (5, 7));
    assert!(!activity.account.is_premium);
    assert!(activity.account.is_moderator);
}

#[test]
fn dump_respects_limit() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_dump(dir.path());
    let activity = DumpSource::new(&path).fetch("alice", 1);
    assert_eq!(activity.corpus.comments.len(), 1);
    assert_eq!(activity.corpus.comments[0].id, "c1");
    assert_eq!(activity.corpus.submissions.len(), 1);
}

#[test]
fn missing_dump_degrades_to_empty_activity() {
    let dir = tempfile::tempdir().unwrap();
    let source = DumpSource::new(dir.path().join("nobody.json"));
    assert!(matches!(source.try_fetch("nobody", 10), Err(SourceError::Unavailable(_))));

    let activity = source.fetch("nobody", 10);
    assert!(activity.corpus.is_empty());
    assert_eq!(activity.account, AccountInfo::default());
}

#[test]
fn invalid_dump_json_degrades_to_empty_activity() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(&path, "{ not json").unwrap();
    let source = DumpSource::new(&path);
    assert!(matches!(source.try_fetch("x", 10), Err(SourceError::Json(_))));
    assert!(source.fetch("x", 10).corpus.is_empty());
}

/// Author matching ignores case, months are read newest first and each list
/// comes back newest first.
#[test]
fn archive_collects_one_authors_items() {
    let base = make_archive_basic();
    let source = ArchiveSource::new(SourceConfig::default().with_base_dir(&base).with_progress(false));

    let activity = source.try_fetch("alice", 100).unwrap();
    let ids: Vec<&str> = activity.corpus.comments.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["c4", "c3", "c1"]);
    assert_eq!(activity.corpus.comments[1].community, "golang");

    assert_eq!(activity.corpus.submissions.len(), 1);
    assert_eq!(activity.corpus.submissions[0].id, "s1");
    assert_eq!(activity.corpus.submissions[0].score, 183);
    assert_eq!(activity.account.name.as_deref(), Some("alice"));
}

#[test]
fn archive_limit_keeps_most_recent() {
    let base = make_archive_basic();
    let source = ArchiveSource::new(
        SourceConfig::default().with_base_dir(&base).with_progress(false).with_file_concurrency(2),
    );
    let activity = source.fetch("alice", 2);
    let ids: Vec<&str> = activity.corpus.comments.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["c4", "c3"]);
}

#[test]
fn archive_without_matches_or_directory() {
    let base = make_archive_basic();
    let source = ArchiveSource::new(SourceConfig::default().with_base_dir(&base).with_progress(false));
    assert!(source.fetch("carol", 100).corpus.is_empty());

    let missing = ArchiveSource::new(SourceConfig::default().with_base_dir(base.join("nope")).with_progress(false));
    assert!(matches!(missing.try_fetch("alice", 10), Err(SourceError::Unavailable(_))));
    assert!(missing.fetch("alice", 10).corpus.is_empty());
}

/// End to end: archive activity through analysis and rendering.
#[test]
fn archive_activity_renders() {
    let base = make_archive_basic();
    let source = ArchiveSource::new(SourceConfig::default().with_base_dir(&base).with_progress(false));
    let activity = source.fetch("alice", 100);
    let persona = persona::analyze("alice", activity.account, activity.corpus);
    assert_eq!(persona.interests.top_communities, vec!["rust", "golang"]);

    let doc = persona::render(&persona);
    assert!(doc.contains("  (Source: Post 'Rust news' in r/rust)\n"));
    assert!(doc.contains("- Analyzed 3 comments and 1 submissions\n"));
    assert!(doc.contains("Permalink: https://reddit.com/r/rust/comments/z/c4/\n"));
}
