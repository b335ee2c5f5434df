#![allow(dead_code)]

use persona::{ActivityCorpus, Comment, Submission};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// 2006-01-01 00:00:00 UTC.
pub const JAN_2006: i64 = 1136073600;
/// 2006-02-01 00:00:00 UTC.
pub const FEB_2006: i64 = 1138752000;
pub const HOUR: i64 = 3600;

pub fn comment(id: &str, community: &str, body: &str, score: i64, created_at: i64) -> Comment {
    Comment {
        id: id.to_string(),
        community: community.to_string(),
        body: body.to_string(),
        score,
        created_at,
        permalink: format!("/r/{community}/comments/{id}/"),
    }
}

pub fn submission(id: &str, community: &str, title: &str, body: &str, score: i64, created_at: i64) -> Submission {
    Submission {
        id: id.to_string(),
        community: community.to_string(),
        title: title.to_string(),
        body: body.to_string(),
        score,
        created_at,
        permalink: format!("/r/{community}/comments/{id}/"),
        url: String::new(),
    }
}

/// `n` comments in r/test, all with `score`, one per hour from JAN_2006.
pub fn uniform_comments(n: usize, score: i64) -> ActivityCorpus {
    let comments = (0..n)
        .map(|i| comment(&format!("c{i}"), "test", "plain words", score, JAN_2006 + i as i64 * HOUR))
        .collect();
    ActivityCorpus::new(comments, vec![])
}

/// Comments whose timestamps fall on the given UTC hours of 2006-01-01.
pub fn comments_at_hours(hours: &[i64]) -> ActivityCorpus {
    let comments = hours
        .iter()
        .enumerate()
        .map(|(i, h)| comment(&format!("c{i}"), "test", "plain words", 1, JAN_2006 + h * HOUR))
        .collect();
    ActivityCorpus::new(comments, vec![])
}

pub fn bodies(texts: &[&str]) -> ActivityCorpus {
    let comments = texts
        .iter()
        .enumerate()
        .map(|(i, t)| comment(&format!("c{i}"), "test", t, 1, JAN_2006))
        .collect();
    ActivityCorpus::new(comments, vec![])
}

/// Write a compressed `.zst` file containing the provided JSONL lines.
pub fn write_zst_lines(path: &Path, lines: &[String]) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    let f = File::create(path).unwrap();
    let mut enc = zstd::stream::write::Encoder::new(f, 3).unwrap();
    for l in lines {
        writeln!(&mut enc, "{}", l).unwrap();
    }
    enc.finish().unwrap();
}

/// Write plain JSONL lines.
pub fn write_lines(path: &Path, lines: &[String]) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    let mut f = File::create(path).unwrap();
    for l in lines {
        writeln!(&mut f, "{}", l).unwrap();
    }
}

/// Build a tiny monthly archive:
/// - RC_2006-01.zst: c1 by "alice", c2 by "bob", c3 by "ALICE" (later than c1), one non-JSON line.
/// - RC_2006-02.jsonl: c4 by "alice", c5 by "alice" with no body (malformed).
/// - RS_2006-01.zst: s1 by "alice", s2 by "bob".
pub fn make_archive_basic() -> PathBuf {
    use serde_json::json;

    let dir = tempfile::tempdir().unwrap();
    let base = dir.into_path();

    let rc_jan = vec![
        json!({"id":"c1","author":"alice","subreddit":"rust","body":"first comment","score":2,
               "created_utc":JAN_2006 + HOUR,"permalink":"/r/rust/comments/x/c1/"}).to_string(),
        json!({"id":"c2","author":"bob","subreddit":"rust","body":"not alice","score":9,
               "created_utc":JAN_2006 + 2 * HOUR,"permalink":"/r/rust/comments/x/c2/"}).to_string(),
        json!({"id":"c3","author":"ALICE","subreddit":"golang","body":"second comment","score":4,
               "created_utc":JAN_2006 + 3 * HOUR,"permalink":"/r/golang/comments/y/c3/"}).to_string(),
        "this line is not json".to_string(),
    ];
    write_zst_lines(&base.join("comments").join("RC_2006-01.zst"), &rc_jan);

    let rc_feb = vec![
        json!({"id":"c4","author":"alice","subreddit":"rust","body":"newest comment","score":7,
               "created_utc":FEB_2006 + HOUR,"permalink":"/r/rust/comments/z/c4/"}).to_string(),
        json!({"id":"c5","author":"alice","subreddit":"rust","score":1,
               "created_utc":FEB_2006 + 2 * HOUR}).to_string(),
    ];
    write_lines(&base.join("comments").join("RC_2006-02.jsonl"), &rc_feb);

    let rs_jan = vec![
        json!({"id":"s1","author":"alice","subreddit":"rust","title":"Rust news","selftext":"",
               "score":183,"created_utc":JAN_2006,"permalink":"/r/rust/comments/s1/",
               "url":"http://example.com/x"}).to_string(),
        json!({"id":"s2","author":"bob","subreddit":"rust","title":"Other news","selftext":"",
               "score":1,"created_utc":JAN_2006 + 5,"permalink":"/r/rust/comments/s2/"}).to_string(),
    ];
    write_zst_lines(&base.join("submissions").join("RS_2006-01.zst"), &rs_jan);

    base
}
