use persona::{SourceConfig, DEFAULT_LIMIT};
use std::path::PathBuf;

const VARS: [&str; 3] = ["PERSONA_ARCHIVE_DIR", "PERSONA_LIMIT", "PERSONA_FILE_CONCURRENCY"];

fn clear_env() {
    for key in VARS {
        std::env::remove_var(key);
    }
}

// One test owns the process environment; splitting it would race.
#[test]
fn from_env_overrides_and_ignores_bad_numbers() {
    clear_env();
    let cfg = SourceConfig::from_env();
    assert_eq!(cfg.base_dir, PathBuf::from("./reddit"));
    assert_eq!(cfg.limit, DEFAULT_LIMIT);
    assert_eq!(cfg.file_concurrency, 1);

    std::env::set_var("PERSONA_ARCHIVE_DIR", " /data/reddit ");
    std::env::set_var("PERSONA_LIMIT", "7");
    std::env::set_var("PERSONA_FILE_CONCURRENCY", "4");
    let cfg = SourceConfig::from_env();
    assert_eq!(cfg.base_dir, PathBuf::from("/data/reddit"));
    assert_eq!(cfg.comments_dir, PathBuf::from("/data/reddit/comments"));
    assert_eq!(cfg.submissions_dir, PathBuf::from("/data/reddit/submissions"));
    assert_eq!(cfg.limit, 7);
    assert_eq!(cfg.file_concurrency, 4);

    std::env::set_var("PERSONA_ARCHIVE_DIR", "  ");
    std::env::set_var("PERSONA_LIMIT", "lots");
    std::env::set_var("PERSONA_FILE_CONCURRENCY", "0");
    let cfg = SourceConfig::from_env();
    assert_eq!(cfg.base_dir, PathBuf::from("./reddit"));
    assert_eq!(cfg.limit, DEFAULT_LIMIT);
    assert_eq!(cfg.file_concurrency, 1);

    clear_env();
}
