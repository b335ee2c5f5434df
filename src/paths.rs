use regex::Regex;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use walkdir::WalkDir;

/// Type of monthly file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FileKind {
    Comment,    // RC_YYYY-MM.{zst,jsonl}
    Submission, // RS_YYYY-MM.{zst,jsonl}
}

#[derive(Clone, Debug)]
pub struct FileJob {
    pub kind: FileKind,
    pub month: (u16, u8),
    pub path: PathBuf,
}

fn month_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(RC|RS)_(\d{4})-(\d{2})\.(zst|jsonl)$").unwrap())
}

fn discover_month_map(dir: &Path, kind: FileKind) -> BTreeMap<(u16, u8), PathBuf> {
    let want = match kind {
        FileKind::Comment => "RC",
        FileKind::Submission => "RS",
    };
    let mut map = BTreeMap::new();
    if !dir.exists() {
        return map;
    }
    for ent in WalkDir::new(dir).min_depth(1).max_depth(1).into_iter().flatten() {
        let Some(name) = ent.file_name().to_str() else { continue };
        let Some(caps) = month_re().captures(name) else { continue };
        if &caps[1] != want {
            continue;
        }
        let (Ok(year), Ok(month)) = (caps[2].parse::<u16>(), caps[3].parse::<u8>()) else { continue };
        if !(1..=12).contains(&month) {
            continue;
        }
        // a .zst sibling wins over .jsonl for the same month
        let is_zst = &caps[4] == "zst";
        map.entry((year, month))
            .and_modify(|p: &mut PathBuf| if is_zst { *p = ent.path().to_path_buf() })
            .or_insert_with(|| ent.path().to_path_buf());
    }
    map
}

/// Monthly files of one kind, newest month first.
pub fn discover_newest_first(dir: &Path, kind: FileKind) -> Vec<FileJob> {
    discover_month_map(dir, kind)
        .into_iter()
        .rev()
        .map(|(month, path)| FileJob { kind, month, path })
        .collect()
}
