use std::path::{Path, PathBuf};

/// Per-content-type fetch limit used when nothing else is configured.
pub const DEFAULT_LIMIT: usize = 100;

/// Explicit configuration handed to an activity source at construction.
#[derive(Clone, Debug)]
pub struct SourceConfig {
    pub base_dir: PathBuf,
    pub comments_dir: PathBuf,
    pub submissions_dir: PathBuf,
    pub limit: usize,              // max items kept per content type
    pub file_concurrency: usize,   // monthly files decoded in parallel
    pub progress: bool,            // show progress bar
    pub read_buffer_bytes: usize,  // BufReader capacity
}

impl Default for SourceConfig {
    fn default() -> Self {
        let base = PathBuf::from("./reddit");
        Self {
            comments_dir: base.join("comments"),
            submissions_dir: base.join("submissions"),
            base_dir: base,
            limit: DEFAULT_LIMIT,
            file_concurrency: 1,
            progress: true,
            read_buffer_bytes: 256 * 1024,
        }
    }
}

impl SourceConfig {
    /// Defaults overridden by `PERSONA_ARCHIVE_DIR`, `PERSONA_LIMIT` and
    /// `PERSONA_FILE_CONCURRENCY` when set. Unparseable numbers are ignored.
    pub fn from_env() -> Self {
        let mut cfg = Self::default();
        if let Ok(dir) = std::env::var("PERSONA_ARCHIVE_DIR") {
            if !dir.trim().is_empty() {
                cfg = cfg.with_base_dir(dir.trim());
            }
        }
        if let Some(n) = env_usize("PERSONA_LIMIT") {
            cfg = cfg.with_limit(n);
        }
        if let Some(n) = env_usize("PERSONA_FILE_CONCURRENCY") {
            cfg = cfg.with_file_concurrency(n);
        }
        cfg
    }

    pub fn with_base_dir(mut self, base_dir: impl AsRef<Path>) -> Self {
        let base = base_dir.as_ref().to_path_buf();
        self.comments_dir = base.join("comments");
        self.submissions_dir = base.join("submissions");
        self.base_dir = base;
        self
    }
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }
    pub fn with_file_concurrency(mut self, n: usize) -> Self {
        self.file_concurrency = n.max(1);
        self
    }
    pub fn with_progress(mut self, yes: bool) -> Self {
        self.progress = yes;
        self
    }
}

fn env_usize(key: &str) -> Option<usize> {
    let raw = std::env::var(key).ok()?;
    match raw.trim().parse() {
        Ok(n) => Some(n),
        Err(_) => {
            tracing::warn!("{} is set but is not a number: {}", key, raw);
            None
        }
    }
}
