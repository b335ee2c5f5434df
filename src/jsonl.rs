//! Line streaming over monthly files, zstd-compressed or plain JSONL.

use anyhow::Result;
use std::fs::{self, File};
use std::io::{BufRead, BufReader, Read};
use std::path::Path;
use zstd::stream::read::Decoder;

#[inline]
fn warn_decode_skip(path: &Path, e: &anyhow::Error) {
    let abs = fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
    tracing::warn!(
        "Skipping file after read error\n  path : {}\n  error: {}\n\
         note : the file is likely truncated or corrupt; items it holds are left out of the corpus.",
        abs.display(),
        e
    );
}

fn is_zst(path: &Path) -> bool {
    path.extension().and_then(|e| e.to_str()) == Some("zst")
}

/// Stream `path` line by line, trimming `\r?\n`. A file that fails to open or
/// decode is logged and skipped rather than failing the run.
pub fn for_each_line(
    path: &Path,
    read_buf_bytes: usize,
    mut on_line: impl FnMut(&str) -> Result<()>,
) -> Result<()> {
    match for_each_line_attempt(path, read_buf_bytes, &mut on_line) {
        Ok(()) => Ok(()),
        Err(e) => {
            warn_decode_skip(path, &e);
            Ok(())
        }
    }
}

fn for_each_line_attempt(
    path: &Path,
    read_buf_bytes: usize,
    on_line: &mut impl FnMut(&str) -> Result<()>,
) -> Result<()> {
    let file = File::open(path)?;
    let inner: Box<dyn Read> = if is_zst(path) {
        let mut decoder = Decoder::new(file)?;
        // large monthly frames need the wider window
        decoder.window_log_max(31)?;
        Box::new(decoder)
    } else {
        Box::new(file)
    };
    let mut reader = BufReader::with_capacity(read_buf_bytes.max(8 * 1024), inner);

    let mut buf = String::with_capacity(16 * 1024);
    loop {
        buf.clear();
        let n = reader.read_line(&mut buf)?;
        if n == 0 {
            break;
        }
        if buf.ends_with('\n') {
            let _ = buf.pop();
            if buf.ends_with('\r') { let _ = buf.pop(); }
        }
        if buf.trim().is_empty() {
            continue;
        }
        on_line(&buf)?;
    }
    Ok(())
}
