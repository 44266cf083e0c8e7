//! Destination cache for relocated files
//!
//! Remembers, per file name, the directory of the target tree the file was
//! last moved into, so later runs can skip the recursive scan.
//!
//! ## File format
//!
//! ```text
//! CpsBundlerCache.txt
//! foo.god=/tree/bundleA/sub1
//! bar.god=/tree/bundleB/sub2
//! ```
//!
//! One `filename=directory` pair per line, UTF-8. The file is only ever
//! appended to, so a name may appear several times; the last line wins on
//! load. There is no escaping: names or directories containing `=` or a
//! newline cannot be stored.


use std::collections::{BTreeMap, HashMap};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::{Result, fs::cache_write_failed};

/// Known destinations, keyed by file name
pub type CacheMap = HashMap<String, PathBuf>;

/// Load the cache at `path`
///
/// A missing, empty or unreadable file yields an empty map. Lines that are
/// not UTF-8 or lack a separator, and lines whose directory no longer exists,
/// are skipped one by one.
pub fn load(path: &Path) -> CacheMap {
    let content = match fs::read(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "no destination cache yet");
            return CacheMap::new();
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "ignoring unreadable destination cache");
            return CacheMap::new();
        }
    };

    let mut entries = CacheMap::new();
    for (line_no, raw) in content.split(|&b| b == b'\n').enumerate() {
        let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
        if raw.is_empty() {
            continue;
        }

        let Ok(line) = std::str::from_utf8(raw) else {
            debug!(line = line_no + 1, "skipping non UTF-8 cache line");
            continue;
        };
        let Some((name, dir)) = parse_line(line) else {
            debug!(line = line_no + 1, "skipping malformed cache line");
            continue;
        };

        let dir = PathBuf::from(dir);
        if !dir.is_dir() {
            debug!(file = name, dir = %dir.display(), "dropping stale cache entry");
            continue;
        }

        entries.insert(name.to_string(), dir);
    }

    debug!(count = entries.len(), "loaded destination cache");
    entries
}

/// Split a cache line at its first `=`
fn parse_line(line: &str) -> Option<(&str, &str)> {
    let (name, dir) = line.split_once('=')?;
    if name.is_empty() {
        return None;
    }
    Some((name, dir))
}

/// Append `entries` to the cache at `path`, one line each
///
/// The file is created when missing. Nothing is written for an empty map.
pub fn append(path: &Path, entries: &BTreeMap<String, PathBuf>) -> Result<()> {
    if entries.is_empty() {
        return Ok(());
    }

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| cache_write_failed(path, format!("failed to open file: {e}")))?;

    let mut buf = String::new();
    for (name, dir) in entries {
        buf.push_str(name);
        buf.push('=');
        buf.push_str(&dir.to_string_lossy());
        buf.push('\n');
    }

    file.write_all(buf.as_bytes())
        .map_err(|e| cache_write_failed(path, e))?;

    debug!(count = entries.len(), path = %path.display(), "appended destination cache");
    Ok(())
}
