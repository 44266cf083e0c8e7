//! Relocation engine
//!
//! Moves candidate files from the working directory into the target tree in
//! two phases:
//! 1. cache hits are renamed straight into their remembered directory
//! 2. whatever is left is looked up by a single walk of the target tree
//!    (see [`fallback`])
//!
//! Per-file state lives in a [`RunState`] that is threaded through both
//! phases and finally summarized.

pub mod fallback;


use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::cache::CacheMap;
use crate::error::{Result, fs::dir_create_failed, fs::move_failed, setup};
use crate::ui::Report;

/// Where a candidate file stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveStatus {
    /// Not moved yet; still eligible for the next phase
    Pending,
    Moved,
    /// Given up on; no later phase will try again
    Failed,
}

/// A candidate file found in the working directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    pub name: String,
    pub source_path: PathBuf,
    pub status: MoveStatus,
}

impl FileRecord {
    pub fn is_moved(&self) -> bool {
        self.status == MoveStatus::Moved
    }
}

/// Mutable state of one relocation run
#[derive(Debug, Default)]
pub struct RunState {
    files: BTreeMap<String, FileRecord>,
    discovered: BTreeMap<String, PathBuf>,
}

impl RunState {
    pub fn new(candidates: BTreeMap<String, PathBuf>) -> Self {
        let files = candidates
            .into_iter()
            .map(|(name, source_path)| {
                let record = FileRecord {
                    name: name.clone(),
                    source_path,
                    status: MoveStatus::Pending,
                };
                (name, record)
            })
            .collect();

        Self {
            files,
            discovered: BTreeMap::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&FileRecord> {
        self.files.get(name)
    }

    /// Names of files still waiting for a destination
    pub fn pending(&self) -> BTreeSet<String> {
        self.files
            .values()
            .filter(|f| f.status == MoveStatus::Pending)
            .map(|f| f.name.clone())
            .collect()
    }

    pub fn set_status(&mut self, name: &str, status: MoveStatus) {
        if let Some(file) = self.files.get_mut(name) {
            file.status = status;
        }
    }

    /// Remember a destination found by scanning the tree
    pub fn record_discovery(&mut self, name: &str, dir: &Path) {
        self.discovered.insert(name.to_string(), dir.to_path_buf());
    }

    /// Destinations learned during this run, to be appended to the cache
    pub fn discovered(&self) -> &BTreeMap<String, PathBuf> {
        &self.discovered
    }

    pub fn summary(&self) -> Summary {
        let moved = self.files.values().filter(|f| f.is_moved()).count();
        Summary {
            moved,
            failed: self.files.len() - moved,
        }
    }
}

/// Counts printed at the end of a run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub moved: usize,
    pub failed: usize,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "finished, moved {} file(s)", self.moved)?;
        if self.failed > 0 {
            write!(f, ", failed to move {} file(s)", self.failed)?;
        }
        write!(f, ".")
    }
}

/// Check whether `path` has exactly `extension` (given without the dot)
pub fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension().is_some_and(|ext| ext == extension)
}

/// List the regular files directly in `dir` carrying `extension`
pub fn gather_candidates(dir: &Path, extension: &str) -> Result<BTreeMap<String, PathBuf>> {
    let entries = fs::read_dir(dir).map_err(|e| setup::working_dir_unreadable(dir, e))?;

    let mut candidates = BTreeMap::new();
    for entry in entries {
        let entry = entry.map_err(|e| setup::working_dir_unreadable(dir, e))?;
        let path = entry.path();
        if !path.is_file() || !has_extension(&path, extension) {
            continue;
        }

        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            debug!(path = %path.display(), "skipping file with non UTF-8 name");
            continue;
        };
        candidates.insert(name.to_string(), path.clone());
    }

    debug!(count = candidates.len(), dir = %dir.display(), "gathered candidates");
    Ok(candidates)
}

/// Move every pending file that has a cached destination
///
/// Returns how many files were moved. A cache hit whose directory can't be
/// created is marked [`MoveStatus::Failed`]; a failed rename leaves the file
/// pending for the tree scan.
pub fn resolve_from_cache(
    state: &mut RunState,
    cache: &CacheMap,
    reporter: &mut dyn Report,
) -> usize {
    let mut moved = 0;

    for name in state.pending() {
        let Some(dir) = cache.get(&name) else {
            continue;
        };
        let Some(source) = state.get(&name).map(|f| f.source_path.clone()) else {
            continue;
        };
        debug!(file = %name, dir = %dir.display(), "cache hit");

        if !dir.is_dir() {
            if let Err(e) = fs::create_dir_all(dir) {
                reporter.error(&dir_create_failed(&name, dir, e));
                state.set_status(&name, MoveStatus::Failed);
                continue;
            }
        }

        let destination = dir.join(&name);
        match fs::rename(&source, &destination) {
            Ok(()) => {
                state.set_status(&name, MoveStatus::Moved);
                reporter.moved(&name, &destination);
                moved += 1;
            }
            Err(e) => reporter.error(&move_failed(&name, &destination, e)),
        }
    }

    moved
}
