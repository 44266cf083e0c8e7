//! Tree scan for files the cache could not place
//!
//! Walks the target root once. The first file with a pending name wins; the
//! walk stops as soon as nothing is pending. Walk order is whatever the file
//! system yields, so with duplicate names under the tree the chosen
//! destination is not deterministic.

use std::fs;
use std::path::Path;

use tracing::debug;
use walkdir::WalkDir;

use super::{MoveStatus, RunState, has_extension};
use crate::error::fs::move_failed;
use crate::ui::{self, Report};

/// Move pending files onto their namesakes under `target_root`
///
/// Returns how many files were moved. Each successful move records the
/// containing directory as a new cache entry. Files still pending afterwards
/// have no destination anywhere in the tree.
pub fn resolve_by_traversal(
    state: &mut RunState,
    target_root: &Path,
    extension: &str,
    reporter: &mut dyn Report,
) -> usize {
    let mut pending = state.pending();
    if pending.is_empty() {
        return 0;
    }

    let spinner = ui::scan_spinner(target_root);
    let mut moved = 0;

    for entry in WalkDir::new(target_root) {
        if pending.is_empty() {
            break;
        }

        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                debug!(error = %e, "skipping unreadable entry");
                continue;
            }
        };
        if entry.file_type().is_dir() {
            ui::scanning(&spinner, entry.path());
            continue;
        }
        // follows symlinks, like the working directory scan
        if !entry.path().is_file() || !has_extension(entry.path(), extension) {
            continue;
        }
        let Some(name) = entry.file_name().to_str() else {
            continue;
        };
        if !pending.remove(name) {
            continue;
        }
        let Some(source) = state.get(name).map(|f| f.source_path.clone()) else {
            continue;
        };

        let destination = entry.path();
        match fs::rename(&source, destination) {
            Ok(()) => {
                state.set_status(name, MoveStatus::Moved);
                if let Some(dir) = destination.parent() {
                    state.record_discovery(name, dir);
                }
                spinner.suspend(|| reporter.moved(name, destination));
                moved += 1;
            }
            Err(e) => {
                state.set_status(name, MoveStatus::Failed);
                spinner.suspend(|| reporter.error(&move_failed(name, destination, e)));
            }
        }
    }

    spinner.finish_and_clear();

    for name in &pending {
        debug!(file = %name, "no destination found in target tree");
    }

    moved
}
