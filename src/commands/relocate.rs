//! Relocation command
//!
//! Gathers candidates from the working directory, places cache hits, scans the
//! target tree for the rest, and appends what the scan learned to the cache.

use crate::cache::{self, CacheMap};
use crate::config::Config;
use crate::error::Result;
use crate::relocate::{self, RunState, Summary, fallback};
use crate::ui::Report;

/// Run a relocation and return its counts
pub fn run(config: &Config, reporter: &mut dyn Report) -> Result<Summary> {
    let candidates = relocate::gather_candidates(&config.working_dir, &config.extension)?;
    let mut state = RunState::new(candidates);

    // nothing to move, and no reason to touch the cache
    if state.is_empty() {
        return Ok(state.summary());
    }

    let cache = if config.cache_enabled {
        cache::load(&config.cache_path)
    } else {
        CacheMap::new()
    };

    relocate::resolve_from_cache(&mut state, &cache, reporter);
    fallback::resolve_by_traversal(
        &mut state,
        &config.target_root,
        &config.extension,
        reporter,
    );

    if config.cache_enabled {
        if let Err(e) = cache::append(&config.cache_path, state.discovered()) {
            reporter.error(&e);
        }
    }

    Ok(state.summary())
}
