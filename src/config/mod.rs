//! Run configuration
//!
//! Built once from the command line and the current directory, validated, and
//! then only read. Every component receives the pieces it needs from here.

use std::path::{Path, PathBuf};

use crate::cli::{CacheMode, Cli, TARGET_ENV};
use crate::error::{BundlerError, Result, setup};

/// File name of the destination cache, kept in the working directory
pub const CACHE_FILE_NAME: &str = "CpsBundlerCache.txt";

/// File name of the bundle index, kept in the target root
pub const INDEX_FILE_NAME: &str = "bundle-index.txt";

/// Validated settings for a single run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub target_root: PathBuf,
    pub working_dir: PathBuf,
    pub cache_path: PathBuf,
    /// Extension without its leading dot
    pub extension: String,
    pub cache_enabled: bool,
}

impl Config {
    /// Build the configuration for `cli`, using `working_dir` as the source of files
    pub fn from_cli(cli: &Cli, working_dir: &Path) -> Result<Self> {
        let target_root = cli
            .target
            .clone()
            .ok_or_else(|| setup::target_unset(TARGET_ENV))?;

        Self::new(
            target_root,
            working_dir,
            &cli.extension,
            cli.cache == CacheMode::On,
        )
    }

    pub fn new(
        target_root: PathBuf,
        working_dir: &Path,
        extension: &str,
        cache_enabled: bool,
    ) -> Result<Self> {
        if !target_root.exists() {
            return Err(setup::target_not_found(&target_root));
        }
        // cached destinations are stored as absolute directories
        let target_root =
            std::path::absolute(&target_root).map_err(|_| setup::target_not_found(&target_root))?;

        let extension = normalize_extension(extension)?;

        Ok(Self {
            target_root,
            working_dir: working_dir.to_path_buf(),
            cache_path: working_dir.join(CACHE_FILE_NAME),
            extension,
            cache_enabled,
        })
    }

    /// Path of the bundle index under the target root
    pub fn index_path(&self) -> PathBuf {
        self.target_root.join(INDEX_FILE_NAME)
    }
}

/// Strip one leading dot; ".god" and "god" both mean `*.god`
fn normalize_extension(extension: &str) -> Result<String> {
    let trimmed = extension.trim();
    let bare = trimmed.strip_prefix('.').unwrap_or(trimmed);

    if bare.is_empty() || bare.contains(['.', '/', '\\']) {
        return Err(BundlerError::InvalidExtension {
            extension: extension.to_string(),
        });
    }

    Ok(bare.to_string())
}
