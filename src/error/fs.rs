//! File system errors raised while relocating single files

use std::path::Path;

use super::BundlerError;

/// Creates a directory creation failed error for a cached destination
pub fn dir_create_failed(file: &str, dir: &Path, reason: impl ToString) -> BundlerError {
    BundlerError::DirectoryCreateFailed {
        file: file.to_string(),
        dir: dir.display().to_string(),
        reason: reason.to_string(),
    }
}

/// Creates a move failed error
pub fn move_failed(file: &str, destination: &Path, reason: impl ToString) -> BundlerError {
    BundlerError::MoveFailed {
        file: file.to_string(),
        destination: destination.display().to_string(),
        reason: reason.to_string(),
    }
}

/// Creates a cache write failed error
pub fn cache_write_failed(path: &Path, reason: impl ToString) -> BundlerError {
    BundlerError::CacheWriteFailed {
        path: path.display().to_string(),
        reason: reason.to_string(),
    }
}
