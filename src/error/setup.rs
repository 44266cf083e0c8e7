//! Setup errors

use std::path::Path;

use super::BundlerError;

/// Creates a target not found error
pub fn target_not_found(path: &Path) -> BundlerError {
    BundlerError::TargetNotFound {
        path: path.display().to_string(),
    }
}

/// Creates a target unset error naming the environment variable consulted
pub fn target_unset(var: impl Into<String>) -> BundlerError {
    BundlerError::TargetRootUnset { var: var.into() }
}

/// Creates an unreadable working directory error
pub fn working_dir_unreadable(path: &Path, reason: impl ToString) -> BundlerError {
    BundlerError::WorkingDirUnreadable {
        path: path.display().to_string(),
        reason: reason.to_string(),
    }
}
