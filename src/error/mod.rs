//! Error types and handling for cps-bundler
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! Errors fall into two groups:
//! - setup errors ([`setup`]): raised before any file is touched, each mapped
//!   to its own negative process exit code
//! - per-file errors ([`fs`]): reported as `ERROR>` lines while the run keeps
//!   going with the remaining files

pub mod fs;
pub mod setup;


use miette::Diagnostic;
use thiserror::Error;

/// Main error type for cps-bundler operations
#[derive(Error, Diagnostic, Debug)]
pub enum BundlerError {
    // Setup errors
    #[error("target path doesn't exist or is invalid: {path}")]
    #[diagnostic(
        code(cps_bundler::setup::target_not_found),
        help("Pass an existing directory as the first argument")
    )]
    TargetNotFound { path: String },

    #[error("no target path given and {var} is not set")]
    #[diagnostic(
        code(cps_bundler::setup::target_unset),
        help("Pass the target directory as the first argument or set the environment variable")
    )]
    TargetRootUnset { var: String },

    #[error("invalid extension: '{extension}'")]
    #[diagnostic(
        code(cps_bundler::setup::invalid_extension),
        help("Use a non-empty suffix such as .god")
    )]
    InvalidExtension { extension: String },

    #[error("failed to read working directory {path}: {reason}")]
    #[diagnostic(code(cps_bundler::setup::working_dir_unreadable))]
    WorkingDirUnreadable { path: String, reason: String },

    // Index errors
    #[error("bundle index not found: {path}")]
    #[diagnostic(
        code(cps_bundler::index::not_found),
        help("The target directory must contain a bundle-index.txt file")
    )]
    IndexNotFound { path: String },

    #[error("bundle index is not a regular file: {path}")]
    #[diagnostic(code(cps_bundler::index::not_a_file))]
    IndexNotAFile { path: String },

    #[error("failed to read bundle index {path}: {reason}")]
    #[diagnostic(code(cps_bundler::index::read_failed))]
    IndexReadFailed { path: String, reason: String },

    // Per-file errors
    #[error("{file} cached to dir {dir}, but dir doesn't exist and cannot create one: {reason}")]
    #[diagnostic(code(cps_bundler::fs::dir_create_failed))]
    DirectoryCreateFailed {
        file: String,
        dir: String,
        reason: String,
    },

    #[error("failed to move file {file} to {destination}: {reason}")]
    #[diagnostic(code(cps_bundler::fs::move_failed))]
    MoveFailed {
        file: String,
        destination: String,
        reason: String,
    },

    // Cache errors
    #[error("failed to write to cache {path}: {reason}")]
    #[diagnostic(code(cps_bundler::cache::write_failed))]
    CacheWriteFailed { path: String, reason: String },
}

impl BundlerError {
    /// Process exit code for this error
    ///
    /// Setup failures each get a distinct negative code; anything else that
    /// escapes to `main` exits with 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            BundlerError::TargetNotFound { .. } => -1,
            BundlerError::TargetRootUnset { .. } => -2,
            BundlerError::IndexNotFound { .. }
            | BundlerError::IndexNotAFile { .. }
            | BundlerError::IndexReadFailed { .. } => -3,
            BundlerError::WorkingDirUnreadable { .. } => -4,
            BundlerError::InvalidExtension { .. } => -5,
            BundlerError::DirectoryCreateFailed { .. }
            | BundlerError::MoveFailed { .. }
            | BundlerError::CacheWriteFailed { .. } => 1,
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, BundlerError>;
