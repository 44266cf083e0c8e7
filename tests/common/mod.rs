//! Common test utilities for cps-bundler integration tests

use std::path::PathBuf;

use assert_cmd::Command;
use tempfile::TempDir;

/// A working directory and a target tree side by side
pub struct TestSandbox {
    /// Temporary directory holding both
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Directory the binary runs in
    pub work: PathBuf,
    /// Target tree the files are moved into
    pub tree: PathBuf,
}

impl TestSandbox {
    /// Create a new sandbox with empty work and tree directories
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let work = temp.path().join("work");
        let tree = temp.path().join("tree");
        std::fs::create_dir_all(&work).expect("Failed to create work directory");
        std::fs::create_dir_all(&tree).expect("Failed to create tree directory");
        Self { temp, work, tree }
    }

    /// Write a file into the working directory
    #[allow(dead_code)]
    pub fn write_source(&self, name: &str, content: &str) {
        std::fs::write(self.work.join(name), content).expect("Failed to write source file");
    }

    /// Write a file somewhere under the target tree
    #[allow(dead_code)]
    pub fn write_tree_file(&self, rel: &str, content: &str) -> PathBuf {
        let path = self.tree.join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&path, content).expect("Failed to write tree file");
        path
    }

    /// Read a file from the target tree
    #[allow(dead_code)]
    pub fn read_tree_file(&self, rel: &str) -> String {
        std::fs::read_to_string(self.tree.join(rel)).expect("Failed to read tree file")
    }

    /// Path of the cache file in the working directory
    #[allow(dead_code)]
    pub fn cache_path(&self) -> PathBuf {
        self.work.join("CpsBundlerCache.txt")
    }

    /// Command running the binary inside the working directory
    pub fn cmd(&self) -> Command {
        let mut cmd = bundler_cmd();
        cmd.current_dir(&self.work)
            .env_remove("CPS_BUNDLER_TARGET")
            .env_remove("RUST_LOG");
        cmd
    }
}

// Temporary fix for deprecated cargo_bin - will be updated when build-dir issues are resolved
#[allow(deprecated)]
pub fn bundler_cmd() -> Command {
    Command::cargo_bin("cps-bundler").expect("Failed to find cps-bundler binary")
}

/// Exit status observed by the parent for a code passed to `process::exit`
#[allow(dead_code)]
pub fn exit_status(code: i32) -> i32 {
    if cfg!(windows) { code } else { code & 0xff }
}
