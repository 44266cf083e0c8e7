//! Console output
//!
//! Everything the user is meant to read goes through a [`Report`]:
//! `INFO>` lines on stdout for moved files and index records, `ERROR>` lines
//! on stderr for anything that went wrong with a single file or line.

use std::path::Path;

use console::Style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::error::BundlerError;
use crate::index::{BundleRecord, UnassignableClass};

/// Sink for per-item results
pub trait Report {
    /// A file was moved to `destination`
    fn moved(&mut self, name: &str, destination: &Path);

    /// A non-fatal error for a single file
    fn error(&mut self, err: &BundlerError);

    /// A complete bundle index record
    fn record(&mut self, record: &BundleRecord);

    /// A class line that could not be assigned to a bundle
    fn unassignable(&mut self, class: &UnassignableClass);
}

/// Reporter printing to the terminal
#[derive(Debug, Default)]
pub struct ConsoleReporter;

fn info_prefix() -> console::StyledObject<&'static str> {
    Style::new().green().bold().apply_to("INFO>")
}

fn error_prefix() -> console::StyledObject<&'static str> {
    Style::new().red().bold().apply_to("ERROR>")
}

impl Report for ConsoleReporter {
    fn moved(&mut self, name: &str, destination: &Path) {
        println!("{} {} => {}", info_prefix(), name, destination.display());
    }

    fn error(&mut self, err: &BundlerError) {
        eprintln!("{} {}", error_prefix(), err);
    }

    fn record(&mut self, record: &BundleRecord) {
        println!(
            "{} {} / {} / {}",
            info_prefix(),
            record.bundle,
            record.sub_bundle,
            Style::new().bold().apply_to(&record.class_or_module)
        );
    }

    fn unassignable(&mut self, class: &UnassignableClass) {
        eprintln!(
            "{} cannot assign class '{}' (line {}): bundle '{}', sub-bundle '{}'",
            error_prefix(),
            class.class_or_module,
            class.line,
            class.bundle,
            class.sub_bundle
        );
    }
}

/// Spinner shown while the target tree is scanned
///
/// Hidden automatically when stderr is not a terminal.
pub fn scan_spinner(root: &Path) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner} Scanning {msg}") {
        pb.set_style(style.tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]));
    }
    pb.set_message(root.display().to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(80));
    pb
}

/// Show `dir` as the directory currently being scanned
pub fn scanning(pb: &ProgressBar, dir: &Path) {
    pb.set_message(dir.display().to_string());
}

/// Reporter that keeps every line in memory
#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingReporter {
    pub moved: Vec<(String, std::path::PathBuf)>,
    pub errors: Vec<String>,
    pub records: Vec<BundleRecord>,
    pub unassignable: Vec<UnassignableClass>,
    /// Class names of records and unassignable lines, in reporting order
    pub classes: Vec<String>,
}

#[cfg(test)]
impl Report for RecordingReporter {
    fn moved(&mut self, name: &str, destination: &Path) {
        self.moved.push((name.to_string(), destination.to_path_buf()));
    }

    fn error(&mut self, err: &BundlerError) {
        self.errors.push(err.to_string());
    }

    fn record(&mut self, record: &BundleRecord) {
        self.classes.push(record.class_or_module.clone());
        self.records.push(record.clone());
    }

    fn unassignable(&mut self, class: &UnassignableClass) {
        self.classes.push(class.class_or_module.clone());
        self.unassignable.push(class.clone());
    }
}
