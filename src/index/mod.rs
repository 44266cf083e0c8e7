//! Bundle index parsing
//!
//! The target tree describes its taxonomy in `bundle-index.txt`, where the
//! nesting level of every line is given only by its leading tabs:
//!
//! ```text
//! \tBundleA              bundle
//! \t\tSubBundle1         sub-bundle
//! \t\t\tSomeClass        class or module
//! ```
//!
//! The parser walks the file top to bottom, remembers the current bundle and
//! sub-bundle, and emits a [`BundleRecord`] for every class line that has
//! both.


use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{BundlerError, Result};

/// A line of the index, classified by its indentation depth
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexLine<'a> {
    Bundle(&'a str),
    SubBundle(&'a str),
    ClassOrModule(&'a str),
    Unrecognized,
}

impl<'a> IndexLine<'a> {
    /// Classify `line` by counting its leading tabs
    ///
    /// Only depths 1, 2 and 3 are recognized, and only when no further tab
    /// hides in the whitespace before the content.
    pub fn classify(line: &'a str) -> Self {
        let depth = line.bytes().take_while(|&b| b == b'\t').count();
        let rest = &line[depth..];

        let content = rest.trim();
        if content.is_empty() {
            return IndexLine::Unrecognized;
        }

        let leading = &rest[..rest.len() - rest.trim_start().len()];
        if leading.contains('\t') {
            return IndexLine::Unrecognized;
        }

        match depth {
            1 => IndexLine::Bundle(content),
            2 => IndexLine::SubBundle(content),
            3 => IndexLine::ClassOrModule(content),
            _ => IndexLine::Unrecognized,
        }
    }
}

/// A class or module together with the bundle and sub-bundle it belongs to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleRecord {
    pub bundle: String,
    pub sub_bundle: String,
    pub class_or_module: String,
}

/// A class line seen while the bundle or sub-bundle was still unknown
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnassignableClass {
    /// 1-based line number in the index file
    pub line: usize,
    pub bundle: String,
    pub sub_bundle: String,
    pub class_or_module: String,
}

/// What a single line contributed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseEvent {
    Record(BundleRecord),
    Unassignable(UnassignableClass),
}

/// Line-by-line parser state
#[derive(Debug, Default)]
pub struct IndexParser {
    bundle: String,
    sub_bundle: String,
    line_no: usize,
}

impl IndexParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed the next line of the file
    pub fn feed(&mut self, line: &str) -> Option<ParseEvent> {
        self.line_no += 1;

        match IndexLine::classify(line) {
            IndexLine::Bundle(name) => {
                self.bundle = name.to_string();
                // a sub-bundle never outlives the bundle it was declared under
                self.sub_bundle.clear();
                None
            }
            IndexLine::SubBundle(name) => {
                self.sub_bundle = name.to_string();
                None
            }
            IndexLine::ClassOrModule(name) => Some(self.class_event(name)),
            IndexLine::Unrecognized => {
                debug!(line = self.line_no, "ignoring unrecognized index line");
                None
            }
        }
    }

    fn class_event(&self, name: &str) -> ParseEvent {
        if self.bundle.is_empty() || self.sub_bundle.is_empty() {
            return ParseEvent::Unassignable(UnassignableClass {
                line: self.line_no,
                bundle: self.bundle.clone(),
                sub_bundle: self.sub_bundle.clone(),
                class_or_module: name.to_string(),
            });
        }

        ParseEvent::Record(BundleRecord {
            bundle: self.bundle.clone(),
            sub_bundle: self.sub_bundle.clone(),
            class_or_module: name.to_string(),
        })
    }
}

/// Parse `text` line by line, yielding events in file order
pub fn events(text: &str) -> impl Iterator<Item = ParseEvent> + '_ {
    let mut parser = IndexParser::new();
    text.lines().filter_map(move |line| parser.feed(line))
}

/// Read the index file at `path`
///
/// The file must exist and be a regular file.
pub fn read(path: &Path) -> Result<String> {
    let display = || path.display().to_string();

    let metadata = fs::metadata(path).map_err(|_| BundlerError::IndexNotFound { path: display() })?;
    if !metadata.is_file() {
        return Err(BundlerError::IndexNotAFile { path: display() });
    }

    fs::read_to_string(path).map_err(|e| BundlerError::IndexReadFailed {
        path: display(),
        reason: e.to_string(),
    })
}
