//! Index command
//!
//! Reads the target tree's bundle index and prints every class with its
//! bundle and sub-bundle.

use std::fmt;

use crate::config::Config;
use crate::error::Result;
use crate::index::{self, ParseEvent};
use crate::ui::Report;

/// Counts printed after the index has been read
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IndexSummary {
    pub parsed: usize,
    pub unassignable: usize,
}

impl fmt::Display for IndexSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "finished, parsed {} class(es), {} unassignable.",
            self.parsed, self.unassignable
        )
    }
}

pub fn run(config: &Config, reporter: &mut dyn Report) -> Result<IndexSummary> {
    let text = index::read(&config.index_path())?;
    let mut summary = IndexSummary::default();

    for event in index::events(&text) {
        match event {
            ParseEvent::Record(record) => {
                reporter.record(&record);
                summary.parsed += 1;
            }
            ParseEvent::Unassignable(class) => {
                reporter.unassignable(&class);
                summary.unassignable += 1;
            }
        }
    }

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BundlerError;
    use crate::ui::RecordingReporter;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_index_run_reports_records() {
        let tree = TempDir::new().unwrap();
        fs::write(
            tree.path().join("bundle-index.txt"),
            "\tA\n\t\t\tOrphan\n\t\tB\n\t\t\tC\n",
        )
        .unwrap();
        let config = Config::new(tree.path().to_path_buf(), tree.path(), ".god", true).unwrap();

        let mut reporter = RecordingReporter::default();
        let summary = run(&config, &mut reporter).unwrap();

        assert_eq!(
            summary,
            IndexSummary {
                parsed: 1,
                unassignable: 1
            }
        );
        assert_eq!(reporter.records[0].class_or_module, "C");
        assert_eq!(reporter.unassignable[0].class_or_module, "Orphan");
        assert_eq!(reporter.classes, ["Orphan", "C"]);
        assert_eq!(
            summary.to_string(),
            "finished, parsed 1 class(es), 1 unassignable."
        );
    }

    #[test]
    fn test_index_run_missing_file() {
        let tree = TempDir::new().unwrap();
        let config = Config::new(tree.path().to_path_buf(), tree.path(), ".god", true).unwrap();

        let mut reporter = RecordingReporter::default();
        let result = run(&config, &mut reporter);

        assert!(matches!(result, Err(BundlerError::IndexNotFound { .. })));
    }
}
