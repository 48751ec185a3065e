// Analysis diagnostics
//
// Parsing never prints. Every skipped file and missing root ends up here
// and is returned alongside the analysis output, so callers decide what to
// surface. No diagnostic aborts a run.

use serde::Serialize;
use thiserror::Error;

/// A single recoverable problem encountered during a scan
#[derive(Debug, Clone, Serialize, Error, PartialEq)]
pub enum Diagnostic {
    /// The file could not be parsed as valid source/markup; it was skipped
    /// and scanning continued.
    #[error("failed to parse {path}: {reason}")]
    ParseFailure { path: String, reason: String },
    /// A configured root does not exist; its scan yielded zero results.
    #[error("directory does not exist: {path}")]
    MissingDirectory { path: String },
}

/// Aggregated outcome of one `analyze()` run
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct AnalysisReport {
    pub diagnostics: Vec<Diagnostic>,
    /// Files successfully parsed, per category
    pub mapping_files: usize,
    pub entity_files: usize,
    pub interface_files: usize,
}

impl AnalysisReport {
    pub(crate) fn record(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// True when every discovered file parsed and every root existed.
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn parse_failures(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d, Diagnostic::ParseFailure { .. }))
    }

    pub fn missing_directories(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d, Diagnostic::MissingDirectory { .. }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostics_display() {
        let failure = Diagnostic::ParseFailure {
            path: "a/UserMapper.xml".to_string(),
            reason: "mismatched tag".to_string(),
        };
        assert_eq!(
            failure.to_string(),
            "failed to parse a/UserMapper.xml: mismatched tag"
        );

        let missing = Diagnostic::MissingDirectory {
            path: "src/entity".to_string(),
        };
        assert_eq!(missing.to_string(), "directory does not exist: src/entity");
    }

    #[test]
    fn test_report_filters_by_kind() {
        let mut report = AnalysisReport::default();
        assert!(report.is_clean());

        report.record(Diagnostic::ParseFailure {
            path: "x.xml".to_string(),
            reason: "bad".to_string(),
        });
        report.record(Diagnostic::MissingDirectory {
            path: "missing".to_string(),
        });

        assert!(!report.is_clean());
        assert_eq!(report.parse_failures().count(), 1);
        assert_eq!(report.missing_directories().count(), 1);
    }
}
