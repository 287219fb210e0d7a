//! Log analyzers
//!
//! Each analyzer makes one linear pass over a log source and returns a
//! findings record. Failures are reported at the analyzer boundary and
//! turned into an absent result.

pub mod ssh;
pub mod web;

pub use ssh::SshAnalyzer;
pub use web::{SensitiveHit, WebAnalyzer};

use crate::error::AnalyzerError;
use crate::input;
use crate::models::LogLine;
use std::path::Path;

/// A single-pass analyzer over a line-oriented log
pub trait LogAnalyzer {
    type Findings;

    /// Short name used in log messages
    fn name(&self) -> &'static str;

    /// Scan already-loaded lines
    fn analyze_lines(&self, lines: &[LogLine]) -> Self::Findings;

    /// Scan in-memory text
    fn analyze_str(&self, text: &str) -> Self::Findings {
        self.analyze_lines(&input::lines_from_str(text))
    }

    /// Scan a file, propagating read failures
    fn try_analyze(&self, path: &Path) -> Result<Self::Findings, AnalyzerError> {
        log::info!("Analyzing {} log: {}", self.name(), path.display());
        let lines = input::read_lines(path)?;
        Ok(self.analyze_lines(&lines))
    }

    /// Scan a file; a read failure is logged and yields `None`
    fn analyze(&self, path: &Path) -> Option<Self::Findings> {
        match self.try_analyze(path) {
            Ok(findings) => Some(findings),
            Err(e) => {
                log::error!("{} analysis failed: {}", self.name(), e);
                None
            }
        }
    }
}
