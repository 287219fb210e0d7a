pub mod config;
pub mod demo;
pub mod detection;
pub mod error;
pub mod input;
pub mod models;
pub mod output;
pub mod report;

use std::path::Path;

// Re-export commonly used types
pub use config::Config;
pub use detection::{LogAnalyzer, SshAnalyzer, WebAnalyzer};
pub use error::{AnalyzerError, ConfigError};
pub use models::{Report, SshFindings, WebFindings};

/// Run the requested analyzers and collect their findings into a report
///
/// An analyzer whose log cannot be read contributes `None`.
pub fn build_report(
    config: &Config,
    ssh_log: Option<&Path>,
    web_log: Option<&Path>,
) -> Result<Report, regex::Error> {
    let ssh = match ssh_log {
        Some(path) => SshAnalyzer::from_config(&config.analysis)?.analyze(path),
        None => None,
    };
    let web = match web_log {
        Some(path) => WebAnalyzer::from_config(&config.analysis)?.analyze(path),
        None => None,
    };

    Ok(Report::new(ssh, web))
}
