//! Web access log analysis (Apache/Nginx common log format)

use regex::Regex;

use super::LogAnalyzer;
use crate::config::AnalysisConfig;
use crate::models::{LogLine, SuspiciousRequest, WebFindings};

const ACCESS_LINE_PATTERN: &str =
    r#"(\d+\.\d+\.\d+\.\d+) - - \[.*\] "(\w+) (.*?) HTTP.*" (\d+)"#;

/// A request whose path contains a sensitive fragment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SensitiveHit {
    pub line: usize,
    pub ip: String,
    pub path: String,
}

/// Analyzer for common-log-format access logs
pub struct WebAnalyzer {
    line_pattern: Regex,
    suspicious_statuses: Vec<u16>,
    sensitive_paths: Vec<String>,
}

impl WebAnalyzer {
    /// Create an analyzer with the default status and path rules
    pub fn new() -> Result<Self, regex::Error> {
        Self::from_config(&AnalysisConfig::default())
    }

    /// Create an analyzer from the analysis configuration
    pub fn from_config(config: &AnalysisConfig) -> Result<Self, regex::Error> {
        Ok(WebAnalyzer {
            line_pattern: Regex::new(ACCESS_LINE_PATTERN)?,
            suspicious_statuses: config.suspicious_statuses.clone(),
            sensitive_paths: config.sensitive_paths.clone(),
        })
    }

    fn is_sensitive_path(&self, path: &str) -> bool {
        self.sensitive_paths
            .iter()
            .any(|fragment| path.contains(fragment.as_str()))
    }

    fn is_suspicious_status(&self, status: &str) -> bool {
        self.suspicious_statuses
            .iter()
            .any(|code| code.to_string() == status)
    }

    /// Scan lines, raising a notice for every sensitive path seen
    ///
    /// Sensitive hits are returned alongside the findings but are not part of them.
    pub fn scan(&self, lines: &[LogLine]) -> (WebFindings, Vec<SensitiveHit>) {
        let mut findings = WebFindings::default();
        let mut hits = Vec::new();

        for line in lines {
            let cap = match self.line_pattern.captures(&line.text) {
                Some(cap) => cap,
                None => continue,
            };

            let ip = &cap[1];
            let method = &cap[2];
            let path = &cap[3];
            let status = &cap[4];

            findings.total_requests += 1;

            if self.is_suspicious_status(status) {
                findings.suspicious_requests.push(SuspiciousRequest {
                    ip: ip.to_string(),
                    method: method.to_string(),
                    path: path.to_string(),
                    status: status.to_string(),
                });
            }

            if self.is_sensitive_path(path) {
                log::warn!("Suspicious request - IP: {}, URL: {}", ip, path);
                hits.push(SensitiveHit {
                    line: line.number,
                    ip: ip.to_string(),
                    path: path.to_string(),
                });
            }
        }

        log::info!("{}", findings.summary());

        (findings, hits)
    }
}

impl LogAnalyzer for WebAnalyzer {
    type Findings = WebFindings;

    fn name(&self) -> &'static str {
        "Web"
    }

    fn analyze_lines(&self, lines: &[LogLine]) -> WebFindings {
        self.scan(lines).0
    }
}
