//! SSH authentication log analysis
//!
//! Counts failed and accepted password logins, flags invalid-user and
//! break-in lines, and reports IPs with repeated failed attempts.

use regex::Regex;
use std::collections::HashMap;

use super::LogAnalyzer;
use crate::config::{AnalysisConfig, SUSPICIOUS_IP_THRESHOLD};
use crate::models::{Anomaly, AnomalyKind, LogLine, SshFindings, SuspiciousIp};

const FAILED_MARKER: &str = "Failed password";
const ACCEPTED_MARKER: &str = "Accepted password";

/// Analyzer for sshd authentication logs
pub struct SshAnalyzer {
    ip_pattern: Regex,
    user_pattern: Regex,
    invalid_user_pattern: Regex,
    break_in_pattern: Regex,
    /// IPs with more failed attempts than this are suspicious
    threshold: usize,
}

impl SshAnalyzer {
    /// Create an analyzer with the default threshold
    pub fn new() -> Result<Self, regex::Error> {
        Self::with_threshold(SUSPICIOUS_IP_THRESHOLD)
    }

    /// Create an analyzer from the analysis configuration
    pub fn from_config(config: &AnalysisConfig) -> Result<Self, regex::Error> {
        Self::with_threshold(config.failed_attempt_threshold)
    }

    /// Create with a custom failed-attempt threshold
    pub fn with_threshold(threshold: usize) -> Result<Self, regex::Error> {
        Ok(SshAnalyzer {
            ip_pattern: Regex::new(r"from (\d+\.\d+\.\d+\.\d+)")?,
            user_pattern: Regex::new(r"for (\w+) from")?,
            invalid_user_pattern: Regex::new(r"(?i)invalid user")?,
            break_in_pattern: Regex::new(r"(?i)break-in attempt")?,
            threshold,
        })
    }

    fn extract_ip<'a>(&self, line: &'a str) -> Option<&'a str> {
        self.ip_pattern
            .captures(line)
            .and_then(|cap| cap.get(1))
            .map(|m| m.as_str())
    }

    fn extract_user<'a>(&self, line: &'a str) -> Option<&'a str> {
        self.user_pattern
            .captures(line)
            .and_then(|cap| cap.get(1))
            .map(|m| m.as_str())
    }

    /// Group failed-attempt IPs, keeping those above the threshold in first-seen order
    fn flag_suspicious_ips(&self, failed_ips: &[String]) -> Vec<SuspiciousIp> {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        let mut order: Vec<&str> = Vec::new();

        for ip in failed_ips {
            let count = counts.entry(ip.as_str()).or_insert(0);
            if *count == 0 {
                order.push(ip.as_str());
            }
            *count += 1;
        }

        order
            .into_iter()
            .filter_map(|ip| {
                let attempts = counts.get(ip).copied().unwrap_or(0);
                (attempts > self.threshold).then(|| SuspiciousIp {
                    ip: ip.to_string(),
                    attempts,
                })
            })
            .collect()
    }
}

impl LogAnalyzer for SshAnalyzer {
    type Findings = SshFindings;

    fn name(&self) -> &'static str {
        "SSH"
    }

    fn analyze_lines(&self, lines: &[LogLine]) -> SshFindings {
        let mut failed_ips: Vec<String> = Vec::new();
        let mut successful_logins = 0;
        let mut anomalies = Vec::new();

        for line in lines {
            let text = line.text.trim();

            if text.contains(FAILED_MARKER) {
                if let Some(ip) = self.extract_ip(text) {
                    log::info!(
                        "Failed login - IP: {}, user: {}, line: {}",
                        ip,
                        self.extract_user(text).unwrap_or("unknown"),
                        line.number
                    );
                    failed_ips.push(ip.to_string());
                }
            }

            if text.contains(ACCEPTED_MARKER) {
                if let Some(ip) = self.extract_ip(text) {
                    log::info!("Accepted login - IP: {}, line: {}", ip, line.number);
                    successful_logins += 1;
                }
            }

            if self.invalid_user_pattern.is_match(text) {
                anomalies.push(Anomaly {
                    kind: AnomalyKind::InvalidUser,
                    line: line.number,
                });
            }

            if self.break_in_pattern.is_match(text) {
                anomalies.push(Anomaly {
                    kind: AnomalyKind::BreakInAttempt,
                    line: line.number,
                });
            }
        }

        let suspicious_ips = self.flag_suspicious_ips(&failed_ips);
        for suspicious in &suspicious_ips {
            log::warn!(
                "Multiple failed logins - IP: {} - {} attempts",
                suspicious.ip,
                suspicious.attempts
            );
        }

        let findings = SshFindings {
            failed_logins: failed_ips.len(),
            successful_logins,
            anomalies,
            suspicious_ips,
        };
        log::info!("{}", findings.summary());
        findings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demo::SSH_SAMPLE;
    use std::io::Write;

    fn failed_line(ip: &str) -> String {
        format!(
            "Jan 1 10:00:00 server sshd[1234]: Failed password for root from {} port 22 ssh2\n",
            ip
        )
    }

    #[test]
    fn test_sample_log() {
        let analyzer = SshAnalyzer::new().unwrap();
        let findings = analyzer.analyze_str(SSH_SAMPLE);

        assert_eq!(findings.failed_logins, 6);
        assert_eq!(findings.successful_logins, 1);
        assert_eq!(
            findings.anomalies,
            vec![Anomaly {
                kind: AnomalyKind::InvalidUser,
                line: 6
            }]
        );
        assert_eq!(
            findings.suspicious_ips,
            vec![SuspiciousIp {
                ip: "192.168.1.100".to_string(),
                attempts: 6
            }]
        );
    }

    #[test]
    fn test_threshold_is_strict() {
        let mut log = String::new();
        for _ in 0..5 {
            log.push_str(&failed_line("192.168.1.100"));
        }
        log.push_str(&failed_line("192.168.1.50"));
        for _ in 0..3 {
            log.push_str(&failed_line("10.0.0.3"));
        }

        let findings = SshAnalyzer::new().unwrap().analyze_str(&log);

        assert_eq!(findings.failed_logins, 9);
        assert_eq!(
            findings.suspicious_ips,
            vec![SuspiciousIp {
                ip: "192.168.1.100".to_string(),
                attempts: 5
            }]
        );
    }

    #[test]
    fn test_suspicious_ips_keep_first_seen_order() {
        let mut log = String::new();
        log.push_str(&failed_line("10.0.0.2"));
        for _ in 0..4 {
            log.push_str(&failed_line("10.0.0.1"));
            log.push_str(&failed_line("10.0.0.2"));
        }

        let findings = SshAnalyzer::new().unwrap().analyze_str(&log);
        let ips: Vec<&str> = findings.suspicious_ips.iter().map(|s| s.ip.as_str()).collect();

        assert_eq!(ips, vec!["10.0.0.2", "10.0.0.1"]);
        assert_eq!(findings.suspicious_ips[0].attempts, 5);
        assert_eq!(findings.suspicious_ips[1].attempts, 4);
    }

    #[test]
    fn test_custom_threshold() {
        let log = failed_line("10.0.0.1").repeat(2);
        let findings = SshAnalyzer::with_threshold(1).unwrap().analyze_str(&log);
        assert_eq!(findings.suspicious_ips.len(), 1);
    }

    #[test]
    fn test_non_ipv4_source_is_skipped() {
        let log = "sshd[1]: Failed password for root from host.example.com port 22\n\
                   sshd[2]: Accepted password for bob from 2001:db8::1 port 22\n";
        let findings = SshAnalyzer::new().unwrap().analyze_str(log);

        assert_eq!(findings.failed_logins, 0);
        assert_eq!(findings.successful_logins, 0);
    }

    #[test]
    fn test_anomalies_are_case_insensitive_and_independent() {
        let log = "sshd[1]: INVALID USER guest from 10.0.0.9\n\
                   sshd[2]: POSSIBLE BREAK-IN ATTEMPT!\n\
                   sshd[3]: Failed password for invalid user test from 10.0.0.9 port 22 ssh2\n";
        let findings = SshAnalyzer::new().unwrap().analyze_str(log);

        assert_eq!(findings.failed_logins, 1);
        assert_eq!(
            findings.anomalies,
            vec![
                Anomaly { kind: AnomalyKind::InvalidUser, line: 1 },
                Anomaly { kind: AnomalyKind::BreakInAttempt, line: 2 },
                Anomaly { kind: AnomalyKind::InvalidUser, line: 3 },
            ]
        );
    }

    #[test]
    fn test_carriage_return_separated_lines() {
        let log = failed_line("10.0.0.1").trim_end().to_string()
            + "\r"
            + failed_line("10.0.0.1").trim_end();
        let findings = SshAnalyzer::new().unwrap().analyze_str(&log);
        assert_eq!(findings.failed_logins, 2);
    }

    #[test]
    fn test_empty_input() {
        let findings = SshAnalyzer::new().unwrap().analyze_str("");
        assert_eq!(findings, SshFindings::default());
    }

    #[test]
    fn test_file_analysis_is_repeatable() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SSH_SAMPLE.as_bytes()).unwrap();

        let analyzer = SshAnalyzer::new().unwrap();
        let first = analyzer.analyze(file.path());
        let second = analyzer.analyze(file.path());

        assert!(first.is_some());
        assert_eq!(first, second);
    }

    #[test]
    fn test_missing_file_is_absent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.log");
        let analyzer = SshAnalyzer::new().unwrap();

        assert!(analyzer.try_analyze(&path).unwrap_err().is_not_found());
        assert!(analyzer.analyze(&path).is_none());
    }
}
