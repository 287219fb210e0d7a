use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of anomalous SSH line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnomalyKind {
    InvalidUser,
    BreakInAttempt,
}

impl fmt::Display for AnomalyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnomalyKind::InvalidUser => write!(f, "Invalid user"),
            AnomalyKind::BreakInAttempt => write!(f, "Break-in attempt"),
        }
    }
}

/// A flagged SSH line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Anomaly {
    pub kind: AnomalyKind,
    pub line: usize,
}

impl fmt::Display for Anomaly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - Line {}", self.kind, self.line)
    }
}

/// An IP with more failed logins than the threshold allows
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuspiciousIp {
    pub ip: String,
    pub attempts: usize,
}

/// Result of scanning an SSH authentication log
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SshFindings {
    pub failed_logins: usize,
    pub successful_logins: usize,
    pub anomalies: Vec<Anomaly>,
    /// Ordered by first failed attempt
    pub suspicious_ips: Vec<SuspiciousIp>,
}

impl SshFindings {
    /// One-line summary logged after a scan
    pub fn summary(&self) -> String {
        format!(
            "SSH summary - failed logins: {}, successful logins: {}, anomalies: {}",
            self.failed_logins,
            self.successful_logins,
            self.anomalies.len()
        )
    }
}

/// A web request with an error status
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuspiciousRequest {
    pub ip: String,
    pub method: String,
    pub path: String,
    /// Status code as written in the log
    pub status: String,
}

impl fmt::Display for SuspiciousRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "IP {} - {} {} - Status {}",
            self.ip, self.method, self.path, self.status
        )
    }
}

/// Result of scanning a web access log
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebFindings {
    pub total_requests: usize,
    pub suspicious_requests: Vec<SuspiciousRequest>,
}

impl WebFindings {
    /// One-line summary logged after a scan
    pub fn summary(&self) -> String {
        format!(
            "Web summary - requests: {}, suspicious: {}",
            self.total_requests,
            self.suspicious_requests.len()
        )
    }
}

/// Consolidated output of one run; an analyzer that was not run or failed is `None`
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub generated_at: DateTime<Local>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ssh: Option<SshFindings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub web: Option<WebFindings>,
}

impl Report {
    pub fn new(ssh: Option<SshFindings>, web: Option<WebFindings>) -> Self {
        Report {
            generated_at: Local::now(),
            ssh,
            web,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.ssh.is_none() && self.web.is_none()
    }
}
