//! Human-readable security report
//!
//! Sequence fields render as their length, scalar fields as their value.
//! Suspicious IPs additionally list each address with its attempt count.
//! Analyzers that did not produce findings contribute no section.

use crate::models::{Report, SshFindings, SuspiciousIp, WebFindings};
use std::fmt::Write;

const RULE: &str = "==================================================";
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Render the report as console text
pub fn render(report: &Report) -> String {
    let mut out = String::new();

    out.push('\n');
    out.push_str(RULE);
    out.push_str("\n           SECURITY REPORT\n");
    out.push_str(RULE);
    out.push('\n');
    let _ = writeln!(
        out,
        "Generated at: {}",
        report.generated_at.format(TIMESTAMP_FORMAT)
    );

    if let Some(ref ssh) = report.ssh {
        render_ssh(&mut out, ssh);
    }
    if let Some(ref web) = report.web {
        render_web(&mut out, web);
    }

    out
}

fn render_ssh(out: &mut String, findings: &SshFindings) {
    out.push_str("\nSSH:\n");
    scalar(out, "failed_logins", findings.failed_logins);
    scalar(out, "successful_logins", findings.successful_logins);
    scalar(out, "anomalies", findings.anomalies.len());
    suspicious_ips(out, &findings.suspicious_ips);
}

fn render_web(out: &mut String, findings: &WebFindings) {
    out.push_str("\nWEB:\n");
    scalar(out, "total_requests", findings.total_requests);
    scalar(out, "suspicious_requests", findings.suspicious_requests.len());
}

fn scalar(out: &mut String, key: &str, value: usize) {
    let _ = writeln!(out, "   {}: {}", key, value);
}

fn suspicious_ips(out: &mut String, ips: &[SuspiciousIp]) {
    if ips.is_empty() {
        scalar(out, "suspicious_ips", 0);
        return;
    }

    let _ = writeln!(out, "   Suspicious IPs: {} found", ips.len());
    for entry in ips {
        let _ = writeln!(out, "     • {} ({} attempts)", entry.ip, entry.attempts);
    }
}
