pub mod event;
pub mod findings;

pub use event::LogLine;
pub use findings::{
    Anomaly, AnomalyKind, Report, SshFindings, SuspiciousIp, SuspiciousRequest, WebFindings,
};
