//! Sample logs for the interactive demonstration

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Directory the demo writes its sample logs to
pub const DEFAULT_SAMPLE_DIR: &str = "sample_logs";

pub const SSH_SAMPLE: &str = "\
Jan 1 10:00:00 server sshd[1234]: Failed password for root from 192.168.1.100 port 22 ssh2
Jan 1 10:00:01 server sshd[1235]: Failed password for root from 192.168.1.100 port 22 ssh2
Jan 1 10:00:02 server sshd[1236]: Failed password for admin from 192.168.1.100 port 22 ssh2
Jan 1 10:00:03 server sshd[1237]: Accepted password for user1 from 192.168.1.50 port 22 ssh2
Jan 1 10:00:04 server sshd[1238]: Failed password for root from 192.168.1.100 port 22 ssh2
Jan 1 10:00:05 server sshd[1239]: Invalid user hacker from 192.168.1.100
Jan 1 10:01:00 server sshd[1240]: Failed password for root from 192.168.1.100 port 22 ssh2
Jan 1 10:01:01 server sshd[1241]: Failed password for root from 192.168.1.100 port 22 ssh2
";

pub const WEB_SAMPLE: &str = "\
192.168.1.100 - - [01/Jan/2024:10:00:00 +0000] \"GET /admin HTTP/1.1\" 404 123
192.168.1.50 - - [01/Jan/2024:10:00:01 +0000] \"GET /index.html HTTP/1.1\" 200 4567
192.168.1.100 - - [01/Jan/2024:10:00:02 +0000] \"GET /etc/passwd HTTP/1.1\" 403 234
192.168.1.100 - - [01/Jan/2024:10:00:03 +0000] \"POST /wp-admin HTTP/1.1\" 500 345
192.168.1.200 - - [01/Jan/2024:10:00:04 +0000] \"GET /contact.html HTTP/1.1\" 200 1234
";

/// Write both sample logs under `dir`, returning the SSH and web log paths
pub fn write_samples(dir: &Path) -> io::Result<(PathBuf, PathBuf)> {
    fs::create_dir_all(dir)?;

    let ssh_path = dir.join("ssh_sample.log");
    let web_path = dir.join("web_sample.log");
    fs::write(&ssh_path, SSH_SAMPLE)?;
    fs::write(&web_path, WEB_SAMPLE)?;

    log::info!("Sample logs written to {}", dir.display());
    Ok((ssh_path, web_path))
}
