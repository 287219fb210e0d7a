use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// IPs with strictly more failed attempts than this are flagged
pub const SUSPICIOUS_IP_THRESHOLD: usize = 3;

/// Config file looked up when none is given on the command line
pub const DEFAULT_CONFIG_PATH: &str = "soc_analyzer.toml";

/// Configuration for the analyzer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Detection rules configuration
    #[serde(default)]
    pub analysis: AnalysisConfig,
    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Detection rules configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Failed attempts an IP may have before it is flagged
    pub failed_attempt_threshold: usize,
    /// HTTP status codes that mark a request as suspicious
    pub suspicious_statuses: Vec<u16>,
    /// Path fragments that trigger a sensitive-path notice
    pub sensitive_paths: Vec<String>,
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Output format: "console", "json", or "jsonl"
    pub format: String,
    /// Output file path (stdout when absent)
    pub file_path: Option<PathBuf>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        AnalysisConfig {
            failed_attempt_threshold: SUSPICIOUS_IP_THRESHOLD,
            suspicious_statuses: vec![404, 403, 500],
            sensitive_paths: vec![
                "etc/passwd".to_string(),
                "admin".to_string(),
                "wp-admin".to_string(),
            ],
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            format: "console".to_string(),
            file_path: None,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            analysis: AnalysisConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load `path`, or the default config file when no path is given
    ///
    /// A missing file falls back to defaults. Only an explicitly requested
    /// file that is missing is reported as a warning.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        let (path, explicit) = match path {
            Some(path) => (path, true),
            None => (Path::new(DEFAULT_CONFIG_PATH), false),
        };

        if path.exists() {
            let config = Self::from_file(path)?;
            log::info!("Configuration loaded from {:?}", path);
            Ok(config)
        } else {
            if explicit {
                log::warn!("Config file {:?} not found, using defaults", path);
            } else {
                log::debug!("Config file {:?} not found, using defaults", path);
            }
            Ok(Config::default())
        }
    }

    /// Save configuration to a file
    pub fn to_file(&self, path: &Path) -> Result<(), ConfigError> {
        let contents = toml::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }
}
