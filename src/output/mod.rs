use crate::models::Report;
use crate::report;
use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::str::FromStr;

/// Output handler for analysis reports
pub struct OutputHandler {
    format: OutputFormat,
    writer: Option<Box<dyn Write + Send>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Jsonl,
    Console,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "jsonl" => Ok(OutputFormat::Jsonl),
            "console" | "text" => Ok(OutputFormat::Console),
            other => Err(format!("unknown output format: {}", other)),
        }
    }
}

impl OutputHandler {
    /// Create a new output handler; without a file path output goes to stdout
    pub fn new(
        format: OutputFormat,
        file_path: Option<PathBuf>,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let writer: Option<Box<dyn Write + Send>> = match file_path {
            Some(path) => {
                let file = OpenOptions::new().create(true).append(true).open(path)?;
                Some(Box::new(BufWriter::new(file)))
            }
            None => None,
        };

        Ok(OutputHandler { format, writer })
    }

    /// Create a handler writing to an arbitrary sink
    pub fn with_writer(format: OutputFormat, writer: Box<dyn Write + Send>) -> Self {
        OutputHandler {
            format,
            writer: Some(writer),
        }
    }

    /// Write a report in the configured format
    pub fn write_report(&mut self, report: &Report) -> Result<(), Box<dyn std::error::Error>> {
        let output = Self::format_report(self.format, report)?;
        self.write_output(&output)
    }

    /// Format a report without writing it
    pub fn format_report(
        format: OutputFormat,
        report: &Report,
    ) -> Result<String, Box<dyn std::error::Error>> {
        let output = match format {
            OutputFormat::Json => format!("{}\n", serde_json::to_string_pretty(report)?),
            OutputFormat::Jsonl => format!("{}\n", serde_json::to_string(report)?),
            OutputFormat::Console => report::render(report),
        };
        Ok(output)
    }

    fn write_output(&mut self, data: &str) -> Result<(), Box<dyn std::error::Error>> {
        match &mut self.writer {
            Some(writer) => {
                writer.write_all(data.as_bytes())?;
                writer.flush()?;
            }
            None => {
                print!("{}", data);
                std::io::stdout().flush()?;
            }
        }
        Ok(())
    }

    /// Flush any buffered output
    pub fn flush(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        if let Some(writer) = &mut self.writer {
            writer.flush()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{SshFindings, WebFindings};

    #[test]
    fn test_format_parsing() {
        assert_eq!("json".parse::<OutputFormat>(), Ok(OutputFormat::Json));
        assert_eq!("JSONL".parse::<OutputFormat>(), Ok(OutputFormat::Jsonl));
        assert_eq!("console".parse::<OutputFormat>(), Ok(OutputFormat::Console));
        assert!("xml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_jsonl_is_single_line() {
        let report = Report::new(Some(SshFindings::default()), Some(WebFindings::default()));
        let output = OutputHandler::format_report(OutputFormat::Jsonl, &report).unwrap();

        assert_eq!(output.lines().count(), 1);
        let value: serde_json::Value = serde_json::from_str(output.trim()).unwrap();
        assert_eq!(value["ssh"]["failed_logins"], 0);
        assert_eq!(value["web"]["total_requests"], 0);
    }

    #[test]
    fn test_file_output_appends() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("reports.jsonl");
        let report = Report::new(None, Some(WebFindings::default()));

        for _ in 0..2 {
            let mut handler = OutputHandler::new(OutputFormat::Jsonl, Some(path.clone())).unwrap();
            handler.write_report(&report).unwrap();
            handler.flush().unwrap();
        }

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents.lines().count(), 2);
    }

    #[test]
    fn test_custom_writer_receives_console_report() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let writer = file.reopen().unwrap();
        let report = Report::new(None, Some(WebFindings::default()));

        let mut handler = OutputHandler::with_writer(OutputFormat::Console, Box::new(writer));
        handler.write_report(&report).unwrap();
        handler.flush().unwrap();

        let written = std::fs::read_to_string(file.path()).unwrap();
        assert_eq!(written, report::render(&report));
        assert!(written.contains("   total_requests: 0\n"));
    }

    #[test]
    fn test_console_uses_text_report() {
        let report = Report::new(Some(SshFindings::default()), None);
        let output = OutputHandler::format_report(OutputFormat::Console, &report).unwrap();
        assert!(output.contains("SECURITY REPORT"));
        assert!(output.contains("SSH:"));
    }
}
