use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use structopt::StructOpt;

use soc_analyzer::config::Config;
use soc_analyzer::demo;
use soc_analyzer::output::{OutputFormat, OutputHandler};

/// Security log analyzer for SOC teams
#[derive(StructOpt, Debug)]
#[structopt(name = "soc_analyzer", about = "Scan SSH and web logs for suspicious activity")]
struct Cli {
    /// Path to an SSH authentication log
    #[structopt(long, parse(from_os_str))]
    ssh: Option<PathBuf>,

    /// Path to a web access log (Apache/Nginx common log format)
    #[structopt(long, parse(from_os_str))]
    web: Option<PathBuf>,

    /// Path to configuration file (defaults to soc_analyzer.toml if present)
    #[structopt(short, long)]
    config: Option<PathBuf>,

    /// Output format: console, json or jsonl (overrides the config file)
    #[structopt(short, long)]
    format: Option<OutputFormat>,

    /// Write the report to this file instead of stdout
    #[structopt(short, long)]
    output: Option<PathBuf>,

    /// Write a default configuration file and exit
    #[structopt(long)]
    write_config: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let cli = Cli::from_args();

    if let Some(ref path) = cli.write_config {
        Config::default().to_file(path)?;
        println!("Default configuration written to: {:?}", path);
        return Ok(());
    }

    banner();

    let config = Config::load_or_default(cli.config.as_deref())?;

    let format = match cli.format {
        Some(format) => format,
        None => config.output.format.parse().unwrap_or_else(|e| {
            log::warn!("{}, falling back to console", e);
            OutputFormat::Console
        }),
    };
    let output_path = cli.output.clone().or_else(|| config.output.file_path.clone());
    let mut output = OutputHandler::new(format, output_path)?;

    if cli.ssh.is_none() && cli.web.is_none() {
        print_usage();
        if !confirm("Run the demo with sample logs? (y/n): ")? {
            output.write_report(&soc_analyzer::Report::new(None, None))?;
            return Ok(());
        }

        let (ssh_path, web_path) = demo::write_samples(Path::new(demo::DEFAULT_SAMPLE_DIR))?;
        let report = soc_analyzer::build_report(&config, Some(&ssh_path), Some(&web_path))?;
        output.write_report(&report)?;
        output.flush()?;
        println!("\nDemo finished. Run again with --ssh and/or --web to analyze your own logs.");
        return Ok(());
    }

    let report = soc_analyzer::build_report(&config, cli.ssh.as_deref(), cli.web.as_deref())?;
    output.write_report(&report)?;
    output.flush()?;

    Ok(())
}

fn banner() {
    println!(
        r"
    ╔══════════════════════════════════════════╗
    ║            SOC LOG ANALYZER              ║
    ║            Cybersecurity Tool            ║
    ╚══════════════════════════════════════════╝
"
    );
}

fn print_usage() {
    println!("Usage:");
    println!("   soc_analyzer --ssh /path/to/auth.log");
    println!("   soc_analyzer --web /path/to/access.log");
    println!("   soc_analyzer --ssh auth.log --web access.log");
}

/// Ask a yes/no question on stdin
fn confirm(prompt: &str) -> io::Result<bool> {
    print!("\n{}", prompt);
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}
