//! DriftAssist report CLI.
//!
//! Reads a drift-analysis result (JSON) and writes the PDF report. All
//! logging goes to stderr; stdout is never used for payloads.

use clap::Parser;
use da_model::AnalysisResult;
use da_report::ReportGenerator;
use std::io::{IsTerminal, Read};
use std::path::PathBuf;
use std::process::ExitCode;
use std::{fs, io};
use thiserror::Error;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Generate a PDF report from a drift-analysis result
#[derive(Parser)]
#[command(name = "driftreport")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Analysis result JSON file, or `-` for stdin
    input: PathBuf,

    /// Resource type label embedded in the report
    #[arg(long, short = 'r', env = "DA_RESOURCE_TYPE", default_value = "terraform")]
    resource_type: String,

    /// Source file label; defaults to the input file name
    #[arg(long)]
    source_file: Option<String>,

    /// Output PDF path
    #[arg(long, short = 'o', default_value = "drift-report.pdf")]
    out: PathBuf,

    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Errors only
    #[arg(short, long)]
    quiet: bool,
}

#[derive(Error, Debug)]
enum CliError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        source: io::Error,
    },

    #[error("invalid analysis result JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to write {path}: {source}")]
    Write {
        path: String,
        source: io::Error,
    },
}

fn init_logging(verbose: u8, quiet: bool) {
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("driftreport={level},da_report={level}")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .with_ansi(io::stderr().is_terminal())
        .init();
}

fn read_input(input: &PathBuf) -> Result<String, CliError> {
    if input.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .map_err(|source| CliError::Read {
                path: "<stdin>".to_string(),
                source,
            })?;
        Ok(buf)
    } else {
        fs::read_to_string(input).map_err(|source| CliError::Read {
            path: input.display().to_string(),
            source,
        })
    }
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let json = read_input(&cli.input)?;
    let result: AnalysisResult = serde_json::from_str(&json)?;
    debug!(drifts = result.drifts.len(), "analysis result loaded");

    let source_file = cli.source_file.clone().unwrap_or_else(|| {
        cli.input
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "analysis.json".to_string())
    });

    let generator = ReportGenerator::default_config();
    let pdf = generator.generate(&result, &cli.resource_type, &source_file);

    fs::write(&cli.out, &pdf).map_err(|source| CliError::Write {
        path: cli.out.display().to_string(),
        source,
    })?;
    info!(bytes = pdf.len(), path = %cli.out.display(), "report written");
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
