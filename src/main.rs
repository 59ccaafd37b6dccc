//! Command-line entry point for the payroll report generator.

use clap::Parser;
use std::path::PathBuf;
use std::process;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use payrep::error::{ReportError, ReportResult};
use payrep::input::read_employee_records;
use payrep::models::{EmployeeRecord, ReportKind};
use payrep::output::write_report;
use payrep::report::generate;

/// Generate payroll reports from employee timesheet CSV exports
#[derive(Parser)]
#[command(name = "payrep")]
#[command(about = "Generate payroll reports from employee CSV files", long_about = None)]
struct Cli {
    /// CSV files with employee work records
    #[arg(required(true), value_name = "FILE")]
    files: Vec<PathBuf>,

    /// Report to generate
    #[arg(long, value_enum)]
    report: ReportKind,

    /// Output path; the extension selects the format (.json or .csv).
    /// Without this the report is printed to stdout as JSON.
    #[arg(long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Enable verbose logging (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    // Logs go to stderr so stdout stays clean for the rendered report.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(&cli) {
        error!("fatal: {}", e);
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> ReportResult<()> {
    info!(
        files = cli.files.len(),
        report = ?cli.report,
        "starting report generation"
    );

    let records = collect_records(&cli.files)?;
    let report = generate(cli.report, &records);
    write_report(&report, cli.output.as_deref())
}

/// Reads every input file, tolerating unreadable ones.
///
/// Files that cannot be opened or lack a required column are logged and
/// skipped; records from the remaining files are concatenated in argument
/// order. Only when no file at all could be read does this fail.
fn collect_records(files: &[PathBuf]) -> ReportResult<Vec<EmployeeRecord>> {
    let mut records = Vec::new();
    let mut readable = 0;

    for path in files {
        match read_employee_records(path) {
            Ok(scan) => {
                readable += 1;
                records.extend(scan.records);
            }
            Err(e) => {
                warn!(path = %path.display(), "skipping input file: {}", e);
            }
        }
    }

    if readable == 0 {
        return Err(ReportError::NoReadableInput {
            attempted: files.len(),
        });
    }

    Ok(records)
}
