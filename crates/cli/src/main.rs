//! # sheetcheck
//!
//! Prints a data quality report (null share, duplicates, column types) for a
//! spreadsheet file.

use anyhow::Result;
use clap::Parser;
use sheetcheck_quality::{QualityChecker, Report};
use sheetcheck_sheet::ReadOptions;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// sheetcheck - data quality report for spreadsheets
#[derive(Parser, Debug)]
#[command(name = "sheetcheck")]
#[command(author, version, about = "Null, duplicate and type checks for spreadsheets", long_about = None)]
struct Cli {
    /// Spreadsheet to check (xlsx, xlsm, xlsb, xls, ods, csv, tsv)
    #[arg(value_name = "FILE", default_value = "example.xlsx")]
    file: PathBuf,

    /// Worksheet to check (default: the first one)
    #[arg(short = 's', long = "sheet", value_name = "NAME")]
    sheet: Option<String>,

    /// Treat the first row as data instead of column names
    #[arg(long = "no-header")]
    no_header: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn read_options(&self) -> ReadOptions {
        let mut options = ReadOptions::default().with_headers(!self.no_header);
        if let Some(sheet) = &self.sheet {
            options = options.with_sheet(sheet.clone());
        }
        options
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Logs go to stderr so the report on stdout stays clean
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
            )
            .with_writer(std::io::stderr)
            .init();
    }

    match run(&cli) {
        Ok(report) => {
            print!("{report}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            println!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

/// Load the file and build its report.
fn run(cli: &Cli) -> Result<Report> {
    let checker = QualityChecker::from_path_with_options(&cli.file, &cli.read_options())?;

    tracing::info!(
        file = %cli.file.display(),
        sheet = checker.dataset().name(),
        rows = checker.dataset().row_count(),
        columns = checker.dataset().col_count(),
        "Loaded spreadsheet"
    );

    Ok(checker.generate_report())
}
