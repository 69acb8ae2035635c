//! `mars2grib-check`: a small CLI harness that loads YAML test suites and
//! runs them against the `mars2grib` encoder, exiting non-zero if any case
//! fails.
//!
//! Grounded on the original `check-mars2conf` tool (`src/tools/
//! check-mars2conf.cc`): one positional argument per test file, a loaded
//! count printed up front, and a final "N failed out of M" summary. Built
//! with `clap`'s derive API (the teacher's exact choice in its own CLI
//! crate) rather than the original's `eckit::option::CmdArgs`.

mod runner;
mod schema;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use runner::SuiteReport;
use schema::TestSuite;

/// Run YAML-described MARS-to-GRIB test cases against the encoder.
#[derive(Parser, Debug)]
#[command(name = "mars2grib-check", version, about)]
struct Args {
    /// Path(s) to YAML test-suite files.
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Print tracing spans/events at debug level instead of info.
    #[arg(long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    let mut total = 0usize;
    let mut total_failed = 0usize;

    for path in &args.files {
        match load_suite(path) {
            Ok(suite) => {
                tracing::info!(file = %path.display(), cases = suite.cases.len(), "loaded test suite");
                let report = runner::run_suite(&suite);
                print_report(&path.display().to_string(), &report);
                total += report.outcomes.len();
                total_failed += report.failed_count();
            }
            Err(e) => {
                eprintln!("error: could not load {}: {e}", path.display());
                total_failed += 1;
            }
        }
    }

    eprintln!("\nFailed {total_failed} case(s) out of {total}");
    if total_failed == 0 { ExitCode::SUCCESS } else { ExitCode::FAILURE }
}

fn load_suite(path: &PathBuf) -> Result<TestSuite, Box<dyn std::error::Error>> {
    let text = std::fs::read_to_string(path)?;
    Ok(serde_yaml::from_str(&text)?)
}

fn print_report(source: &str, report: &SuiteReport) {
    for outcome in &report.outcomes {
        match &outcome.failure {
            None => println!("PASS  {source}: {}", outcome.name),
            Some(reason) => println!("FAIL  {source}: {} ({reason})", outcome.name),
        }
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).with_target(false).try_init();
}
