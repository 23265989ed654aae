use clap::error::ErrorKind;
use clap::Parser;
use regex::Regex;
use sbl_brgen::render::Format;
use sbl_brgen::{generate, GenOptions, Suite};

use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

/// Generate branching integration tests for SBL.
#[derive(Parser, Debug)]
#[command(name = "sbl-brgen")]
#[command(about = "Generate exhaustive br/elbr/el tests for SBL")]
struct Cli {
    /// Test suite to generate
    #[arg(value_enum, value_name = "SUITE")]
    suite: Suite,

    /// Assertion syntax of each emitted test
    #[arg(long, value_enum, default_value_t = Format::Test)]
    format: Format,

    /// Only emit tests whose SBL source matches this regex
    #[arg(long, value_name = "REGEX")]
    grep: Option<Regex>,
}

fn main() -> ExitCode {
    // Logs go to stderr so stdout stays valid test source.
    if let Ok(filter) = EnvFilter::try_from_env("BRGEN_LOG") {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .without_time()
            .with_writer(io::stderr)
            .init();
    }

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => {
            let _ = e.print();
            show_suites();
            return ExitCode::FAILURE;
        }
    };
    let options = GenOptions {
        format: cli.format,
        grep: cli.grep,
    };

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let result = generate(cli.suite, &options, &mut out).and_then(|outcome| {
        out.flush()?;
        Ok(outcome)
    });

    match result {
        Ok(outcome) => {
            tracing::debug!(?outcome, suite = cli.suite.name(), "done");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn show_suites() {
    eprintln!("where SUITE is one of the following:");
    for suite in Suite::ALL {
        eprintln!("    * {}", suite.name());
    }
}
