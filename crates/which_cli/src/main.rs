use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::Context;
use clap::{ArgAction, Parser};
use which_core::{Finder, ResultSet};

/// Find the instances of an executable in the system path.
#[derive(Parser, Debug)]
#[command(name = "which", author, version, about, long_about = None)]
struct Cli {
    /// List all executable instances found (instead of just the first one).
    #[arg(short, long)]
    all: bool,

    /// Silence the output, just return the exit code (0 if any executable is found, otherwise 1).
    #[arg(short, long)]
    silent: bool,

    /// Increase diagnostic output on stderr (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// The name of the executable to find.
    command: String,
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    if !cli.silent {
        init_logging(cli.verbose)?;
    }

    let finder = Finder::new();
    let results = ResultSet::new(&cli.command, &finder);
    let executables = if cli.all {
        results.require_all()
    } else {
        results.require_first().map(|path| vec![path])
    };

    match executables {
        Ok(paths) => {
            if !cli.silent {
                let mut stdout = io::stdout().lock();
                for path in &paths {
                    writeln!(stdout, "{}", path.display()).context("Failed to write result")?;
                }
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            tracing::debug!(command = %cli.command, "no executable found");
            if !cli.silent {
                eprintln!("{err}");
            }
            Ok(ExitCode::FAILURE)
        }
    }
}

#[cfg(feature = "logging")]
fn init_logging(verbosity: u8) -> anyhow::Result<()> {
    use which_core::logging::{self, LoggingConfig};

    let mut config = LoggingConfig::default();
    if let Some(level) = LoggingConfig::level_for_verbosity(verbosity) {
        config = config.with_level(level);
    }
    logging::init(config).context("Failed to initialize logging")
}

#[cfg(not(feature = "logging"))]
fn init_logging(_verbosity: u8) -> anyhow::Result<()> {
    Ok(())
}
