//! loxc - scan Lox source and print its tokens.

use std::io::{self, IsTerminal};
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing::debug;

use loxc_drv::{init_logging, Cli, Commands, Config, Session};

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(status) => ExitCode::from(status),
        Err(err) => {
            eprintln!("error: {:#}", err);
            ExitCode::FAILURE
        },
    }
}

/// Loads configuration, sets up logging and runs the selected command.
///
/// Returns the process exit status.
fn run(cli: Cli) -> anyhow::Result<u8> {
    let config = Config::load(cli.config.as_deref())
        .context("could not load configuration")?
        .with_overrides(cli.verbose, cli.no_color);

    init_logging(config.verbose, config.color.enabled(io::stderr().is_terminal()))?;
    debug!(?config, "configuration loaded");

    match cli.command {
        Commands::Tokenize(args) => {
            let session = Session::new(config);
            let status = session
                .tokenize(&args.file)
                .with_context(|| format!("could not tokenize {}", args.file.display()))?;
            Ok(status)
        },
    }
}
