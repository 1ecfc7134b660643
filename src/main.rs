//! CLI entry point for advent.

mod cli;
mod cmd;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use std::process::ExitCode;

use advent::config::{Config, OutputFormat};
use advent::logging;

use cli::{Cli, Commands};
use cmd::ui::{Output, OutputMode};

fn main() -> ExitCode {
    // Spawn the real work on a thread with a larger stack size.
    // Windows defaults to a 1MB stack; some searches recurse deeply in debug builds.
    const STACK_SIZE: usize = 8 * 1024 * 1024; // 8 MB

    let thread = match std::thread::Builder::new()
        .stack_size(STACK_SIZE)
        .spawn(run)
    {
        Ok(thread) => thread,
        Err(e) => return report_error(&e.into()),
    };

    match thread.join() {
        Ok(Ok(true)) => ExitCode::SUCCESS,
        Ok(Ok(false)) => ExitCode::FAILURE,
        Ok(Err(e)) => report_error(&e),
        Err(payload) => std::panic::resume_unwind(payload),
    }
}

fn report_error(error: &anyhow::Error) -> ExitCode {
    eprintln!("{} {:#}", "error:".red().bold(), error);
    ExitCode::FAILURE
}

/// Returns `Ok(false)` when a puzzle part failed.
fn run() -> Result<bool> {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet);

    let setup = || -> Result<(Config, Output)> {
        let config = Config::load()?;
        let json = cli.json || config.defaults.format == OutputFormat::Json;
        let output = Output::new(OutputMode::select(json, cli.quiet));
        Ok((config, output))
    };

    match &cli.command {
        Commands::Run {
            puzzle,
            part,
            input,
        } => {
            let (config, output) = setup()?;
            let summary = cmd::run::cmd_run(&config, &output, puzzle, *part, input.as_deref())?;
            Ok(!summary.has_failures())
        }
        Commands::All { year } => {
            let (config, output) = setup()?;
            let summary = cmd::all::cmd_all(&config, &output, *year)?;
            Ok(!summary.has_failures())
        }
        Commands::List { year } => {
            let (config, output) = setup()?;
            cmd::list::cmd_list(&config, &output, *year)?;
            Ok(true)
        }
        Commands::Config => {
            let (config, output) = setup()?;
            cmd::config::cmd_config(&config, &output)?;
            Ok(true)
        }
        Commands::Completions { shell } => {
            cmd::completions::cmd_completions(*shell);
            Ok(true)
        }
    }
}
