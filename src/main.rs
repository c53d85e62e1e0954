//! sumr - CLI entry point

mod commands;

use anyhow::Result;
use clap::Parser;
use std::io;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use sumr::cli::{Cli, Commands, ConfigCommands};
use sumr::SummarizeError;

/// Exit status when the run was cancelled by Ctrl+C.
const EXIT_INTERRUPTED: u8 = 130;

#[cfg(not(tarpaulin_include))]
fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Ctrl+C also reaches the summarize child; its exit 130 is reported by run().
    ctrlc::set_handler(|| tracing::debug!("interrupt received, waiting for summarize"))
        .ok();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(exit_code_for(&e))
        }
    }
}

#[cfg(not(tarpaulin_include))]
fn run(cli: Cli) -> Result<()> {
    let config_path = cli.config.as_deref();

    match cli.command {
        Commands::Summarize {
            input,
            options,
            stream,
            json,
        } => commands::summarize::handle(config_path, &input, &options.to_options(), stream, json),
        Commands::Extract {
            input,
            options,
            json,
        } => commands::extract::handle(config_path, &input, &options.to_options(), json),
        Commands::Text {
            file,
            options,
            stream,
            json,
        } => commands::text::handle(
            config_path,
            file.as_deref(),
            &options.to_options(),
            stream,
            json,
        ),
        Commands::Config(cmd) => match cmd {
            ConfigCommands::Show => commands::config::handle_show(config_path),
            ConfigCommands::Path => commands::config::handle_path(config_path),
            ConfigCommands::Init { force } => commands::config::handle_init(config_path, force),
        },
        Commands::Doctor => commands::doctor::handle(config_path),
        Commands::Completions { shell } => commands::completions::handle::<Cli>(shell),
    }
}

fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(io::stderr)
        .init();
}

/// Map a failure to the process exit status: 130 for cancellation, 1 otherwise.
fn exit_code_for(err: &anyhow::Error) -> u8 {
    match err.downcast_ref::<SummarizeError>() {
        Some(e) if e.is_cancellation() => EXIT_INTERRUPTED,
        _ => 1,
    }
}
