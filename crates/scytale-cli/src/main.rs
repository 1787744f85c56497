//! Scytale CLI - textbook Caesar, Columnar Transposition and Vigenère ciphers
//!
//! This is the command-line interface for Scytale. It wraps the cipher
//! registry from `scytale-core` with argument parsing, config and output.

mod app;
mod cli;
mod commands;
mod config;
mod constants;
mod errors;
mod helpers;
mod logging;
mod output;
mod ui;

use clap::Parser;
use scytale_core::{Direction, ScytaleError};

use crate::app::AppContext;
use crate::cli::{Cli, Commands, ConfigCommands};
use crate::errors::CliError;
use crate::ui::UiContext;

fn main() {
    let cli = Cli::parse();
    let ui = UiContext::from_env(cli.json, cli.no_color);
    if let Err(e) = logging::init_tracing(cli.verbose, ui.color) {
        eprintln!("Warning: {}", e);
    }

    let json_errors = ui.mode.is_json() || matches!(cli.command, Commands::Request(_));
    let ctx = AppContext::new(&cli, ui);

    if let Err(e) = run(&ctx, &cli) {
        report(&e, json_errors);
    }
}

/// Print `e` as text on stderr, or as a JSON error object on stdout, then exit.
fn report(e: &anyhow::Error, json_errors: bool) -> ! {
    if let Some(err) = e.downcast_ref::<ScytaleError>() {
        let cli_err = CliError::from(err);
        if json_errors {
            println!("{}", output::error_json(err));
            std::process::exit(cli_err.exit_code());
        }
        cli_err.exit();
    }

    if let Some(cli_err) = e.downcast_ref::<CliError>() {
        if json_errors {
            println!("{}", output::error_object(cli_err.code(), &cli_err.to_string()));
            std::process::exit(cli_err.exit_code());
        }
        cli_err.exit();
    }

    let message = format!("{:#}", e);
    if json_errors {
        println!("{}", output::error_object("error", &message));
    } else {
        eprintln!("Error: {}", message);
    }
    std::process::exit(1)
}

fn run(ctx: &AppContext, cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        Commands::Encrypt(args) => {
            commands::handle_transform(ctx, args, Direction::Encrypt)?;
        }
        Commands::Decrypt(args) => {
            commands::handle_transform(ctx, args, Direction::Decrypt)?;
        }
        Commands::Request(args) => {
            commands::handle_request(ctx, args)?;
        }
        Commands::Methods => {
            commands::handle_methods(ctx)?;
        }
        Commands::Key(args) => {
            commands::handle_key(ctx, args)?;
        }
        Commands::Square => {
            commands::handle_square(ctx)?;
        }
        Commands::Config(ConfigCommands::Show) => {
            commands::handle_config_show(ctx)?;
        }
        Commands::Config(ConfigCommands::Init { force }) => {
            commands::handle_config_init(ctx, *force)?;
        }
        Commands::Completions { shell } => {
            commands::handle_completions(*shell)?;
        }
    }
    Ok(())
}
