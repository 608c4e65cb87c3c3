//! Handset CLI - builder and prototype demo over phone spec records
//!
//! This is the main entry point. It builds a phone either through the
//! preset director or field by field, prints it, clones it and prints the
//! clone.

mod cli;
mod config;
mod error;
mod handlers;
mod logging;
mod output;
mod shell;

use cli::{Cli, Commands};
use colored::control;
use config::Config;
use error::{Error, Result};
use logging::{timing::Timer, LoggingConfig};
use output::OutputWriter;
use std::process;
use tracing::instrument;

fn main() {
    // Parse command-line arguments
    let cli = Cli::parse_args();

    // Initialize logging
    if let Err(e) = init_logging(&cli) {
        eprintln!("Failed to initialize logging: {}", e);
    }

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => fail(&e, error_color(&cli, None)),
    };

    let use_color = error_color(&cli, Some(&config));
    match run(cli, config) {
        Ok(()) => process::exit(0),
        Err(e) => fail(&e, use_color),
    }
}

/// Report an error on stderr and exit with its code
fn fail(e: &Error, use_color: bool) -> ! {
    eprintln!("{}", error::format_error(e, use_color));
    process::exit(e.exit_code())
}

/// Whether errors on stderr are colored, honoring the config once it is loaded
fn error_color(cli: &Cli, config: Option<&Config>) -> bool {
    config.map_or(true, |c| c.output.color) && cli.use_stderr_color()
}

/// Load configuration and apply command-line overrides
fn load_config(cli: &Cli) -> Result<Config> {
    let _timer = Timer::new("config_loading");

    let mut config = Config::load_with_file(cli.config.as_deref())?;
    if cli.reprompt {
        config.shell.reprompt_on_invalid = true;
    }
    Ok(config)
}

/// Main application logic
#[instrument(skip_all, fields(command = ?cli.command))]
fn run(cli: Cli, config: Config) -> Result<()> {
    let _timer = Timer::new("cli_execution");

    let use_color = config.output.color && cli.use_color();
    control::set_override(use_color);
    let mut output = OutputWriter::new(use_color, config.output.separator.clone());

    tracing::info!(
        command = ?cli.command,
        verbosity = cli.verbosity_level(),
        reprompt = config.shell.reprompt_on_invalid,
        "Executing command"
    );

    match cli.command.unwrap_or(Commands::Menu) {
        Commands::Menu => {
            let stdin = std::io::stdin();
            handlers::handle_menu(stdin.lock(), &config.shell, &mut output)
        }
        Commands::Preset(args) => handlers::handle_preset(args, &mut output),
        Commands::Custom(args) => handlers::handle_custom(args, &mut output),
        Commands::Completions(args) => {
            handlers::handle_completions(args, &mut std::io::stdout())
        }
    }
}

/// Initialize the logging system
fn init_logging(cli: &Cli) -> Result<()> {
    let mut logging_config = LoggingConfig::from_verbosity(cli.verbosity_level());
    logging_config.merge_with_env();
    logging_config.ansi = !cli.no_color;

    if cli.quiet {
        logging_config.level = "error".to_string();
    }

    logging::init_logging(logging_config)
}
