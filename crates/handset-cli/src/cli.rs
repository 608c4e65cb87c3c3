//! Command-line interface argument parsing and definitions
//!
//! This module defines the CLI structure using clap's derive API.
//! Running without a subcommand starts the interactive menu.

use clap::{Parser, Subcommand, ValueEnum};
use is_terminal::IsTerminal;
use std::path::PathBuf;

/// Handset - build a phone spec record, print it, clone it
#[derive(Parser, Debug)]
#[command(
    name = "handset",
    version,
    author,
    about,
    long_about = None,
    propagate_version = true
)]
pub struct Cli {
    /// Enable verbose logging (can be used multiple times for increased verbosity)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "HANDSET_CONFIG")]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Ask again after an invalid menu choice or capacity instead of exiting
    #[arg(long, global = true)]
    pub reprompt: bool,

    /// The subcommand to run (interactive menu if omitted)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Choose between the preset and a custom phone interactively
    Menu,

    /// Build the pre-configured phone under a model name
    Preset(PresetArgs),

    /// Build a custom phone from flags; omitted fields stay empty or zero
    Custom(CustomArgs),

    /// Generate shell completions for the specified shell
    Completions(CompletionsArgs),
}

/// Arguments for the preset command
#[derive(Parser, Debug)]
pub struct PresetArgs {
    /// Model name for the phone
    #[arg(value_name = "MODEL")]
    pub model: String,
}

/// Arguments for the custom command
#[derive(Parser, Debug, Default)]
pub struct CustomArgs {
    /// Device name
    #[arg(long)]
    pub model: Option<String>,

    /// Chip identifier
    #[arg(long)]
    pub processor: Option<String>,

    /// Memory in GB
    #[arg(long, allow_negative_numbers = true)]
    pub ram: Option<i32>,

    /// Storage in GB
    #[arg(long, allow_negative_numbers = true)]
    pub storage: Option<i32>,

    /// Camera description, e.g. "108 MP"
    #[arg(long)]
    pub camera: Option<String>,
}

/// Arguments for generating shell completions
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

/// Supported shells for completion generation
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    /// Bash shell
    Bash,
    /// Zsh shell
    Zsh,
    /// Fish shell
    Fish,
    /// PowerShell
    PowerShell,
    /// Elvish shell
    Elvish,
}

impl Cli {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the effective verbosity level (considering quiet flag)
    pub fn verbosity_level(&self) -> u8 {
        if self.quiet {
            0
        } else {
            self.verbose
        }
    }

    /// Check if colored output should be used
    pub fn use_color(&self) -> bool {
        !self.no_color && std::io::stdout().is_terminal()
    }

    /// Check if error messages on stderr should be colored
    pub fn use_stderr_color(&self) -> bool {
        !self.no_color && std::io::stderr().is_terminal()
    }
}

impl Shell {
    /// Convert to clap_complete shell type
    pub fn to_clap_shell(self) -> clap_complete::Shell {
        match self {
            Shell::Bash => clap_complete::Shell::Bash,
            Shell::Zsh => clap_complete::Shell::Zsh,
            Shell::Fish => clap_complete::Shell::Fish,
            Shell::PowerShell => clap_complete::Shell::PowerShell,
            Shell::Elvish => clap_complete::Shell::Elvish,
        }
    }
}
