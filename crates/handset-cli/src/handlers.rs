//! Command handlers for CLI subcommands
//!
//! This module contains the implementation logic for each CLI subcommand.

mod build;
mod completions;

pub use build::{handle_custom, handle_menu, handle_preset};
pub use completions::handle_completions;
