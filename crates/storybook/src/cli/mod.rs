//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the storybook binary.

mod commands;
mod generate;
mod serve;

pub use commands::{Cli, Commands};
pub use generate::run_generate;
pub use serve::run_serve;
