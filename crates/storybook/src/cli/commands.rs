//! CLI command definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Storybook - illustrated children's stories from a single prompt
#[derive(Parser, Debug)]
#[command(name = "storybook")]
#[command(about = "Generate illustrated children's storybooks from a prompt", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file layered over the defaults
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a storybook and write it as a PDF
    Generate {
        /// Story prompt
        prompt: String,

        /// Where to write the PDF
        #[arg(short, long, default_value = "storybook.pdf")]
        output: PathBuf,

        /// Print the base64 data URI instead of writing a file
        #[arg(long)]
        data_uri: bool,
    },

    /// Serve the web form
    Serve {
        /// Socket address (overrides [server] bind)
        #[arg(long)]
        bind: Option<String>,
    },
}
