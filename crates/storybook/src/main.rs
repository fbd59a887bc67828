//! Storybook CLI binary.
//!
//! This binary provides command-line access to the storybook generator:
//! - Generate a storybook PDF from a prompt
//! - Serve the web form

use clap::Parser;
use storybook::StorybookConfig;
use tracing_subscriber::EnvFilter;

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{Cli, Commands, run_generate, run_serve};

    // Load .env before anything reads the environment
    dotenvy::dotenv().ok();

    // Parse command-line arguments
    let cli = Cli::parse();

    // Initialize tracing; RUST_LOG wins over --verbose
    let log_level = if cli.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let config = StorybookConfig::load_with(cli.config.as_deref())?;

    // Execute the requested command
    match cli.command {
        Commands::Generate {
            prompt,
            output,
            data_uri,
        } => {
            run_generate(&config, &prompt, &output, data_uri).await?;
        }

        Commands::Serve { bind } => {
            run_serve(&config, bind.as_deref()).await?;
        }
    }

    Ok(())
}
