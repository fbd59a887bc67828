//! One-shot generation from the command line.

use std::path::Path;
use storybook::{Destination, StorybookConfig, StorybookGenerator, StorybookResult, generate_to};

/// Generate a storybook for `prompt` and write or print it.
pub async fn run_generate(
    config: &StorybookConfig,
    prompt: &str,
    output: &Path,
    data_uri: bool,
) -> StorybookResult<()> {
    let generator = StorybookGenerator::from_config(config)?;
    let destination = if data_uri {
        Destination::DataUri
    } else {
        Destination::File(output.to_path_buf())
    };

    let outcome = generate_to(&generator, prompt, &destination, &mut std::io::stdout()).await?;

    for failure in outcome.failures() {
        eprintln!("{}", failure);
    }
    Ok(())
}
