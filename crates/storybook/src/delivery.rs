//! Writing a finished storybook where the user asked for it.

use crate::{StorybookGenerator, StorybookOutcome};
use std::io::Write;
use std::path::PathBuf;
use storybook_error::{StorageError, StorageErrorKind, StorybookResult};
use tracing::instrument;

/// Where a generated storybook goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    /// Write the PDF to this path
    File(PathBuf),
    /// Print the `data:` URI
    DataUri,
}

/// Generate a storybook for `prompt` and deliver it.
///
/// Status lines (success message, data URI) go to `out`; per-page failures
/// are left to the caller via the returned outcome.
///
/// # Errors
///
/// Returns error if generation fails or the PDF or status lines cannot be
/// written.
#[instrument(skip(generator, prompt, out))]
pub async fn generate_to(
    generator: &StorybookGenerator,
    prompt: &str,
    destination: &Destination,
    out: &mut (impl Write + Send),
) -> StorybookResult<StorybookOutcome> {
    let outcome = generator.generate(prompt).await?;

    match destination {
        Destination::DataUri => {
            writeln!(out, "{}", outcome.storybook().data_uri()).map_err(stdout_error)?;
        }
        Destination::File(path) => {
            tokio::fs::write(path, outcome.storybook().bytes())
                .await
                .map_err(|e| {
                    StorageError::new(StorageErrorKind::FileWrite(format!(
                        "{}: {}",
                        path.display(),
                        e
                    )))
                })?;
            writeln!(out, "{}", outcome.success_message()).map_err(stdout_error)?;
            writeln!(
                out,
                "Wrote {} page(s) to {}",
                outcome.page_count(),
                path.display()
            )
            .map_err(stdout_error)?;
        }
    }

    Ok(outcome)
}

fn stdout_error(e: std::io::Error) -> StorageError {
    StorageError::new(StorageErrorKind::FileWrite(format!("output: {}", e)))
}
