//! Web form server command.

use storybook::{StorybookConfig, StorybookGenerator, StorybookResult, web};

/// Serve the web form on `bind`, or the configured address.
pub async fn run_serve(config: &StorybookConfig, bind: Option<&str>) -> StorybookResult<()> {
    let generator = StorybookGenerator::from_config(config)?;
    let bind = bind.unwrap_or(config.server.bind.as_str());
    web::serve(bind, generator).await
}
