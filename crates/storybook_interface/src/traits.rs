//! Trait definitions for model capabilities.

use async_trait::async_trait;
use storybook_core::{GeneratedImage, Prompt, StoryParameters};
use storybook_error::StorybookResult;

/// Continues a prompt into a story.
///
/// Implementations may return several candidates; callers use the first.
#[async_trait]
pub trait StoryGenerator: Send + Sync {
    /// Generate one or more story candidates for `prompt`.
    async fn generate_story(
        &self,
        prompt: &Prompt,
        params: &StoryParameters,
    ) -> StorybookResult<Vec<String>>;

    /// Provider name (e.g., "huggingface").
    fn provider_name(&self) -> &'static str;

    /// Model identifier (e.g., "gpt2").
    fn model_name(&self) -> &str;
}

/// Renders a text description into a raster image.
#[async_trait]
pub trait ImageGenerator: Send + Sync {
    /// Render `text` into a single image.
    async fn generate_image(&self, text: &str) -> StorybookResult<GeneratedImage>;

    /// Provider name (e.g., "huggingface").
    fn provider_name(&self) -> &'static str;

    /// Model identifier (e.g., "runwayml/stable-diffusion-v1-5").
    fn model_name(&self) -> &str;
}
