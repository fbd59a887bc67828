use async_trait::async_trait;
use std::sync::Arc;
use storybook_core::{GeneratedImage, Prompt, StoryParameters};
use storybook_error::StorybookResult;
use storybook_interface::{ImageGenerator, ModelRegistry, StoryGenerator};

struct EchoStory;

#[async_trait]
impl StoryGenerator for EchoStory {
    async fn generate_story(
        &self,
        prompt: &Prompt,
        _params: &StoryParameters,
    ) -> StorybookResult<Vec<String>> {
        Ok(vec![prompt.as_str().to_string()])
    }

    fn provider_name(&self) -> &'static str {
        "echo"
    }

    fn model_name(&self) -> &str {
        "echo-1"
    }
}

struct BlankImage;

#[async_trait]
impl ImageGenerator for BlankImage {
    async fn generate_image(&self, _text: &str) -> StorybookResult<GeneratedImage> {
        Ok(GeneratedImage::new(vec![0u8; 4], None))
    }

    fn provider_name(&self) -> &'static str {
        "blank"
    }

    fn model_name(&self) -> &str {
        "blank-1"
    }
}

#[tokio::test]
async fn registry_dispatches_to_capabilities() {
    let registry = ModelRegistry::new(Arc::new(EchoStory), Arc::new(BlankImage));
    let prompt = Prompt::parse("a panda who learns to fly").unwrap();

    let stories = registry
        .story()
        .generate_story(&prompt, &StoryParameters::default())
        .await
        .unwrap();
    assert_eq!(stories, vec!["a panda who learns to fly".to_string()]);

    let image = registry.image().generate_image("a panda").await.unwrap();
    assert_eq!(image.len(), 4);
}

#[test]
fn registry_debug_names_models() {
    let registry = ModelRegistry::new(Arc::new(EchoStory), Arc::new(BlankImage));
    let debug = format!("{:?}", registry);
    assert!(debug.contains("echo/echo-1"));
    assert!(debug.contains("blank/blank-1"));
}
