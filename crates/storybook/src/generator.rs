//! Request handling: prompt in, encoded storybook out.

use crate::StorybookConfig;
use derive_getters::Getters;
use futures_util::stream::{self, StreamExt};
use std::sync::Arc;
use std::time::Duration;
use storybook_core::{
    DEFAULT_MAX_WORDS, GeneratedImage, Page, PageFailure, Paragraph, Prompt, StoryParameters,
    split_paragraphs, truncate_words,
};
use storybook_error::{ModelsError, ModelsErrorKind, StorybookResult};
use storybook_interface::ModelRegistry;
use storybook_models::{HubClient, HuggingFaceImageDriver, HuggingFaceStoryDriver, TOKEN_ENV_VAR};
use storybook_pdf::{DownloadEncoder, EncodedStorybook, ImageStaging, PageLayout, StorybookAssembler};
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

/// Result of one generation request.
#[derive(Debug, Clone, Getters)]
pub struct StorybookOutcome {
    /// Identifier for log correlation and scratch naming
    request_id: Uuid,
    /// The validated prompt
    prompt: Prompt,
    /// Full story text returned by the model
    story: String,
    /// Paragraphs the story was split into
    paragraphs: Vec<Paragraph>,
    /// Paragraphs left out because their image failed
    failures: Vec<PageFailure>,
    /// The encoded document
    storybook: EncodedStorybook,
}

impl StorybookOutcome {
    /// Illustrated pages in the document.
    pub fn page_count(&self) -> usize {
        *self.storybook.page_count()
    }

    /// Whether every image failed.
    pub fn is_empty(&self) -> bool {
        self.page_count() == 0
    }

    /// Message shown once the download is ready.
    pub fn success_message(&self) -> &'static str {
        "Storybook generated successfully!"
    }
}

/// Runs the full pipeline for each prompt against shared capabilities.
///
/// # Example
///
/// ```no_run
/// use storybook::{StorybookConfig, StorybookGenerator};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = StorybookConfig::load()?;
/// let generator = StorybookGenerator::from_config(&config)?;
///
/// let outcome = generator.generate("a panda who learns to fly").await?;
/// std::fs::write("storybook.pdf", outcome.storybook().bytes())?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct StorybookGenerator {
    registry: ModelRegistry,
    assembler: StorybookAssembler,
    parameters: StoryParameters,
    max_words: usize,
    concurrency: usize,
}

impl StorybookGenerator {
    /// Generator over the given capabilities with default settings.
    pub fn new(registry: ModelRegistry, assembler: StorybookAssembler) -> Self {
        Self {
            registry,
            assembler,
            parameters: StoryParameters::default(),
            max_words: DEFAULT_MAX_WORDS,
            concurrency: 1,
        }
    }

    /// Build the HuggingFace-backed generator a configuration describes.
    ///
    /// The hub token is read from `HUGGINGFACE_TOKEN`.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client or scratch directory cannot be set up.
    #[instrument(skip(config), fields(story_model = %config.story.model, image_model = %config.image.model))]
    pub fn from_config(config: &StorybookConfig) -> StorybookResult<Self> {
        let hub = HubClient::new(
            &config.hub.base_url,
            std::env::var(TOKEN_ENV_VAR).ok(),
            Duration::from_secs(config.hub.timeout_secs),
        )?;

        let story = HuggingFaceStoryDriver::new(hub.clone(), config.story.model.clone())
            .with_max_input_tokens(config.story.max_input_tokens);
        let image = HuggingFaceImageDriver::new(hub, config.image.model.clone());
        let registry = ModelRegistry::new(Arc::new(story), Arc::new(image));

        let staging =
            ImageStaging::from_mode(config.layout.staging, config.layout.scratch_dir.as_deref())?;
        let assembler = StorybookAssembler::new(PageLayout::default(), staging);

        debug!(?registry, "Loaded model registry");
        Ok(Self::new(registry, assembler)
            .with_parameters(config.story.parameters())
            .with_max_words(config.image.max_prompt_words)
            .with_concurrency(config.image.concurrency))
    }

    /// Set story generation parameters.
    pub fn with_parameters(mut self, parameters: StoryParameters) -> Self {
        self.parameters = parameters;
        self
    }

    /// Set the word budget for image prompts.
    pub fn with_max_words(mut self, max_words: usize) -> Self {
        self.max_words = max_words;
        self
    }

    /// Set how many image requests may be in flight. Zero means one.
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    /// Turn a prompt into an encoded storybook.
    ///
    /// A blank prompt is rejected before any model is called. A failed
    /// image drops its paragraph and is reported in
    /// [`StorybookOutcome::failures`]; every other failure aborts the
    /// request. If every image fails the outcome holds an empty but valid
    /// document.
    ///
    /// # Errors
    ///
    /// Returns error if the prompt is blank, the story model fails, or the
    /// document cannot be assembled or encoded.
    #[instrument(skip(self, prompt), fields(request_id))]
    pub async fn generate(&self, prompt: &str) -> StorybookResult<StorybookOutcome> {
        let prompt = Prompt::parse(prompt)?;
        let request_id = Uuid::new_v4();
        tracing::Span::current().record("request_id", tracing::field::display(request_id));

        let story = self
            .registry
            .story()
            .generate_story(&prompt, &self.parameters)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| ModelsError::new(ModelsErrorKind::EmptyStory))?;
        debug!(story_len = story.len(), "Generated story");

        let paragraphs = split_paragraphs(&story);
        info!(paragraphs = paragraphs.len(), "Split story");

        let (pages, failures) = self.illustrate(&paragraphs).await;

        let storybook = self.assembler.assemble(request_id, &pages).await?;
        let encoded = DownloadEncoder::encode(&storybook)?;

        info!(
            pages = pages.len(),
            failures = failures.len(),
            bytes = encoded.bytes().len(),
            "Storybook ready"
        );

        Ok(StorybookOutcome {
            request_id,
            prompt,
            story,
            paragraphs,
            failures,
            storybook: encoded,
        })
    }

    /// Generate one image per paragraph, keeping story order.
    async fn illustrate(&self, paragraphs: &[Paragraph]) -> (Vec<Page>, Vec<PageFailure>) {
        let image = self.registry.image();
        let max_words = self.max_words;

        let results: Vec<(Paragraph, StorybookResult<GeneratedImage>)> =
            stream::iter(paragraphs.iter().cloned())
                .map(|paragraph| async move {
                    let text = truncate_words(paragraph.text(), max_words);
                    let result = image.generate_image(&text).await;
                    (paragraph, result)
                })
                .buffered(self.concurrency)
                .collect()
                .await;

        let mut pages = Vec::with_capacity(results.len());
        let mut failures = Vec::new();
        for (paragraph, result) in results {
            match result {
                Ok(generated) => pages.push(Page::new(paragraph, generated)),
                Err(e) => {
                    warn!(index = paragraph.index(), error = %e, "Image generation failed, skipping paragraph");
                    failures.push(PageFailure::new(
                        *paragraph.index(),
                        paragraph.text().clone(),
                        e.user_message(),
                    ));
                }
            }
        }
        (pages, failures)
    }
}
