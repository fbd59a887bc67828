//! Story capability backed by the text-generation task.

use crate::huggingface::dto::{
    HubOptions, TextGenerationParameters, TextGenerationRequest, TextGenerationResponse,
};
use crate::huggingface::HubClient;
use async_trait::async_trait;
use storybook_core::{Prompt, StoryParameters};
use storybook_error::{
    HuggingFaceErrorKind, ModelsError, ModelsErrorKind, ModelsResult, StorybookResult,
};
use storybook_interface::StoryGenerator;
use tracing::{debug, error, instrument};

/// Input budget sent as `truncate` when input truncation is on.
///
/// GPT-2 sees 1024 tokens; 200 of them are left for the continuation.
pub const DEFAULT_MAX_INPUT_TOKENS: u32 = 824;

/// HuggingFace text-generation driver.
#[derive(Debug, Clone)]
pub struct HuggingFaceStoryDriver {
    hub: HubClient,
    model: String,
    max_input_tokens: u32,
}

impl HuggingFaceStoryDriver {
    /// Creates a driver for `model` (e.g. `gpt2`).
    pub fn new(hub: HubClient, model: impl Into<String>) -> Self {
        Self {
            hub,
            model: model.into(),
            max_input_tokens: DEFAULT_MAX_INPUT_TOKENS,
        }
    }

    /// Override the input budget used when truncating prompts.
    pub fn with_max_input_tokens(mut self, max_input_tokens: u32) -> Self {
        self.max_input_tokens = max_input_tokens;
        self
    }

    /// Build the wire request for a prompt.
    ///
    /// The continuation is returned together with the prompt, so the story
    /// always opens with the user's own words.
    ///
    /// # Errors
    ///
    /// Returns error if the request cannot be built.
    pub fn build_request(
        &self,
        prompt: &Prompt,
        params: &StoryParameters,
    ) -> ModelsResult<TextGenerationRequest> {
        let mut parameters = TextGenerationParameters::builder();
        parameters
            .max_new_tokens(*params.max_output_length())
            .do_sample(*params.sampling())
            .return_full_text(true);
        if *params.truncate_input() {
            parameters.truncate(self.max_input_tokens);
        }
        let parameters = parameters
            .build()
            .map_err(|e| ModelsError::new(ModelsErrorKind::Builder(e.to_string())))?;

        let options = if *params.sampling() {
            HubOptions::fresh()
        } else {
            HubOptions::default()
        };

        TextGenerationRequest::builder()
            .inputs(prompt.as_str())
            .parameters(parameters)
            .options(options)
            .build()
            .map_err(|e| ModelsError::new(ModelsErrorKind::Builder(e.to_string())))
    }
}

#[async_trait]
impl StoryGenerator for HuggingFaceStoryDriver {
    #[instrument(skip(self, prompt, params), fields(model = %self.model))]
    async fn generate_story(
        &self,
        prompt: &Prompt,
        params: &StoryParameters,
    ) -> StorybookResult<Vec<String>> {
        let request = self.build_request(prompt, params)?;
        let response = self.hub.post_json(&self.model, &request).await?;

        let body = response.text().await.map_err(|e| {
            error!(error = ?e, "Failed to read response");
            ModelsError::from(HuggingFaceErrorKind::ResponseConversion(format!(
                "Failed to read response: {}",
                e
            )))
        })?;
        debug!(response_len = body.len(), "Received response");

        let parsed: TextGenerationResponse = serde_json::from_str(&body).map_err(|e| {
            error!(error = ?e, response = %body, "Failed to parse JSON");
            ModelsError::from(HuggingFaceErrorKind::ResponseConversion(format!(
                "Missing generated_text in response: {}",
                e
            )))
        })?;

        let texts = parsed.into_texts();
        if texts.is_empty() {
            return Err(ModelsError::new(ModelsErrorKind::EmptyStory).into());
        }
        Ok(texts)
    }

    fn provider_name(&self) -> &'static str {
        "huggingface"
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
