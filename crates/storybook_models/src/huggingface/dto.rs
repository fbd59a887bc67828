//! HuggingFace Inference API data transfer objects.

use derive_builder::Builder;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Request options understood by every hub task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Getters)]
pub struct HubOptions {
    /// Block until a cold model is loaded instead of failing with 503
    wait_for_model: bool,
    /// Allow the hub to answer from its cache
    use_cache: bool,
}

impl HubOptions {
    /// Options for a sampled request: wait for the model, skip the cache.
    pub fn fresh() -> Self {
        Self {
            wait_for_model: true,
            use_cache: false,
        }
    }
}

impl Default for HubOptions {
    fn default() -> Self {
        Self {
            wait_for_model: true,
            use_cache: true,
        }
    }
}

/// Parameters of the text-generation task.
#[derive(
    Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Builder, Getters,
)]
#[builder(setter(into, strip_option), default)]
pub struct TextGenerationParameters {
    /// Maximum tokens to generate
    #[serde(skip_serializing_if = "Option::is_none")]
    max_new_tokens: Option<u32>,
    /// Sample instead of greedy decoding
    #[serde(skip_serializing_if = "Option::is_none")]
    do_sample: Option<bool>,
    /// Truncate the input to this many tokens
    #[serde(skip_serializing_if = "Option::is_none")]
    truncate: Option<u32>,
    /// Prepend the prompt to the generated text
    #[serde(skip_serializing_if = "Option::is_none")]
    return_full_text: Option<bool>,
}

impl TextGenerationParameters {
    /// Creates a new builder for `TextGenerationParameters`.
    pub fn builder() -> TextGenerationParametersBuilder {
        TextGenerationParametersBuilder::default()
    }
}

/// Body of a text-generation request.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Builder, Getters)]
#[builder(setter(into))]
pub struct TextGenerationRequest {
    /// Prompt text
    inputs: String,
    /// Generation parameters
    #[builder(default)]
    parameters: TextGenerationParameters,
    /// Hub options
    #[builder(default)]
    options: HubOptions,
}

impl TextGenerationRequest {
    /// Creates a new builder for `TextGenerationRequest`.
    pub fn builder() -> TextGenerationRequestBuilder {
        TextGenerationRequestBuilder::default()
    }
}

/// One candidate in a text-generation response.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Getters)]
pub(crate) struct TextGenerationCandidate {
    /// Generated text
    generated_text: String,
}

/// The hub answers text generation with either a list or a single object.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub(crate) enum TextGenerationResponse {
    /// `[{"generated_text": ...}, ...]`
    Many(Vec<TextGenerationCandidate>),
    /// `{"generated_text": ...}`
    One(TextGenerationCandidate),
}

impl TextGenerationResponse {
    /// All candidate texts, in the order the hub returned them.
    pub(crate) fn into_texts(self) -> Vec<String> {
        match self {
            Self::Many(candidates) => candidates
                .into_iter()
                .map(|c| c.generated_text)
                .collect(),
            Self::One(candidate) => vec![candidate.generated_text],
        }
    }
}

/// Body of a text-to-image request.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Builder, Getters)]
#[builder(setter(into))]
pub struct TextToImageRequest {
    /// Description of the image
    inputs: String,
    /// Hub options
    #[builder(default)]
    options: HubOptions,
}

impl TextToImageRequest {
    /// Creates a new builder for `TextToImageRequest`.
    pub fn builder() -> TextToImageRequestBuilder {
        TextToImageRequestBuilder::default()
    }
}

/// Error body returned by the hub on failure.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub(crate) struct HubErrorBody {
    /// Human-readable error
    pub(crate) error: String,
}
