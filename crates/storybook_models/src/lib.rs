//! Model hub integrations for the storybook generator.
//!
//! Both capabilities talk to the HuggingFace Inference API:
//!
//! - [`HuggingFaceStoryDriver`] runs the text-generation task
//! - [`HuggingFaceImageDriver`] runs the text-to-image task
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use storybook_interface::ModelRegistry;
//! use storybook_models::{HubClient, HuggingFaceImageDriver, HuggingFaceStoryDriver};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let hub = HubClient::from_env()?;
//! let story = HuggingFaceStoryDriver::new(hub.clone(), "gpt2");
//! let image = HuggingFaceImageDriver::new(hub, "runwayml/stable-diffusion-v1-5");
//! let registry = ModelRegistry::new(Arc::new(story), Arc::new(image));
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod huggingface;

pub use huggingface::{
    DEFAULT_BASE_URL, DEFAULT_MAX_INPUT_TOKENS, DEFAULT_TIMEOUT_SECS, HubClient, HubOptions,
    HuggingFaceImageDriver, HuggingFaceStoryDriver, TOKEN_ENV_VAR, TextGenerationParameters,
    TextGenerationRequest, TextToImageRequest,
};
