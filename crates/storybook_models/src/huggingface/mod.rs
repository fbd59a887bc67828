//! HuggingFace Inference API integration.

mod client;
mod dto;
mod image;
mod story;

pub use client::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS, HubClient, TOKEN_ENV_VAR};
pub use dto::{HubOptions, TextGenerationParameters, TextGenerationRequest, TextToImageRequest};
pub use image::HuggingFaceImageDriver;
pub use story::{DEFAULT_MAX_INPUT_TOKENS, HuggingFaceStoryDriver};
