//! Image capability backed by the text-to-image task.

use crate::huggingface::dto::{HubOptions, TextToImageRequest};
use crate::huggingface::HubClient;
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use storybook_core::GeneratedImage;
use storybook_error::{HuggingFaceErrorKind, ModelsError, ModelsErrorKind, StorybookResult};
use storybook_interface::ImageGenerator;
use tracing::{debug, error, instrument};

/// HuggingFace text-to-image driver.
#[derive(Debug, Clone)]
pub struct HuggingFaceImageDriver {
    hub: HubClient,
    model: String,
}

impl HuggingFaceImageDriver {
    /// Creates a driver for `model` (e.g. `runwayml/stable-diffusion-v1-5`).
    pub fn new(hub: HubClient, model: impl Into<String>) -> Self {
        Self {
            hub,
            model: model.into(),
        }
    }
}

#[async_trait]
impl ImageGenerator for HuggingFaceImageDriver {
    #[instrument(skip(self, text), fields(model = %self.model, words = text.split_whitespace().count()))]
    async fn generate_image(&self, text: &str) -> StorybookResult<GeneratedImage> {
        let request = TextToImageRequest::builder()
            .inputs(text)
            .options(HubOptions::fresh())
            .build()
            .map_err(|e| ModelsError::new(ModelsErrorKind::Builder(e.to_string())))?;

        let response = self.hub.post_json(&self.model, &request).await?;

        let mime = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|v| v.split(';').next().unwrap_or(v).trim().to_ascii_lowercase());

        if let Some(content_type) = mime.as_deref().filter(|m| !m.starts_with("image/")) {
            let content_type = content_type.to_string();
            let body = response.text().await.unwrap_or_default();
            error!(content_type = %content_type, body = %body, "Expected image response");
            return Err(ModelsError::from(HuggingFaceErrorKind::ResponseConversion(format!(
                "Expected image, got {}: {}",
                content_type, body
            )))
            .into());
        }

        let data = response.bytes().await.map_err(|e| {
            error!(error = ?e, "Failed to read image bytes");
            ModelsError::from(HuggingFaceErrorKind::ResponseConversion(format!(
                "Failed to read image: {}",
                e
            )))
        })?;

        if data.is_empty() {
            return Err(ModelsError::new(ModelsErrorKind::EmptyImage).into());
        }

        debug!(bytes = data.len(), mime = ?mime, "Received image");
        Ok(GeneratedImage::new(data.to_vec(), mime))
    }

    fn provider_name(&self) -> &'static str {
        "huggingface"
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
