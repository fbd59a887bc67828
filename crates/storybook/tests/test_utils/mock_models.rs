//! Mock story and image capabilities.

#![allow(dead_code)]

use async_trait::async_trait;
use image::{DynamicImage, ImageFormat, Rgb, RgbImage};
use lopdf::content::Content;
use lopdf::{Document, Object};
use std::collections::HashMap;
use std::io::Cursor;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use storybook::{GeneratedImage, ImageGenerator, Prompt, StoryGenerator, StoryParameters, StorybookResult};
use storybook_error::{ModelsError, ModelsErrorKind};

/// What the mock story capability returns.
#[derive(Debug, Clone)]
pub enum StoryBehavior {
    /// Return these candidates
    Candidates(Vec<String>),
    /// Fail with a backend error
    Error(String),
}

/// Mock story capability that records every prompt it sees.
pub struct MockStory {
    behavior: StoryBehavior,
    prompts: Arc<Mutex<Vec<String>>>,
}

impl MockStory {
    /// Always return `story`.
    pub fn new_success(story: impl Into<String>) -> Self {
        Self::new(StoryBehavior::Candidates(vec![story.into()]))
    }

    /// Always fail.
    pub fn new_error(message: impl Into<String>) -> Self {
        Self::new(StoryBehavior::Error(message.into()))
    }

    /// Mock with explicit behavior.
    pub fn new(behavior: StoryBehavior) -> Self {
        Self {
            behavior,
            prompts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Shared handle on the recorded prompts.
    pub fn prompts(&self) -> Arc<Mutex<Vec<String>>> {
        self.prompts.clone()
    }
}

#[async_trait]
impl StoryGenerator for MockStory {
    async fn generate_story(
        &self,
        prompt: &Prompt,
        _params: &StoryParameters,
    ) -> StorybookResult<Vec<String>> {
        self.prompts.lock().unwrap().push(prompt.as_str().to_string());
        match &self.behavior {
            StoryBehavior::Candidates(candidates) => Ok(candidates.clone()),
            StoryBehavior::Error(message) => {
                Err(ModelsError::new(ModelsErrorKind::Backend(message.clone())).into())
            }
        }
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }

    fn model_name(&self) -> &str {
        "mock-story"
    }
}

/// Mock image capability returning a small PNG for every prompt.
///
/// Prompts listed as failures get an error; prompts with a delay sleep
/// before answering.
pub struct MockImages {
    failures: Vec<String>,
    delays: HashMap<String, Duration>,
    prompts: Arc<Mutex<Vec<String>>>,
}

impl MockImages {
    /// Succeed for every prompt.
    pub fn new() -> Self {
        Self {
            failures: Vec::new(),
            delays: HashMap::new(),
            prompts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Fail for `prompt`.
    pub fn failing_on(mut self, prompt: impl Into<String>) -> Self {
        self.failures.push(prompt.into());
        self
    }

    /// Answer `prompt` after `delay`.
    pub fn delaying(mut self, prompt: impl Into<String>, delay: Duration) -> Self {
        self.delays.insert(prompt.into(), delay);
        self
    }

    /// Shared handle on the recorded prompts.
    pub fn prompts(&self) -> Arc<Mutex<Vec<String>>> {
        self.prompts.clone()
    }
}

#[async_trait]
impl ImageGenerator for MockImages {
    async fn generate_image(&self, text: &str) -> StorybookResult<GeneratedImage> {
        self.prompts.lock().unwrap().push(text.to_string());
        if let Some(delay) = self.delays.get(text) {
            tokio::time::sleep(*delay).await;
        }
        if self.failures.iter().any(|f| f == text) {
            return Err(ModelsError::new(ModelsErrorKind::Backend("API error 503".to_string())).into());
        }
        Ok(GeneratedImage::new(png_bytes(), Some("image/png".to_string())))
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }

    fn model_name(&self) -> &str {
        "mock-image"
    }
}

/// A tiny PNG.
pub fn png_bytes() -> Vec<u8> {
    let img = RgbImage::from_pixel(4, 4, Rgb([30, 160, 90]));
    let mut buffer = Vec::new();
    DynamicImage::ImageRgb8(img)
        .write_to(&mut Cursor::new(&mut buffer), ImageFormat::Png)
        .unwrap();
    buffer
}

/// Number of sheets in a serialized PDF.
pub fn pdf_page_count(bytes: &[u8]) -> usize {
    Document::load_mem(bytes).unwrap().get_pages().len()
}

/// Caption lines of every sheet, one string per sheet.
pub fn pdf_captions(bytes: &[u8]) -> Vec<String> {
    let doc = Document::load_mem(bytes).unwrap();
    doc.get_pages()
        .values()
        .map(|page_id| {
            let content = Content::decode(&doc.get_page_content(*page_id).unwrap()).unwrap();
            content
                .operations
                .iter()
                .filter(|op| op.operator == "Tj")
                .filter_map(|op| match op.operands.first() {
                    Some(Object::String(bytes, _)) => Some(String::from_utf8_lossy(bytes).into_owned()),
                    _ => None,
                })
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}
