//! Process-wide holder for the two model capabilities.

use crate::{ImageGenerator, StoryGenerator};
use std::fmt;
use std::sync::Arc;

/// The story and image capabilities, loaded once and shared by every request.
///
/// Cloning is cheap: both capabilities sit behind `Arc`.
#[derive(Clone)]
pub struct ModelRegistry {
    story: Arc<dyn StoryGenerator>,
    image: Arc<dyn ImageGenerator>,
}

impl ModelRegistry {
    /// Build a registry from the two capabilities.
    pub fn new(story: Arc<dyn StoryGenerator>, image: Arc<dyn ImageGenerator>) -> Self {
        Self { story, image }
    }

    /// The story capability.
    pub fn story(&self) -> &dyn StoryGenerator {
        self.story.as_ref()
    }

    /// The image capability.
    pub fn image(&self) -> &dyn ImageGenerator {
        self.image.as_ref()
    }
}

impl fmt::Debug for ModelRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModelRegistry")
            .field(
                "story",
                &format_args!("{}/{}", self.story.provider_name(), self.story.model_name()),
            )
            .field(
                "image",
                &format_args!("{}/{}", self.image.provider_name(), self.image.model_name()),
            )
            .finish()
    }
}
