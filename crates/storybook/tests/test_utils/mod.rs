//! Test utilities for storybook tests.
//!
//! This module provides mock capabilities and fixture helpers.

pub mod mock_models;

#[allow(unused_imports)]
pub use mock_models::{MockImages, MockStory, StoryBehavior, pdf_captions, pdf_page_count, png_bytes};
