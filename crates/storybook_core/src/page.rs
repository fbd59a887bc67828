//! Paragraphs, pages, and per-page failures.

use crate::GeneratedImage;
use serde::{Deserialize, Serialize};

/// One segment of a generated story, identified by its position.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_getters::Getters)]
pub struct Paragraph {
    /// Zero-based position in the story
    index: usize,
    /// Paragraph text, exactly as split from the story
    text: String,
}

impl Paragraph {
    /// Create a paragraph at the given position.
    pub fn new(index: usize, text: impl Into<String>) -> Self {
        Self {
            index,
            text: text.into(),
        }
    }
}

/// A paragraph paired with its illustration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct Page {
    /// The caption text and its story position
    paragraph: Paragraph,
    /// The illustration
    image: GeneratedImage,
}

impl Page {
    /// Pair a paragraph with its image.
    pub fn new(paragraph: Paragraph, image: GeneratedImage) -> Self {
        Self { paragraph, image }
    }

    /// Caption text.
    pub fn text(&self) -> &str {
        self.paragraph.text()
    }

    /// Zero-based story position of the paragraph.
    pub fn index(&self) -> usize {
        *self.paragraph.index()
    }
}

/// A paragraph whose illustration could not be generated.
///
/// The paragraph is left out of the storybook; this record is what the
/// user sees instead.
///
/// # Examples
///
/// ```
/// use storybook_core::PageFailure;
///
/// let failure = PageFailure::new(1, "The panda jumped", "API error 503");
/// assert_eq!(
///     failure.to_string(),
///     "Image generation failed for: The panda jumped\nError: API error 503"
/// );
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_more::Display,
)]
#[display("Image generation failed for: {}\nError: {}", paragraph, detail)]
pub struct PageFailure {
    /// Zero-based story position of the paragraph
    index: usize,
    /// Paragraph text
    paragraph: String,
    /// Underlying error message
    detail: String,
}

impl PageFailure {
    /// Record a failed paragraph.
    pub fn new(index: usize, paragraph: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            index,
            paragraph: paragraph.into(),
            detail: detail.into(),
        }
    }
}
