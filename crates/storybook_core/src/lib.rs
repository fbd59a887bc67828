//! Core data types for the storybook generator.
//!
//! This crate holds the request-scoped values that flow through the
//! pipeline (prompt, paragraphs, pages) and the pure text helpers that
//! shape a generated story before it reaches the image model.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod image;
mod page;
mod parameters;
mod prompt;
pub mod text;

pub use image::GeneratedImage;
pub use page::{Page, PageFailure, Paragraph};
pub use parameters::{StoryParameters, StoryParametersBuilder, StoryParametersBuilderError};
pub use prompt::Prompt;
pub use text::{DEFAULT_MAX_WORDS, MAX_PAGES, PARAGRAPH_DELIMITER, split_paragraphs, truncate_words};
