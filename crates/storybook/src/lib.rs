//! Storybook - illustrated children's stories from a single prompt.
//!
//! A pretrained language model writes a short story, the story is split
//! into up to five paragraphs, a diffusion model illustrates each one, and
//! the pages are assembled into a PDF ready for download.
//!
//! # Quick Start
//!
//! ```no_run
//! use storybook::{StorybookConfig, StorybookGenerator};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = StorybookConfig::load()?;
//!     let generator = StorybookGenerator::from_config(&config)?;
//!
//!     let outcome = generator.generate("a panda who learns to fly").await?;
//!     for failure in outcome.failures() {
//!         eprintln!("{}", failure);
//!     }
//!     std::fs::write("storybook.pdf", outcome.storybook().bytes())?;
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! - `storybook_error` - Error types
//! - `storybook_core` - Prompts, paragraphs, pages and text helpers
//! - `storybook_interface` - Story and image capability traits
//! - `storybook_models` - HuggingFace Inference API drivers
//! - `storybook_storage` - Scratch staging for images
//! - `storybook_pdf` - Document assembly and download encoding
//!
//! This crate re-exports the commonly used pieces and adds configuration,
//! the request pipeline and the web form.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod delivery;
mod generator;
pub mod web;

pub use config::{
    ENV_PREFIX, HubConfig, ImageConfig, LayoutConfig, ServerConfig, StoryConfig, StorybookConfig,
};
pub use delivery::{Destination, generate_to};
pub use generator::{StorybookGenerator, StorybookOutcome};

pub use storybook_core::{
    GeneratedImage, MAX_PAGES, Page, PageFailure, Paragraph, Prompt, StoryParameters,
    split_paragraphs, truncate_words,
};
pub use storybook_error::{StorybookError, StorybookErrorKind, StorybookResult};
pub use storybook_interface::{ImageGenerator, ModelRegistry, StoryGenerator};
pub use storybook_storage::ScratchStore;
pub use storybook_pdf::{
    DownloadEncoder, EncodedStorybook, ImageStaging, PageLayout, StagingMode, Storybook,
    StorybookAssembler,
};
