//! PDF assembly for the storybook generator.
//!
//! [`StorybookAssembler`] lays out each illustrated paragraph on its own A4
//! sheet: the image in a fixed box near the top, the paragraph below it in
//! 12 pt Helvetica. [`DownloadEncoder`] turns the result into bytes, base64
//! and a `data:` URI.
//!
//! # Example
//!
//! ```no_run
//! use storybook_core::{GeneratedImage, Page, Paragraph};
//! use storybook_pdf::{DownloadEncoder, StorybookAssembler};
//! use uuid::Uuid;
//!
//! # async fn example(png: Vec<u8>) -> Result<(), Box<dyn std::error::Error>> {
//! let page = Page::new(
//!     Paragraph::new(0, "Once upon a time, a panda dreamed of flying"),
//!     GeneratedImage::new(png, Some("image/png".to_string())),
//! );
//!
//! let storybook = StorybookAssembler::default()
//!     .assemble(Uuid::new_v4(), &[page])
//!     .await?;
//! let encoded = DownloadEncoder::encode(&storybook)?;
//! assert!(encoded.data_uri().starts_with("data:application/pdf;base64,"));
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod assembler;
mod encoder;
mod font;
mod layout;
mod storybook;

pub use assembler::{ImageStaging, StorybookAssembler};
pub use encoder::{DownloadEncoder, EncodedStorybook, PDF_MIME};
pub use font::{CAPTION_FONT, WrappedLine, encode_win_ansi, glyph_width, string_width, wrap_justified};
pub use layout::{PT_PER_MM, PageLayout, PageLayoutBuilder, PageLayoutBuilderError, StagingMode};
pub use storybook::Storybook;
