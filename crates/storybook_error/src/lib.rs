//! Error types for the storybook generator.
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use storybook_error::{PromptError, PromptErrorKind, StorybookErrorKind, StorybookResult};
//!
//! fn validate(prompt: &str) -> StorybookResult<&str> {
//!     if prompt.trim().is_empty() {
//!         Err(PromptError::new(PromptErrorKind::Empty))?
//!     }
//!     Ok(prompt)
//! }
//!
//! let err = validate("   ").unwrap_err();
//! assert!(matches!(err.kind(), StorybookErrorKind::Prompt(_)));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod assembly;
mod config;
mod error;
mod http;
mod models;
mod prompt;
mod storage;

pub use assembly::{AssemblyError, AssemblyErrorKind};
pub use config::ConfigError;
pub use error::{StorybookError, StorybookErrorKind, StorybookResult};
pub use http::HttpError;
pub use models::{HuggingFaceErrorKind, ModelsError, ModelsErrorKind, ModelsResult};
pub use prompt::{PromptError, PromptErrorKind};
pub use storage::{StorageError, StorageErrorKind};
