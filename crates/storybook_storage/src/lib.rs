//! Scratch artifact staging for the storybook generator.
//!
//! Some document backends can only embed images they read back from a
//! store. This crate gives each such image a short-lived home:
//!
//! - **Unique keys**: one directory per request, one file per page index
//! - **Scoped lifetime**: a [`StagedArtifact`] removes its file when dropped,
//!   on success and error paths alike
//!
//! # Example
//!
//! ```rust
//! use storybook_storage::{ArtifactKey, ScratchStore};
//! use uuid::Uuid;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = ScratchStore::new(std::env::temp_dir().join("storybook-doc"))?;
//! let key = ArtifactKey::new(Uuid::new_v4(), 0, "png");
//!
//! let staged = store.stage(&key, b"image bytes").await?;
//! assert_eq!(staged.read().await?, b"image bytes");
//! let path = staged.path().to_path_buf();
//! drop(staged);
//! assert!(!path.exists());
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod scratch;

pub use scratch::{ArtifactKey, ScratchStore, StagedArtifact};
pub use storybook_error::{StorageError, StorageErrorKind};
