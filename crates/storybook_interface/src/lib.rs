//! Capability traits for the storybook generator.
//!
//! The story and image models are opaque services reached through two
//! narrow traits. A [`ModelRegistry`] holds one instance of each for the
//! life of the process and is handed to whatever runs requests.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod registry;
mod traits;

pub use registry::ModelRegistry;
pub use traits::{ImageGenerator, StoryGenerator};
