//! Story generation parameters.

use serde::{Deserialize, Serialize};

/// Knobs passed to the story capability with every prompt.
///
/// # Examples
///
/// ```
/// use storybook_core::StoryParameters;
///
/// let params = StoryParameters::default();
/// assert_eq!(*params.max_output_length(), 200);
/// assert!(*params.sampling());
///
/// let greedy = StoryParameters::builder()
///     .sampling(false)
///     .build()
///     .unwrap();
/// assert!(!*greedy.sampling());
/// assert_eq!(*greedy.max_output_length(), 200);
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
#[builder(default)]
pub struct StoryParameters {
    /// Upper bound on generated length, in model tokens.
    #[serde(default = "default_max_output_length")]
    max_output_length: u32,
    /// Sample instead of greedy decoding.
    #[serde(default = "default_true")]
    sampling: bool,
    /// Let the model truncate prompts that exceed its input window.
    #[serde(default = "default_true")]
    truncate_input: bool,
}

fn default_max_output_length() -> u32 {
    200
}

fn default_true() -> bool {
    true
}

impl Default for StoryParameters {
    fn default() -> Self {
        Self {
            max_output_length: default_max_output_length(),
            sampling: true,
            truncate_input: true,
        }
    }
}

impl StoryParameters {
    /// Parameters with every field given explicitly.
    pub fn new(max_output_length: u32, sampling: bool, truncate_input: bool) -> Self {
        Self {
            max_output_length,
            sampling,
            truncate_input,
        }
    }

    /// Creates a new builder seeded with the defaults.
    pub fn builder() -> StoryParametersBuilder {
        StoryParametersBuilder::default()
    }
}
