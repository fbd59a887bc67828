//! Validated user prompt.

use serde::{Deserialize, Serialize};
use storybook_error::{PromptError, PromptErrorKind};

/// A story idea supplied by the user, guaranteed not to be blank.
///
/// The original text is kept verbatim; only the emptiness check trims.
///
/// # Examples
///
/// ```
/// use storybook_core::Prompt;
///
/// let prompt = Prompt::parse("a panda who learns to fly").unwrap();
/// assert_eq!(prompt.as_str(), "a panda who learns to fly");
///
/// assert!(Prompt::parse(" \t\n").is_err());
/// ```
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[serde(try_from = "String", into = "String")]
pub struct Prompt(String);

impl Prompt {
    /// Validate a raw prompt.
    ///
    /// # Errors
    ///
    /// Returns [`PromptErrorKind::Empty`] if the input is empty after trimming.
    #[track_caller]
    pub fn parse(raw: impl Into<String>) -> Result<Self, PromptError> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(PromptError::new(PromptErrorKind::Empty));
        }
        Ok(Self(raw))
    }

    /// The prompt text as supplied.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Prompt {
    type Error = PromptError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<Prompt> for String {
    fn from(prompt: Prompt) -> Self {
        prompt.0
    }
}

impl AsRef<str> for Prompt {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
