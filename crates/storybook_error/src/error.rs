//! Top-level error wrapper types.

use crate::{AssemblyError, ConfigError, HttpError, ModelsError, PromptError, StorageError};

/// Every failure the storybook pipeline can report.
///
/// # Examples
///
/// ```
/// use storybook_error::{HttpError, StorybookError};
///
/// let http_err = HttpError::new("Connection failed");
/// let err: StorybookError = http_err.into();
/// assert!(format!("{}", err).contains("HTTP Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum StorybookErrorKind {
    /// HTTP error
    #[from(HttpError)]
    Http(HttpError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Prompt validation error
    #[from(PromptError)]
    Prompt(PromptError),
    /// Model capability error
    #[from(ModelsError)]
    Models(ModelsError),
    /// Scratch storage error
    #[from(StorageError)]
    Storage(StorageError),
    /// Document assembly or encoding error
    #[from(AssemblyError)]
    Assembly(AssemblyError),
}

/// Storybook error with kind discrimination.
///
/// # Examples
///
/// ```
/// use storybook_error::{ConfigError, StorybookResult};
///
/// fn might_fail() -> StorybookResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// match might_fail() {
///     Ok(_) => println!("Success"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Storybook Error: {}", _0)]
pub struct StorybookError(Box<StorybookErrorKind>);

impl StorybookError {
    /// Create a new error from a kind.
    pub fn new(kind: StorybookErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &StorybookErrorKind {
        &self.0
    }

    /// The underlying message, without source locations.
    ///
    /// Suitable for showing to end users; logs should keep the full
    /// `Display` output.
    ///
    /// # Examples
    ///
    /// ```
    /// use storybook_error::{PromptError, PromptErrorKind, StorybookError};
    ///
    /// let err: StorybookError = PromptError::new(PromptErrorKind::Empty).into();
    /// assert_eq!(err.user_message(), "Please enter a prompt to continue");
    /// ```
    pub fn user_message(&self) -> String {
        match self.kind() {
            StorybookErrorKind::Http(e) => e.message.clone(),
            StorybookErrorKind::Config(e) => e.message.clone(),
            StorybookErrorKind::Prompt(e) => e.kind.to_string(),
            StorybookErrorKind::Models(e) => e.kind.to_string(),
            StorybookErrorKind::Storage(e) => e.kind.to_string(),
            StorybookErrorKind::Assembly(e) => e.kind.to_string(),
        }
    }
}

impl<T> From<T> for StorybookError
where
    T: Into<StorybookErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for storybook operations.
pub type StorybookResult<T> = std::result::Result<T, StorybookError>;
