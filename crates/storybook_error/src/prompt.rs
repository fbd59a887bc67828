//! Prompt validation errors.

/// Reasons a user prompt is rejected before generation starts.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum PromptErrorKind {
    /// Prompt is empty or contains only whitespace
    #[display("Please enter a prompt to continue")]
    Empty,
}

/// Prompt validation error with location tracking.
///
/// # Examples
///
/// ```
/// use storybook_error::{PromptError, PromptErrorKind};
///
/// let err = PromptError::new(PromptErrorKind::Empty);
/// assert_eq!(err.kind, PromptErrorKind::Empty);
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Prompt Error: {} at line {} in {}", kind, line, file)]
pub struct PromptError {
    /// The kind of error that occurred
    pub kind: PromptErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl PromptError {
    /// Create a new prompt error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: PromptErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
