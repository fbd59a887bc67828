//! Document assembly and encoding errors.

/// Specific error conditions while building or serializing a storybook.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum AssemblyErrorKind {
    /// Generated image bytes could not be decoded
    #[display("Failed to decode image for page {}: {}", page, message)]
    ImageDecode {
        /// Zero-based page index
        page: usize,
        /// Decoder message
        message: String,
    },
    /// Page content stream could not be encoded
    #[display("Failed to encode page content: {}", _0)]
    ContentEncode(String),
    /// Document could not be serialized
    #[display("Failed to serialize document: {}", _0)]
    Serialize(String),
}

/// Assembly error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Assembly Error: {} at line {} in {}", kind, line, file)]
pub struct AssemblyError {
    /// The kind of error that occurred
    pub kind: AssemblyErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl AssemblyError {
    /// Create a new assembly error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: AssemblyErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
