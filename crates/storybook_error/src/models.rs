//! Model provider errors.

/// HuggingFace-specific error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum HuggingFaceErrorKind {
    /// Request could not be sent or the connection failed
    #[display("Request failed: {}", _0)]
    Request(String),
    /// Request exceeded the configured timeout
    #[display("Request timed out: {}", _0)]
    Timeout(String),
    /// Hub rejected the access token
    #[display("Unauthorized ({}): {}", status, message)]
    Unauthorized {
        /// HTTP status code
        status: u16,
        /// Response body
        message: String,
    },
    /// Hub returned a non-success status
    #[display("API error {}: {}", status, message)]
    Api {
        /// HTTP status code
        status: u16,
        /// Response body
        message: String,
    },
    /// Response body did not match the expected shape
    #[display("Response conversion error: {}", _0)]
    ResponseConversion(String),
    /// Invalid client configuration
    #[display("Invalid configuration: {}", _0)]
    InvalidConfiguration(String),
}

/// Model provider-specific error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display, derive_more::From)]
pub enum ModelsErrorKind {
    /// HuggingFace-specific error
    #[display("HuggingFace: {}", _0)]
    HuggingFace(HuggingFaceErrorKind),

    /// Story capability returned no candidates
    #[from(ignore)]
    #[display("Story model returned no text")]
    EmptyStory,

    /// Image capability returned no image
    #[from(ignore)]
    #[display("Image model returned no image")]
    EmptyImage,

    /// Builder error (derive_builder failures)
    #[from(ignore)]
    #[display("Builder error: {}", _0)]
    Builder(String),

    /// Capability-specific failure reported by a non-hub backend
    #[from(ignore)]
    #[display("Backend error: {}", _0)]
    Backend(String),
}

/// Model provider error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Models Error: {} at {}:{}", kind, file, line)]
pub struct ModelsError {
    /// The specific error kind
    pub kind: ModelsErrorKind,
    /// Line number where error occurred
    pub line: u32,
    /// Source file where error occurred
    pub file: &'static str,
}

impl ModelsError {
    /// Create a new models error.
    #[track_caller]
    pub fn new(kind: ModelsErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<HuggingFaceErrorKind> for ModelsError {
    #[track_caller]
    fn from(kind: HuggingFaceErrorKind) -> Self {
        Self::new(ModelsErrorKind::HuggingFace(kind))
    }
}

/// Result type for model operations.
pub type ModelsResult<T> = Result<T, ModelsError>;
