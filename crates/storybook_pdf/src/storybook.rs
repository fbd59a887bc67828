//! The assembled document.

use derive_getters::Getters;
use lopdf::Document;
use storybook_error::{AssemblyError, AssemblyErrorKind, StorybookResult};
use uuid::Uuid;

/// A paginated storybook, ready to be encoded for download.
///
/// Created once per request by [`StorybookAssembler`](crate::StorybookAssembler)
/// and never modified afterwards.
#[derive(Debug, Clone, Getters)]
pub struct Storybook {
    /// Request that produced this storybook
    request_id: Uuid,
    /// Story position of each logical page, in document order
    page_indices: Vec<usize>,
    /// Caption of each logical page, in document order
    captions: Vec<String>,
    /// Physical sheets, including caption continuations
    sheet_count: usize,
    /// Underlying PDF object graph
    #[getter(skip)]
    document: Document,
}

impl Storybook {
    pub(crate) fn new(
        request_id: Uuid,
        page_indices: Vec<usize>,
        captions: Vec<String>,
        sheet_count: usize,
        document: Document,
    ) -> Self {
        Self {
            request_id,
            page_indices,
            captions,
            sheet_count,
            document,
        }
    }

    /// Number of logical pages (illustrated paragraphs).
    pub fn page_count(&self) -> usize {
        self.captions.len()
    }

    /// Whether every illustration failed.
    ///
    /// An empty storybook still serializes to a valid one-sheet PDF.
    pub fn is_empty(&self) -> bool {
        self.captions.is_empty()
    }

    /// Serialize to PDF bytes.
    ///
    /// # Errors
    ///
    /// Returns an assembly error if the writer fails.
    #[tracing::instrument(skip(self), fields(request_id = %self.request_id))]
    pub fn to_bytes(&self) -> StorybookResult<Vec<u8>> {
        let mut document = self.document.clone();
        let mut buffer = Vec::new();
        document.save_to(&mut buffer).map_err(|e| {
            tracing::error!(error = %e, "Failed to serialize storybook");
            AssemblyError::new(AssemblyErrorKind::Serialize(e.to_string()))
        })?;
        tracing::debug!(bytes = buffer.len(), "Serialized storybook");
        Ok(buffer)
    }
}
