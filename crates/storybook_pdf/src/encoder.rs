//! Download encoding for assembled storybooks.

use crate::Storybook;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use derive_getters::Getters;
use storybook_error::StorybookResult;

/// MIME type of the encoded document.
pub const PDF_MIME: &str = "application/pdf";

/// Serialized storybook in the forms a user can download.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct EncodedStorybook {
    /// Raw PDF bytes
    #[getter(skip)]
    bytes: Vec<u8>,
    /// Standard, padded base64 of `bytes`
    #[getter(skip)]
    base64: String,
    /// Logical pages in the document
    page_count: usize,
}

impl EncodedStorybook {
    /// Raw PDF bytes.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Base64 text of the PDF.
    pub fn base64(&self) -> &str {
        &self.base64
    }

    /// `data:` URI suitable for a download link.
    pub fn data_uri(&self) -> String {
        format!("data:{};base64,{}", PDF_MIME, self.base64)
    }
}

/// Serializes storybooks for download.
#[derive(Debug, Clone, Copy, Default)]
pub struct DownloadEncoder;

impl DownloadEncoder {
    /// Serialize and base64-encode a storybook.
    ///
    /// # Errors
    ///
    /// Returns an assembly error if serialization fails.
    #[tracing::instrument(skip_all, fields(request_id = %storybook.request_id()))]
    pub fn encode(storybook: &Storybook) -> StorybookResult<EncodedStorybook> {
        let bytes = storybook.to_bytes()?;
        let base64 = STANDARD.encode(&bytes);
        tracing::debug!(bytes = bytes.len(), encoded = base64.len(), "Encoded storybook");
        Ok(EncodedStorybook {
            bytes,
            base64,
            page_count: storybook.page_count(),
        })
    }
}
