//! Raster images returned by the image capability.

use serde::{Deserialize, Serialize};

/// An encoded raster image (PNG, JPEG, ...) as returned by a model.
///
/// The bytes are kept encoded; decoding happens once, at assembly time.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_getters::Getters)]
pub struct GeneratedImage {
    /// MIME type reported by the capability, if any
    mime: Option<String>,
    /// Encoded image data
    data: Vec<u8>,
}

impl GeneratedImage {
    /// Wrap encoded image bytes.
    pub fn new(data: Vec<u8>, mime: Option<String>) -> Self {
        Self { mime, data }
    }

    /// File extension matching the MIME type, `png` when unknown.
    pub fn extension(&self) -> &'static str {
        match self.mime.as_deref() {
            Some("image/jpeg") | Some("image/jpg") => "jpg",
            Some("image/webp") => "webp",
            Some("image/gif") => "gif",
            Some("image/bmp") => "bmp",
            _ => "png",
        }
    }

    /// Size of the encoded data in bytes.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the capability returned zero bytes.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
