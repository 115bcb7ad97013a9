use serde::{Deserialize, Serialize};

/// JSON body for the base64 ingestion route.
///
/// `pdfData` is optional at the serde level so that a missing field surfaces
/// as our own 400 rather than a deserialization rejection.
#[derive(Debug, Deserialize, Serialize)]
pub struct Base64Request {
    #[serde(rename = "pdfData")]
    pub pdf_data: Option<String>,
}

/// A PDF pulled out of a multipart upload, held entirely in memory.
#[derive(Debug, Clone)]
pub struct UploadedPdf {
    pub name: String,
    pub size: usize,
    pub content: Vec<u8>,
}

impl UploadedPdf {
    pub fn new(name: String, content: Vec<u8>) -> Self {
        let size = content.len();
        Self {
            name,
            size,
            content,
        }
    }

    /// The PDF gate is a filename-suffix check. The declared MIME type is
    /// used for channel routing only and the content is never sniffed.
    pub fn has_pdf_extension(&self) -> bool {
        self.name.to_lowercase().ends_with(".pdf")
    }
}
