use std::panic::{self, AssertUnwindSafe};

use lopdf::Document;

use crate::error::{AppError, AppResult};

/// Raw output of one extraction pass. An empty or whitespace-only `text` is
/// valid output at this layer; classifying it as "no text found" happens in
/// the response formatting above.
#[derive(Debug)]
pub struct ExtractionResult {
    pub text: String,
    pub pages: usize,
}

pub struct PdfExtractor;

impl PdfExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Convert raw PDF bytes into text and a page count.
    ///
    /// Parser errors are not swallowed: they are wrapped as
    /// [`AppError::ExtractionFailed`] carrying the underlying message.
    /// `pdf_extract` can also panic outright on malformed input, so the call
    /// sits behind a `catch_unwind` boundary and a panic is classified the
    /// same way as a parse error.
    pub fn extract(&self, data: &[u8]) -> AppResult<ExtractionResult> {
        let text = run_parser(data)?;
        let pages = page_count(data);

        tracing::debug!(
            text_length = text.len(),
            pages = pages,
            "PDF text extraction succeeded"
        );

        Ok(ExtractionResult { text, pages })
    }
}

impl Default for PdfExtractor {
    fn default() -> Self {
        Self::new()
    }
}

fn run_parser(data: &[u8]) -> AppResult<String> {
    let owned = data.to_vec(); // owned copy for the unwind boundary
    let outcome = panic::catch_unwind(AssertUnwindSafe(move || {
        pdf_extract::extract_text_from_mem(&owned)
    }));

    match outcome {
        Ok(Ok(text)) => Ok(text),
        Ok(Err(e)) => Err(AppError::extraction(e.to_string())),
        Err(_) => Err(AppError::extraction("parser panicked on malformed input")),
    }
}

/// Page count as reported by the document catalog, with a floor of 1.
/// An unreadable catalog defaults to 1.
fn page_count(data: &[u8]) -> usize {
    match Document::load_mem(data) {
        Ok(doc) => doc.get_pages().len().max(1),
        Err(e) => {
            tracing::debug!("Page count unavailable ({}), defaulting to 1", e);
            1
        }
    }
}

/// Collapse every run of whitespace (spaces, tabs, newlines) to a single
/// ASCII space and trim the ends. One-way: paragraph boundaries are not
/// preserved.
pub fn normalize_whitespace(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}
