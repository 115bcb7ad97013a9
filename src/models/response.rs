use serde::{Deserialize, Serialize};

/// Wire-level outcome of an extraction request.
///
/// Both variants are sent with HTTP 200: from the caller's perspective a PDF
/// that yields no text and a PDF the parser rejects are equally "could not
/// get usable text", not transport failures. Absent fields are omitted from
/// the JSON entirely, so a success body never carries an `error` key and the
/// base64 path never carries a `fileName`.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExtractResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extracted_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_length: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ExtractResponse {
    /// `text` must already be whitespace-normalized; `text_length` counts
    /// characters of the normalized form.
    pub fn success(text: String, page_count: usize) -> Self {
        Self {
            success: true,
            text_length: Some(text.chars().count()),
            page_count: Some(page_count),
            extracted_text: Some(text),
            ..Self::default()
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(error.into()),
            ..Self::default()
        }
    }

    pub fn with_file_name(mut self, name: impl Into<String>) -> Self {
        self.file_name = Some(name.into());
        self
    }
}

/// Response for the Instagram thumbnail resolver. A failed reachability
/// check is not surfaced as an error, only as `fallback: true`.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThumbnailResponse {
    pub success: bool,
    pub thumbnail_url: String,
    pub post_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback: Option<bool>,
}

impl ThumbnailResponse {
    pub fn resolved(thumbnail_url: String, post_id: String) -> Self {
        Self {
            success: true,
            thumbnail_url,
            post_id,
            fallback: None,
        }
    }

    pub fn fallback(thumbnail_url: String, post_id: String) -> Self {
        Self {
            success: true,
            thumbnail_url,
            post_id,
            fallback: Some(true),
        }
    }
}
