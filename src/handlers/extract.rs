use axum::{extract::Multipart, response::Json};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use tracing::{error, info, warn};

use crate::error::{AppError, AppResult};
use crate::models::{Base64Request, ExtractResponse, UploadedPdf};
use crate::services::{normalize_whitespace, PdfExtractor};

const NO_TEXT_MESSAGE: &str =
    "No text could be extracted from this PDF. It may be image-based, password-protected, or corrupted.";

/// Multipart upload path: `POST /extract-text`, PDF in the `file` field.
pub async fn extract_text_handler(mut multipart: Multipart) -> AppResult<Json<ExtractResponse>> {
    let request_id = short_request_id();

    let file = read_pdf_field(&mut multipart).await?;

    if !file.has_pdf_extension() {
        warn!(
            request_id = %request_id,
            file_name = %file.name,
            "Upload rejected: filename is not a .pdf"
        );
        return Err(AppError::NotAPdf);
    }

    info!(
        request_id = %request_id,
        file_name = %file.name,
        file_size = file.size,
        "Processing PDF upload"
    );

    let outcome = run_extraction(&request_id, &file.content)?.with_file_name(file.name);
    Ok(Json(outcome))
}

/// Base64 ingestion path: `POST /extract-from-base64` with `{"pdfData": ...}`.
pub async fn extract_base64_handler(
    Json(body): Json<Base64Request>,
) -> AppResult<Json<ExtractResponse>> {
    let request_id = short_request_id();

    let payload = body
        .pdf_data
        .filter(|data| !data.is_empty())
        .ok_or(AppError::MissingPayload)?;

    let data = BASE64.decode(payload.as_bytes()).map_err(|e| {
        warn!(request_id = %request_id, error = %e, "Base64 decode failed");
        AppError::InvalidBase64
    })?;

    info!(
        request_id = %request_id,
        file_size = data.len(),
        "Processing base64 PDF"
    );

    let outcome = run_extraction(&request_id, &data)?;
    Ok(Json(outcome))
}

/// Extract, normalize and classify. Parser failures become a business-level
/// failure payload (still HTTP 200); anything else propagates as an internal
/// fault.
fn run_extraction(request_id: &str, data: &[u8]) -> AppResult<ExtractResponse> {
    let extractor = PdfExtractor::new();

    let result = match extractor.extract(data) {
        Ok(result) => result,
        Err(err @ AppError::ExtractionFailed { .. }) => {
            let message = err.to_string();
            error!(request_id = %request_id, error = %message, "PDF extraction failed");
            return Ok(ExtractResponse::failure(message));
        }
        Err(other) => return Err(other),
    };

    let cleaned = normalize_whitespace(&result.text);

    if cleaned.is_empty() {
        // A mechanically valid parse with zero glyphs of text: image-based
        // or encrypted content, reported distinctly from a parser failure.
        info!(request_id = %request_id, "No text found in PDF");
        return Ok(ExtractResponse::failure(NO_TEXT_MESSAGE));
    }

    info!(
        request_id = %request_id,
        text_length = cleaned.chars().count(),
        page_count = result.pages,
        "Extraction succeeded"
    );

    Ok(ExtractResponse::success(cleaned, result.pages))
}

async fn read_pdf_field(multipart: &mut Multipart) -> AppResult<UploadedPdf> {
    while let Some(field) = multipart.next_field().await.map_err(|e| {
        AppError::invalid_upload(format!("Failed to read multipart field: {}", e))
    })? {
        if field.name() != Some("file") {
            continue;
        }

        let file_name = field.file_name().unwrap_or("upload.pdf").to_string();

        let data = field.bytes().await.map_err(|e| {
            AppError::invalid_upload(format!("Failed to read file data: {}", e))
        })?;

        if data.is_empty() {
            return Err(AppError::MissingFile);
        }

        return Ok(UploadedPdf::new(file_name, data.to_vec()));
    }

    Err(AppError::MissingFile)
}

fn short_request_id() -> String {
    uuid::Uuid::new_v4().to_string()[..8].to_string()
}
