//! End-to-end tests that drive the real router over HTTP.
//!
//! Each test binds the app to an ephemeral port with a stubbed reachability
//! probe, so nothing here touches the network beyond loopback.

use std::sync::Arc;

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use excerpt::services::instagram::ReachabilityProbe;
use excerpt::{router, AppState, Config};
use serde_json::Value;

struct StubProbe {
    reachable: bool,
}

#[async_trait::async_trait]
impl ReachabilityProbe for StubProbe {
    async fn is_reachable(&self, _url: &str) -> bool {
        self.reachable
    }
}

async fn spawn_app(probe: StubProbe) -> String {
    let state = AppState::with_probe(Config::default(), Arc::new(probe));
    let app = router(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}", addr)
}

async fn spawn_default_app() -> String {
    spawn_app(StubProbe { reachable: false }).await
}

/// Single-page PDF whose only text is `Hello   World` (run of three spaces).
fn hello_world_pdf() -> Vec<u8> {
    use lopdf::content::{Content, Operation};
    use lopdf::{dictionary, Document, Object, Stream};

    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! { "F1" => font_id },
    });

    let content = Content {
        operations: vec![
            Operation::new("BT", vec![]),
            Operation::new("Tf", vec!["F1".into(), 24.into()]),
            Operation::new("Td", vec![100.into(), 600.into()]),
            Operation::new("Tj", vec![Object::string_literal("Hello   World")]),
            Operation::new("ET", vec![]),
        ],
    };
    let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));

    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "Contents" => content_id,
    });
    let pages = dictionary! {
        "Type" => "Pages",
        "Kids" => vec![page_id.into()],
        "Count" => 1,
        "Resources" => resources_id,
        "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
    };
    doc.objects.insert(pages_id, Object::Dictionary(pages));

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut buffer = Vec::new();
    doc.save_to(&mut buffer).expect("serialize fixture PDF");
    buffer
}

fn pdf_form(bytes: Vec<u8>, file_name: &str) -> reqwest::multipart::Form {
    let part = reqwest::multipart::Part::bytes(bytes)
        .file_name(file_name.to_string())
        .mime_str("application/pdf")
        .unwrap();
    reqwest::multipart::Form::new().part("file", part)
}

async fn post_pdf(base: &str, bytes: Vec<u8>, file_name: &str) -> reqwest::Response {
    reqwest::Client::new()
        .post(format!("{}/extract-text", base))
        .multipart(pdf_form(bytes, file_name))
        .send()
        .await
        .unwrap()
}

#[tokio::test]
async fn health_endpoint_reports_service() {
    let base = spawn_default_app().await;

    let res = reqwest::get(format!("{}/health", base)).await.unwrap();
    assert_eq!(res.status(), 200);

    let body: Value = res.json().await.unwrap();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "PDF Text Extractor API");
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn root_endpoint_answers_platform_probes() {
    let base = spawn_default_app().await;

    let res = reqwest::get(&base).await.unwrap();
    assert_eq!(res.status(), 200);

    let body: Value = res.json().await.unwrap();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["message"], "API is running");
}

#[tokio::test]
async fn extract_text_happy_path() {
    let base = spawn_default_app().await;

    let res = post_pdf(&base, hello_world_pdf(), "hello.pdf").await;
    assert_eq!(res.status(), 200);

    let body: Value = res.json().await.unwrap();
    assert_eq!(body["success"], true);
    assert_eq!(body["extractedText"], "Hello World");
    assert_eq!(body["fileName"], "hello.pdf");
    assert_eq!(body["textLength"], 11);
    assert_eq!(body["pageCount"], 1);
    assert!(body.get("error").is_none());
}

#[tokio::test]
async fn extraction_is_idempotent() {
    let base = spawn_default_app().await;
    let pdf = hello_world_pdf();

    let first: Value = post_pdf(&base, pdf.clone(), "a.pdf").await.json().await.unwrap();
    let second: Value = post_pdf(&base, pdf, "a.pdf").await.json().await.unwrap();

    assert_eq!(first["extractedText"], second["extractedText"]);
    assert_eq!(first["pageCount"], second["pageCount"]);
}

#[tokio::test]
async fn missing_file_field_is_rejected() {
    let base = spawn_default_app().await;

    let form = reqwest::multipart::Form::new().text("unrelated", "value");
    let res = reqwest::Client::new()
        .post(format!("{}/extract-text", base))
        .multipart(form)
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), 400);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["error"], "No file provided");
}

#[tokio::test]
async fn non_pdf_filename_is_rejected_despite_magic_bytes() {
    let base = spawn_default_app().await;

    let res = post_pdf(&base, b"%PDF-1.4 pretend".to_vec(), "report.txt").await;

    assert_eq!(res.status(), 400);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["error"], "File must be a PDF");
}

#[tokio::test]
async fn corrupt_pdf_reports_failure_at_http_200() {
    let base = spawn_default_app().await;

    let res = post_pdf(&base, b"definitely not a pdf".to_vec(), "broken.pdf").await;
    assert_eq!(res.status(), 200);

    let body: Value = res.json().await.unwrap();
    assert_eq!(body["success"], false);
    assert_eq!(body["fileName"], "broken.pdf");
    let error = body["error"].as_str().unwrap();
    assert!(
        error.starts_with("Failed to extract text from PDF: "),
        "unexpected error message: {}",
        error
    );
}

#[tokio::test]
async fn oversized_upload_is_rejected_before_parsing() {
    let base = spawn_default_app().await;

    // 11 MiB of zeros: over the 10 MiB transport cap including framing.
    // The server may answer 4xx or cut the connection mid-upload; either
    // way the request must not succeed.
    let result = reqwest::Client::new()
        .post(format!("{}/extract-text", base))
        .multipart(pdf_form(vec![0u8; 11 * 1024 * 1024], "big.pdf"))
        .send()
        .await;

    if let Ok(res) = result {
        assert!(
            res.status().is_client_error(),
            "expected a 4xx, got {}",
            res.status()
        );
    }
}

#[tokio::test]
async fn base64_path_matches_multipart_path() {
    let base = spawn_default_app().await;
    let pdf = hello_world_pdf();

    let multipart: Value = post_pdf(&base, pdf.clone(), "hello.pdf").await.json().await.unwrap();

    let res = reqwest::Client::new()
        .post(format!("{}/extract-from-base64", base))
        .json(&serde_json::json!({ "pdfData": BASE64.encode(&pdf) }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 200);

    let body: Value = res.json().await.unwrap();
    assert_eq!(body["success"], true);
    assert_eq!(body["extractedText"], multipart["extractedText"]);
    assert_eq!(body["textLength"], multipart["textLength"]);
    assert_eq!(body["pageCount"], multipart["pageCount"]);
    // The base64 path has no filename to report.
    assert!(body.get("fileName").is_none());
}

#[tokio::test]
async fn base64_missing_payload_is_rejected() {
    let base = spawn_default_app().await;
    let client = reqwest::Client::new();

    for payload in [serde_json::json!({}), serde_json::json!({ "pdfData": "" })] {
        let res = client
            .post(format!("{}/extract-from-base64", base))
            .json(&payload)
            .send()
            .await
            .unwrap();

        assert_eq!(res.status(), 400);
        let body: Value = res.json().await.unwrap();
        assert_eq!(body["error"], "No PDF data provided");
    }
}

#[tokio::test]
async fn base64_invalid_encoding_is_rejected() {
    let base = spawn_default_app().await;

    let res = reqwest::Client::new()
        .post(format!("{}/extract-from-base64", base))
        .json(&serde_json::json!({ "pdfData": "%%%not base64%%%" }))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), 400);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["error"], "Invalid base64 data");
}

#[tokio::test]
async fn thumbnail_resolves_when_probe_succeeds() {
    let base = spawn_app(StubProbe { reachable: true }).await;

    let res = reqwest::get(format!(
        "{}/instagram-thumbnail?url=https://instagram.com/p/ABC123/",
        base
    ))
    .await
    .unwrap();
    assert_eq!(res.status(), 200);

    let body: Value = res.json().await.unwrap();
    assert_eq!(body["success"], true);
    assert_eq!(
        body["thumbnailUrl"],
        "https://instagram.com/p/ABC123/media/?size=l"
    );
    assert_eq!(body["postId"], "ABC123");
    assert!(body.get("fallback").is_none());
}

#[tokio::test]
async fn thumbnail_falls_back_when_probe_fails() {
    let base = spawn_app(StubProbe { reachable: false }).await;

    let res = reqwest::get(format!(
        "{}/instagram-thumbnail?url=https://instagram.com/p/ABC123/",
        base
    ))
    .await
    .unwrap();
    assert_eq!(res.status(), 200);

    let body: Value = res.json().await.unwrap();
    assert_eq!(body["success"], true);
    assert_eq!(body["thumbnailUrl"], "/video-placeholder.svg");
    assert_eq!(body["postId"], "ABC123");
    assert_eq!(body["fallback"], true);
}

#[tokio::test]
async fn thumbnail_validates_the_url_parameter() {
    let base = spawn_default_app().await;
    let client = reqwest::Client::new();

    let cases = [
        ("", "URL parameter is required"),
        ("?url=https://example.com/p/ABC/", "URL must be an Instagram link"),
        (
            "?url=https://instagram.com/someprofile",
            "Invalid Instagram URL format",
        ),
    ];

    for (query, expected) in cases {
        let res = client
            .get(format!("{}/instagram-thumbnail{}", base, query))
            .send()
            .await
            .unwrap();

        assert_eq!(res.status(), 400, "query {:?}", query);
        let body: Value = res.json().await.unwrap();
        assert_eq!(body["error"], expected, "query {:?}", query);
    }
}
