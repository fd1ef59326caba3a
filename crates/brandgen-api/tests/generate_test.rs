//! Generation endpoint integration tests.
//!
//! Run with: `cargo test -p brandgen-api --test generate_test`

mod helpers;

use helpers::{acme_request, setup_test_app, setup_test_app_with, StorageMode, TestOptions, PAGE};
use serde_json::{json, Value};

#[tokio::test]
async fn test_root_and_health() {
    let app = setup_test_app().await;
    let client = app.client();

    let response = client.get("/").await;
    assert_eq!(response.status_code(), 200);
    assert_eq!(
        response.json::<Value>(),
        json!({"message": "Brand Content Generator API is running"})
    );

    let response = client.get("/health").await;
    assert_eq!(response.status_code(), 200);
    assert_eq!(response.json::<Value>(), json!({"status": "healthy"}));
}

#[tokio::test]
async fn test_generate_saves_and_uploads() {
    let app = setup_test_app().await;
    let client = app.client();

    let response = client.post("/generate-brand-content").json(&acme_request()).await;
    assert_eq!(response.status_code(), 200);

    let body: Value = response.json();
    assert_eq!(body["status"], "success");
    assert_eq!(body["message"], "Brand website generated successfully");
    assert_eq!(body["parameters_used"]["company_name"], "Acme Co");
    assert_eq!(body["parameters_used"]["tone"], "casual");
    assert_eq!(body["parameters_used"]["design_style"], "modern");
    assert_eq!(body["parameters_used"]["primary_color"], "#ABC");

    // Fences from the model reply are stripped before anything is stored
    assert_eq!(body["html_content"], PAGE);
    assert_eq!(body["html_length"], PAGE.len());
    assert_eq!(body["html_valid"], true);

    let filename = body["local_file"]["filename"].as_str().unwrap();
    assert!(filename.starts_with("acme_co_"));
    assert!(filename.ends_with(".html"));
    assert_eq!(
        body["local_file"]["download_url"],
        format!("/download/{}", filename)
    );
    assert_eq!(app.saved_files(), vec![filename.to_string()]);

    let key = body["storage"]["key"].as_str().unwrap();
    assert!(key.starts_with("brand-websites/acme_co_"));
    assert_eq!(body["storage"]["url_expires_in_secs"], 604_800);
    assert_eq!(body["url_expires_in"], "7 days");
    assert!(body.get("storage_error").is_none());

    let uploads = app.storage.uploads.lock().unwrap();
    assert_eq!(uploads.len(), 1);
    let metadata = &uploads[0].1;
    assert_eq!(metadata["tone"], "casual");
    assert_eq!(metadata["design_style"], "modern");
    assert_eq!(metadata["primary_color"], "#ABC");
    assert_eq!(metadata["generated_by"], "fake-model");
}

#[tokio::test]
async fn test_prompt_carries_normalized_parameters() {
    let app = setup_test_app().await;

    app.client()
        .post("/generate-brand-content")
        .json(&acme_request())
        .await;

    let prompts = app.provider.prompts.lock().unwrap();
    assert_eq!(prompts.len(), 1);
    assert!(prompts[0].contains("\"Acme Co\""));
    assert!(prompts[0].contains("#ABC"));
    assert!(prompts[0].contains("Tone of voice (casual)"));
}

#[tokio::test]
async fn test_invalid_tone_is_rejected_with_allowed_values() {
    let app = setup_test_app().await;

    let mut request = acme_request();
    request["tone"] = json!("loud");

    let response = app
        .client()
        .post("/generate-brand-content")
        .json(&request)
        .await;
    assert_eq!(response.status_code(), 400);

    let body: Value = response.json();
    assert_eq!(body["code"], "VALIDATION_ERROR");
    assert_eq!(body["field"], "tone");
    assert_eq!(
        body["allowed_values"],
        json!(["formal", "semiformal", "casual", "playful"])
    );
    assert_eq!(
        body["error"],
        "Tone must be one of: formal, semiformal, casual, playful"
    );
    assert_eq!(app.provider.calls(), 0);
}

#[tokio::test]
async fn test_invalid_color_is_rejected() {
    let app = setup_test_app().await;

    let mut request = acme_request();
    request["primary_color"] = json!("#ABCD");

    let response = app
        .client()
        .post("/generate-brand-content")
        .json(&request)
        .await;
    assert_eq!(response.status_code(), 400);

    let body: Value = response.json();
    assert_eq!(body["field"], "primary_color");
    assert!(body.get("allowed_values").is_none());
    assert_eq!(app.provider.calls(), 0);
}

#[tokio::test]
async fn test_missing_fields_are_rejected() {
    let app = setup_test_app().await;

    let response = app
        .client()
        .post("/generate-brand-content")
        .json(&json!({"company_name": "Acme Co"}))
        .await;
    assert_eq!(response.status_code(), 400);

    let body: Value = response.json();
    assert_eq!(body["code"], "INVALID_INPUT");
}

#[tokio::test]
async fn test_upstream_failure_is_500() {
    let app = setup_test_app_with(TestOptions {
        reply: Err("Rate limit reached".to_string()),
        ..Default::default()
    })
    .await;

    let response = app
        .client()
        .post("/generate-brand-content")
        .json(&acme_request())
        .await;
    assert_eq!(response.status_code(), 500);

    let body: Value = response.json();
    assert_eq!(body["code"], "UPSTREAM_GENERATION_ERROR");
    assert!(body["error"].as_str().unwrap().contains("Rate limit reached"));
    assert!(app.saved_files().is_empty());
    assert_eq!(app.storage.upload_count(), 0);
}

#[tokio::test]
async fn test_upload_failure_degrades_when_local_copy_exists() {
    let app = setup_test_app_with(TestOptions {
        storage_mode: StorageMode::ProviderFailure,
        ..Default::default()
    })
    .await;

    let response = app
        .client()
        .post("/generate-brand-content")
        .json(&acme_request())
        .await;
    assert_eq!(response.status_code(), 200);

    let body: Value = response.json();
    assert_eq!(body["status"], "success");
    assert!(body["local_file"]["filename"].is_string());
    assert!(body.get("storage").is_none());
    assert_eq!(body["storage_error"]["code"], "STORAGE_PROVIDER_ERROR");
    assert!(body["storage_error"]["message"]
        .as_str()
        .unwrap()
        .contains("Access Denied"));
}

#[tokio::test]
async fn test_upload_failure_without_local_copy_is_500() {
    let app = setup_test_app_with(TestOptions {
        storage_mode: StorageMode::Unavailable,
        save_local_copy: false,
        ..Default::default()
    })
    .await;

    let response = app
        .client()
        .post("/generate-brand-content")
        .json(&acme_request())
        .await;
    assert_eq!(response.status_code(), 500);

    let body: Value = response.json();
    assert_eq!(body["code"], "STORAGE_UNAVAILABLE");
    assert!(app.saved_files().is_empty());
}

#[tokio::test]
async fn test_no_upload_without_bucket() {
    let app = setup_test_app_with(TestOptions {
        bucket: None,
        ..Default::default()
    })
    .await;

    let response = app
        .client()
        .post("/generate-brand-content")
        .json(&acme_request())
        .await;
    assert_eq!(response.status_code(), 200);

    let body: Value = response.json();
    assert!(body.get("storage").is_none());
    assert!(body.get("storage_error").is_none());
    assert_eq!(app.storage.upload_count(), 0);
    assert_eq!(app.saved_files().len(), 1);
}

#[tokio::test]
async fn test_incomplete_html_is_flagged_not_rejected() {
    let app = setup_test_app_with(TestOptions {
        reply: Ok("<div>not a page</div>".to_string()),
        bucket: None,
        ..Default::default()
    })
    .await;

    let response = app
        .client()
        .post("/generate-brand-content")
        .json(&acme_request())
        .await;
    assert_eq!(response.status_code(), 200);

    let body: Value = response.json();
    assert_eq!(body["html_valid"], false);
    assert_eq!(body["html_content"], "<div>not a page</div>");
}

#[tokio::test]
async fn test_preview_returns_html_without_persisting() {
    let app = setup_test_app().await;

    let response = app
        .client()
        .post("/generate-brand-content-preview")
        .json(&acme_request())
        .await;
    assert_eq!(response.status_code(), 200);

    let content_type = response.header("content-type");
    assert!(content_type.to_str().unwrap().starts_with("text/html"));
    assert_eq!(response.text(), PAGE);

    assert!(app.saved_files().is_empty());
    assert_eq!(app.storage.upload_count(), 0);
}

#[tokio::test]
async fn test_preview_validates_parameters() {
    let app = setup_test_app().await;

    let mut request = acme_request();
    request["design_style"] = json!("brutalist");

    let response = app
        .client()
        .post("/generate-brand-content-preview")
        .json(&request)
        .await;
    assert_eq!(response.status_code(), 400);

    let body: Value = response.json();
    assert_eq!(body["field"], "design_style");
}

#[tokio::test]
async fn test_openapi_document_is_served() {
    let app = setup_test_app().await;

    let response = app.client().get("/api/openapi.json").await;
    assert_eq!(response.status_code(), 200);

    let body: Value = response.json();
    assert!(body["paths"]["/generate-brand-content"].is_object());
}
