use assert_fs::TempDir;
use assert_fs::prelude::*;
use predicates::prelude::*;
use quizdump_e2e_tests::{dump_params, init_tracing, manifest_body, mount_manifest};
use quizdump_lib::QuizDumpError;
use quizdump_lib::cli::run_dump;
use quizdump_lib::manifest::{Credentials, fetch_manifest};
use serde_json::json;
use wiremock::MockServer;

#[tokio::test]
async fn test_unauthorized_surfaces_message_and_writes_nothing() {
    init_tracing();

    let server = MockServer::start().await;
    mount_manifest(&server, 401, json!({ "message": "bad credentials" })).await;

    let temp_dir = TempDir::new().unwrap();
    let output_dir = temp_dir.child("dump");
    let err = run_dump(dump_params(&server, output_dir.path(), None, None))
        .await
        .expect_err("Dump should fail on 401");

    assert!(matches!(
        &err,
        QuizDumpError::Authentication { message } if message == "bad credentials"
    ));
    assert_eq!(err.to_string(), "Request error: bad credentials");
    output_dir.assert(predicate::path::missing());
}

#[tokio::test]
async fn test_result_code_without_message_is_an_api_error() {
    init_tracing();

    let server = MockServer::start().await;
    mount_manifest(&server, 500, json!({ "resultCode": 13 })).await;

    let temp_dir = TempDir::new().unwrap();
    let err = run_dump(dump_params(&server, temp_dir.path(), None, None))
        .await
        .expect_err("Dump should fail on 500");

    assert!(matches!(&err, QuizDumpError::Api { code } if code == "13"));
    assert_eq!(err.to_string(), "Request error: got 13");
}

#[tokio::test]
async fn test_malformed_manifest_writes_nothing() {
    init_tracing();

    let server = MockServer::start().await;
    let mut body = manifest_body(vec![]);
    body.as_object_mut().unwrap().remove("mediaItemCacheList");
    mount_manifest(&server, 200, body).await;

    let temp_dir = TempDir::new().unwrap();
    let output_dir = temp_dir.child("dump");
    let err = run_dump(dump_params(&server, output_dir.path(), None, None))
        .await
        .expect_err("Dump should fail on malformed manifest");

    assert!(matches!(err, QuizDumpError::MalformedManifest { .. }));
    output_dir.assert(predicate::path::missing());
}

#[tokio::test]
async fn test_fetch_manifest_returns_typed_payload() {
    init_tracing();

    let server = MockServer::start().await;
    mount_manifest(&server, 200, manifest_body(vec![])).await;

    let params = dump_params(&server, std::path::Path::new("unused"), None, None);
    let manifest = fetch_manifest(
        &reqwest::Client::new(),
        &params.endpoint,
        &params.client_type,
        &Credentials {
            email: "driver@example.com".to_string(),
            password: "s3cret".to_string(),
        },
    )
    .await
    .expect("Manifest fetch should succeed");

    assert_eq!(manifest.questions().len(), 2);
    assert_eq!(manifest.text_lists().len(), 2);
    assert!(manifest.media_items().unwrap().is_empty());
}
