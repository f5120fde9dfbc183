use quizdump_lib::cli::{DumpCommand, DumpParams, resolve_command};
use serde_json::{Value, json};
use std::path::Path;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub use quizdump_lib::verification::md5_base64;

pub const MANIFEST_PATH: &str = "/api/GetData";

/// A media entry as the provider lists it inside a group.
pub fn media_entry(id: u64, url: &str, content: &[u8]) -> Value {
    json!({
        "id": id,
        "url": url,
        "hash": md5_base64(content),
        "size": content.len(),
    })
}

pub fn media_group(quality: &str, media_type: &str, entries: Vec<Value>) -> Value {
    json!({
        "quality": quality,
        "mediaType": media_type,
        "mediaItems": entries,
    })
}

pub fn manifest_body(groups: Vec<Value>) -> Value {
    json!({
        "questionList": {
            "questions": [
                { "id": 1, "number": "1.1.01-001", "points": 4 },
                { "id": 2, "number": "1.1.01-002", "points": 3 }
            ]
        },
        "questionTextLists": [
            { "languageKey": "DE", "texts": [{ "questionId": 1, "text": "Frage" }] },
            { "languageKey": "EN", "texts": [{ "questionId": 1, "text": "Question" }] }
        ],
        "mediaItemCacheList": { "mediaItemLists": groups },
        "resultCode": 0
    })
}

/// Serves `content` at `url_path` on the mock server.
pub async fn mount_media(server: &MockServer, url_path: &str, content: &[u8], expected_calls: u64) {
    Mock::given(method("GET"))
        .and(path(url_path))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(content.to_vec()))
        .expect(expected_calls)
        .mount(server)
        .await;
}

pub async fn mount_manifest(server: &MockServer, status: u16, body: Value) {
    Mock::given(method("POST"))
        .and(path(MANIFEST_PATH))
        .respond_with(ResponseTemplate::new(status).set_body_json(body))
        .mount(server)
        .await;
}

/// Resolves a dump run against `server` writing below `output_dir`.
pub fn dump_params(
    server: &MockServer,
    output_dir: &Path,
    quality: Option<&str>,
    media_types: Option<&str>,
) -> DumpParams {
    let command = DumpCommand {
        email: Some("driver@example.com".to_string()),
        password: Some("s3cret&more".to_string()),
        quality: quality.map(str::to_string),
        media_types: media_types.map(str::to_string),
        directory: Some(output_dir.to_string_lossy().into_owned()),
        endpoint: Some(format!("{}{}", server.uri(), MANIFEST_PATH)),
        ..DumpCommand::default()
    };
    resolve_command(command).expect("Failed to resolve dump command")
}

pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter("quizdump_lib=debug,quizdump_e2e_tests=debug")
        .with_test_writer()
        .try_init()
        .ok();
}
