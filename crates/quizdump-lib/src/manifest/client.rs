use super::types::Manifest;
use crate::error::QuizDumpError;
use reqwest::{Client, StatusCode, Url};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GetDataRequest<'a> {
    get: GetDataSelection<'a>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GetDataSelection<'a> {
    question_list: bool,
    media_item_cache: bool,
    question_text_lists: bool,
    client_type: &'a str,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    result_code: Option<serde_json::Value>,
}

/// Authenticates with `credentials` and fetches the question, text and media manifest.
pub async fn fetch_manifest(
    client: &Client,
    endpoint: &Url,
    client_type: &str,
    credentials: &Credentials,
) -> Result<Manifest, QuizDumpError> {
    tracing::debug!(endpoint = %endpoint, email = %credentials.email, "Requesting manifest");

    let response = client
        .post(endpoint.clone())
        .query(&[
            ("Login", credentials.email.as_str()),
            ("Password", credentials.password.as_str()),
        ])
        .json(&GetDataRequest {
            get: GetDataSelection {
                question_list: true,
                media_item_cache: true,
                question_text_lists: true,
                client_type,
            },
        })
        .send()
        .await?;

    let status = response.status();
    let body = response.bytes().await?;

    if status != StatusCode::OK {
        return Err(api_error(status, &body));
    }

    tracing::debug!(bytes = body.len(), "Manifest received");
    Manifest::from_slice(&body)
}

fn api_error(status: StatusCode, body: &[u8]) -> QuizDumpError {
    let error_body: ErrorBody = serde_json::from_slice(body).unwrap_or_default();

    if let Some(message) = error_body.message.filter(|message| !message.is_empty()) {
        return QuizDumpError::Authentication { message };
    }

    let code = match error_body.result_code {
        Some(serde_json::Value::String(code)) => code,
        Some(code) => code.to_string(),
        None => status.to_string(),
    };
    QuizDumpError::Api { code }
}
