use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum QuizDumpError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Missing {name}. Pass --{name} or set the {env} environment variable.")]
    MissingCredential {
        name: &'static str,
        env: &'static str,
    },

    #[error("Invalid command line arguments: {details}")]
    CliArgumentValidation { details: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Request error: {message}")]
    Authentication { message: String },

    #[error("Request error: got {code}")]
    Api { code: String },

    #[error("Malformed manifest: {reason}")]
    MalformedManifest { reason: String },

    #[error("Failed to write {path}: {reason}")]
    OutputWrite { path: PathBuf, reason: String },

    #[error("Hash mismatch for media item {id}: expected {expected}, got {actual}")]
    MediaVerification {
        id: String,
        expected: String,
        actual: String,
    },

    #[error("JSON serialization/deserialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Unexpected error: {0}")]
    Unexpected(#[from] eyre::Report),
}
