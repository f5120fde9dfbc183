use crate::cli::args::DumpCommand;
use crate::cli::params::DumpParams;
use crate::config::{
    DEFAULT_CLIENT_TYPE, DEFAULT_DIRECTORY, DEFAULT_ENDPOINT, DownloadPreferences,
    MediaTypePreference, QualityPreference, load_config,
};
use crate::download::SyncOptions;
use crate::error::QuizDumpError;
use crate::manifest::Credentials;
use reqwest::Url;
use std::path::{Path, PathBuf};

/// Validates the command line and merges it with the configuration file, environment and
/// defaults. Nothing here touches the network.
pub fn resolve_command(command: DumpCommand) -> Result<DumpParams, QuizDumpError> {
    let DumpCommand {
        email,
        password,
        quality,
        media_types,
        directory,
        config_path,
        endpoint,
        client_type,
        verify_existing,
    } = command;

    let email = non_empty(email).ok_or(QuizDumpError::MissingCredential {
        name: "email",
        env: "EMAIL",
    })?;
    let password = non_empty(password).ok_or(QuizDumpError::MissingCredential {
        name: "password",
        env: "PASSWORD",
    })?;

    let app_config = load_config(config_path.as_deref().map(Path::new))?;

    let quality = match quality {
        Some(quality) => quality.parse::<QualityPreference>().map_err(|e| {
            QuizDumpError::CliArgumentValidation {
                details: e.to_string(),
            }
        })?,
        None => app_config.quality.unwrap_or_default(),
    };

    let media_type = match media_types {
        Some(media_types) => media_types.parse::<MediaTypePreference>().map_err(|e| {
            QuizDumpError::CliArgumentValidation {
                details: e.to_string(),
            }
        })?,
        None => app_config.media_types.unwrap_or_default(),
    };

    let output_dir = directory
        .map(PathBuf::from)
        .or(app_config.directory)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DIRECTORY));

    let endpoint = endpoint
        .or(app_config.endpoint)
        .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
    let endpoint = Url::parse(&endpoint).map_err(|e| QuizDumpError::CliArgumentValidation {
        details: format!("Invalid endpoint URL {}: {}", endpoint, e),
    })?;

    let client_type = client_type
        .or(app_config.client_type)
        .unwrap_or_else(|| DEFAULT_CLIENT_TYPE.to_string());

    Ok(DumpParams {
        credentials: Credentials { email, password },
        preferences: DownloadPreferences {
            quality,
            media_type,
        },
        output_dir,
        endpoint,
        client_type,
        sync_options: SyncOptions {
            verify_existing: verify_existing || app_config.verify_existing.unwrap_or(false),
        },
    })
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.is_empty())
}
