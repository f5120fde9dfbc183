use super::Config;
use crate::error::QuizDumpError;
use config::{Config as ConfigBuilder, Environment, Map};
use std::path::Path;

pub const ENV_PREFIX: &str = "QUIZDUMP";

pub fn load_config(config_path: Option<&Path>) -> Result<Config, QuizDumpError> {
    load_config_from(config_path, std::env::vars())
}

fn load_config_from(
    config_path: Option<&Path>,
    vars: impl IntoIterator<Item = (String, String)>,
) -> Result<Config, QuizDumpError> {
    let mut builder = ConfigBuilder::builder();
    if let Some(config_path) = config_path {
        builder = builder.add_source(config::File::from(config_path));
    }

    let config_builder = builder
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .try_parsing(true)
                .source(Some(recognised_env_vars(vars))),
        )
        .build()?;

    config_builder.try_deserialize().map_err(Into::into)
}

/// Keeps the `QUIZDUMP_*` variables that name a config key. Other variables sharing the prefix
/// are logged and ignored so they cannot abort the run.
fn recognised_env_vars(vars: impl IntoIterator<Item = (String, String)>) -> Map<String, String> {
    let prefix = format!("{ENV_PREFIX}_");

    vars.into_iter()
        .filter(|(key, _)| {
            let Some(name) = key.strip_prefix(&prefix) else {
                return false;
            };
            let recognised = Config::FIELDS.contains(&name.to_ascii_lowercase().as_str());
            if !recognised {
                tracing::warn!(variable = %key, "Ignoring unrecognised environment variable");
            }
            recognised
        })
        .collect()
}
