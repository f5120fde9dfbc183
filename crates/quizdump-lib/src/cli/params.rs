use crate::config::DownloadPreferences;
use crate::download::SyncOptions;
use crate::manifest::Credentials;
use reqwest::Url;
use std::path::PathBuf;

/// Everything a dump run needs, resolved once at startup.
#[derive(Debug, Clone)]
pub struct DumpParams {
    pub credentials: Credentials,
    pub preferences: DownloadPreferences,
    pub output_dir: PathBuf,
    pub endpoint: Url,
    pub client_type: String,
    pub sync_options: SyncOptions,
}
