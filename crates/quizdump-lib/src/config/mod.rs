mod loader;
mod model;

pub use loader::{ENV_PREFIX, load_config};
pub use model::{
    Config, DownloadPreferences, InvalidPreference, MediaTypePreference, QualityPreference,
};

pub const DEFAULT_ENDPOINT: &str = "https://inetcore.fahren-lernen.de/api/GetData";
pub const DEFAULT_CLIENT_TYPE: &str = "Web;Windows 10";
pub const DEFAULT_DIRECTORY: &str = "dump";
