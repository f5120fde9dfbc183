#[allow(clippy::module_inception)]
mod download;
mod types;

pub use download::{fetch_verified, sync_media};
pub use types::{SyncOptions, SyncReport};
