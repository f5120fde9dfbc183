mod filter;
mod path;

pub use filter::{MediaSelection, matches_preferences, select_media};
pub use path::{
    MEDIA_DIR_NAME, PathCollision, file_name_from_url, find_path_collisions, media_destination,
};
