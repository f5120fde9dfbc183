mod client;
mod persist;
mod types;

pub use client::{Credentials, fetch_manifest};
pub use persist::{QUESTIONS_FILE_NAME, save_questions, save_text_lists, text_list_file_name};
pub use types::{
    Manifest, MediaItem, MediaItemCacheList, MediaItemEntry, MediaItemGroup, MediaItemId,
    MediaKind, MediaQuality, Question, QuestionList, TextList,
};
