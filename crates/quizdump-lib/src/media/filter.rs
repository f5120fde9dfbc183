use crate::config::{DownloadPreferences, MediaTypePreference, QualityPreference};
use crate::manifest::{MediaItem, MediaKind, MediaQuality};

/// The media items a run will process, in manifest order, with their combined size.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MediaSelection {
    pub items: Vec<MediaItem>,
    pub total_size: u64,
}

impl MediaSelection {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

pub fn matches_preferences(item: &MediaItem, preferences: &DownloadPreferences) -> bool {
    let quality_matches = match preferences.quality {
        QualityPreference::High => item.quality != MediaQuality::Low,
        QualityPreference::Low => item.quality != MediaQuality::High,
        QualityPreference::Both => true,
    };
    let media_type_matches = match preferences.media_type {
        MediaTypePreference::Image => item.media_type == MediaKind::QuestionImage,
        MediaTypePreference::Video => item.media_type == MediaKind::QuestionVideo,
        MediaTypePreference::Both => true,
    };

    quality_matches && media_type_matches
}

pub fn select_media(
    items: impl IntoIterator<Item = MediaItem>,
    preferences: &DownloadPreferences,
) -> MediaSelection {
    let items: Vec<MediaItem> = items
        .into_iter()
        .filter(|item| matches_preferences(item, preferences))
        .collect();
    let total_size = items.iter().map(|item| item.size).sum();

    MediaSelection { items, total_size }
}
