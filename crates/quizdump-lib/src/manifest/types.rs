use crate::error::QuizDumpError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The provider's full data response, validated at deserialization time.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Manifest {
    pub question_list: QuestionList,
    pub question_text_lists: Vec<TextList>,
    pub media_item_cache_list: MediaItemCacheList,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct QuestionList {
    pub questions: Vec<Question>,
}

/// A single question. Its shape is owned by the provider and persisted as-is.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct Question(pub serde_json::Value);

/// Localized question texts for one language.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TextList {
    pub language_key: String,
    #[serde(flatten)]
    pub fields: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MediaItemCacheList {
    pub media_item_lists: Vec<MediaItemGroup>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum MediaQuality {
    High,
    Low,
}

impl MediaQuality {
    /// Lowercase name used as a directory component.
    pub fn as_path_component(self) -> &'static str {
        match self {
            MediaQuality::High => "high",
            MediaQuality::Low => "low",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum MediaKind {
    QuestionImage,
    QuestionVideo,
}

/// Media item identifiers are numeric in some payloads and strings in others.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(untagged)]
pub enum MediaItemId {
    Number(u64),
    Text(String),
}

impl fmt::Display for MediaItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MediaItemId::Number(id) => write!(f, "{id}"),
            MediaItemId::Text(id) => f.write_str(id),
        }
    }
}

/// A quality-tagged list of media items as it appears on the wire.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MediaItemGroup {
    pub quality: MediaQuality,
    #[serde(default)]
    pub media_type: Option<MediaKind>,
    pub media_items: Vec<MediaItemEntry>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MediaItemEntry {
    pub id: MediaItemId,
    pub url: String,
    pub hash: String,
    pub size: u64,
    #[serde(default)]
    pub media_type: Option<MediaKind>,
}

/// One downloadable asset, annotated with its group's quality tier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaItem {
    pub id: MediaItemId,
    pub url: String,
    /// Base64 encoded MD5 digest of the file content.
    pub hash: String,
    pub size: u64,
    pub media_type: MediaKind,
    pub quality: MediaQuality,
}

impl Manifest {
    pub fn from_slice(body: &[u8]) -> Result<Self, QuizDumpError> {
        serde_json::from_slice(body).map_err(|e| QuizDumpError::MalformedManifest {
            reason: e.to_string(),
        })
    }

    pub fn questions(&self) -> &[Question] {
        &self.question_list.questions
    }

    pub fn text_lists(&self) -> &[TextList] {
        &self.question_text_lists
    }

    pub fn media_item_groups(&self) -> &[MediaItemGroup] {
        &self.media_item_cache_list.media_item_lists
    }

    /// Flattens every group into a single sequence, preserving manifest order.
    pub fn media_items(&self) -> Result<Vec<MediaItem>, QuizDumpError> {
        self.media_item_groups()
            .iter()
            .flat_map(|group| group.media_items.iter().map(move |entry| (group, entry)))
            .map(|(group, entry)| {
                let media_type = entry.media_type.or(group.media_type).ok_or_else(|| {
                    QuizDumpError::MalformedManifest {
                        reason: format!("media item {} has no mediaType", entry.id),
                    }
                })?;

                Ok(MediaItem {
                    id: entry.id.clone(),
                    url: entry.url.clone(),
                    hash: entry.hash.clone(),
                    size: entry.size,
                    media_type,
                    quality: group.quality,
                })
            })
            .collect()
    }
}
