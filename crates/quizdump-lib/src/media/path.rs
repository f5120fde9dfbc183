use crate::error::QuizDumpError;
use crate::manifest::MediaItem;
use itertools::Itertools;
use std::path::{Path, PathBuf};
use url::Url;

pub const MEDIA_DIR_NAME: &str = "media";

/// Last path segment of a media URL, as it appears in the URL.
pub fn file_name_from_url(url: &str) -> Result<String, QuizDumpError> {
    let parsed = Url::parse(url).map_err(|e| QuizDumpError::MalformedManifest {
        reason: format!("Invalid media URL {}: {}", url, e),
    })?;

    parsed
        .path_segments()
        .and_then(|mut segments| segments.next_back())
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .ok_or_else(|| QuizDumpError::MalformedManifest {
            reason: format!("Media URL has no file name: {}", url),
        })
}

/// `<output_dir>/media/<quality>/<file name from url>`
pub fn media_destination(output_dir: &Path, item: &MediaItem) -> Result<PathBuf, QuizDumpError> {
    Ok(output_dir
        .join(MEDIA_DIR_NAME)
        .join(item.quality.as_path_component())
        .join(file_name_from_url(&item.url)?))
}

/// Items with different content that resolve to the same destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathCollision {
    pub path: PathBuf,
    pub ids: Vec<String>,
}

pub fn find_path_collisions(
    output_dir: &Path,
    items: &[MediaItem],
) -> Result<Vec<PathCollision>, QuizDumpError> {
    let destinations = items
        .iter()
        .map(|item| Ok((media_destination(output_dir, item)?, item)))
        .collect::<Result<Vec<_>, QuizDumpError>>()?;

    let collisions = destinations
        .into_iter()
        .into_group_map()
        .into_iter()
        .filter(|(_, group)| group.iter().map(|item| &item.hash).unique().count() > 1)
        .map(|(path, group)| PathCollision {
            path,
            ids: group.iter().map(|item| item.id.to_string()).collect(),
        })
        .sorted_by(|a, b| a.path.cmp(&b.path))
        .collect();

    Ok(collisions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::{MediaItemId, MediaKind, MediaQuality};

    fn item(id: u64, url: &str, hash: &str, quality: MediaQuality) -> MediaItem {
        MediaItem {
            id: MediaItemId::Number(id),
            url: url.to_string(),
            hash: hash.to_string(),
            size: 1,
            media_type: MediaKind::QuestionImage,
            quality,
        }
    }

    #[test]
    fn test_file_name_from_url() {
        assert_eq!(file_name_from_url("https://x/y/a.jpg").unwrap(), "a.jpg");
        assert_eq!(
            file_name_from_url("https://cdn.example.com/media/v2/clip.mp4?token=abc").unwrap(),
            "clip.mp4"
        );
    }

    #[test]
    fn test_file_name_from_url_rejects_directory_urls() {
        let err = file_name_from_url("https://x/y/").unwrap_err();
        assert!(matches!(err, QuizDumpError::MalformedManifest { .. }));
    }

    #[test]
    fn test_file_name_from_url_rejects_garbage() {
        assert!(file_name_from_url("not a url").is_err());
    }

    #[test]
    fn test_media_destination_uses_quality_directory() {
        let high = item(1, "https://x/y/a.jpg", "h", MediaQuality::High);
        let low = item(2, "https://x/y/a.jpg", "h", MediaQuality::Low);

        assert_eq!(
            media_destination(Path::new("dump"), &high).unwrap(),
            PathBuf::from("dump/media/high/a.jpg")
        );
        assert_eq!(
            media_destination(Path::new("dump"), &low).unwrap(),
            PathBuf::from("dump/media/low/a.jpg")
        );
    }

    #[test]
    fn test_find_path_collisions_reports_differing_content() {
        let items = vec![
            item(1, "https://x/one/a.jpg", "hash-a", MediaQuality::High),
            item(2, "https://x/two/a.jpg", "hash-b", MediaQuality::High),
            item(3, "https://x/one/b.jpg", "hash-c", MediaQuality::High),
        ];

        let collisions = find_path_collisions(Path::new("dump"), &items).unwrap();

        assert_eq!(
            collisions,
            vec![PathCollision {
                path: PathBuf::from("dump/media/high/a.jpg"),
                ids: vec!["1".to_string(), "2".to_string()],
            }]
        );
    }

    #[test]
    fn test_find_path_collisions_ignores_identical_content_and_other_qualities() {
        let items = vec![
            item(1, "https://x/one/a.jpg", "same", MediaQuality::High),
            item(2, "https://x/two/a.jpg", "same", MediaQuality::High),
            item(3, "https://x/one/a.jpg", "other", MediaQuality::Low),
        ];

        assert!(
            find_path_collisions(Path::new("dump"), &items)
                .unwrap()
                .is_empty()
        );
    }
}
