use super::types::{SyncOptions, SyncReport};
use crate::error::QuizDumpError;
use crate::manifest::MediaItem;
use crate::media::{MediaSelection, media_destination};
use crate::verification::{ContentDigestVerifier, VerificationError, verify_file};
use eyre::WrapErr;
use indicatif::ProgressBar;
use reqwest::Client;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Brings `<output_dir>/media` in line with `selection`, one item at a time.
///
/// Files that already exist are trusted unless `options.verify_existing` is set. A digest
/// mismatch on a fresh download aborts the whole sync before anything is written for that item.
/// `progress` is sized to the selection's total byte count before the first item.
pub async fn sync_media(
    client: &Client,
    selection: &MediaSelection,
    output_dir: &Path,
    options: SyncOptions,
    progress: &ProgressBar,
) -> Result<SyncReport, QuizDumpError> {
    progress.set_length(selection.total_size);
    let mut report = SyncReport::default();

    for item in &selection.items {
        let output_path = media_destination(output_dir, item)?;
        tracing::trace!(id = %item.id, url = %item.url, output = %output_path.display(), "Checking");

        if output_path.exists() {
            if !options.verify_existing
                || verify_file(&output_path, &item.hash)
                    .await
                    .wrap_err_with(|| {
                        format!("Failed to read existing file: {}", output_path.display())
                    })?
            {
                tracing::debug!(id = %item.id, output = %output_path.display(), "File exists, skipping download");
                report.skipped += 1;
                progress.inc(item.size);
                continue;
            }

            tracing::warn!(id = %item.id, output = %output_path.display(), "File exists with incorrect digest, deleting");
            tokio::fs::remove_file(&output_path)
                .await
                .map_err(|e| QuizDumpError::OutputWrite {
                    path: output_path.clone(),
                    reason: format!("Failed to delete file with incorrect digest: {}", e),
                })?;
            report.replaced += 1;
        }

        tracing::debug!(id = %item.id, url = %item.url, expected_digest = %item.hash, "Downloading");
        let content = fetch_verified(client, item).await?;
        write_media(&output_path, &content).await?;

        tracing::debug!(id = %item.id, output = %output_path.display(), "Downloaded and verified");
        report.downloaded += 1;
        report.bytes_downloaded += content.len() as u64;
        progress.inc(item.size);
    }

    Ok(report)
}

/// Downloads the whole item into memory and checks it against the manifest digest.
pub async fn fetch_verified(client: &Client, item: &MediaItem) -> Result<Vec<u8>, QuizDumpError> {
    let mut response = client.get(&item.url).send().await?.error_for_status()?;

    let mut verifier = ContentDigestVerifier::new(item.hash.as_str());
    let mut content = Vec::new();
    while let Some(chunk) = response.chunk().await? {
        verifier.update(&chunk);
        content.extend_from_slice(&chunk);
    }

    verifier.verify().map_err(|err| match err {
        VerificationError::VerificationFailed { expected, actual } => {
            QuizDumpError::MediaVerification {
                id: item.id.to_string(),
                expected,
                actual,
            }
        }
    })?;

    Ok(content)
}

fn partial_path(output_path: &Path) -> PathBuf {
    let mut name = OsString::from(output_path.as_os_str());
    name.push(".part");
    PathBuf::from(name)
}

/// Writes next to the destination and renames into place, so an interrupted write never
/// leaves a file at `output_path`.
async fn write_media(output_path: &Path, content: &[u8]) -> Result<(), QuizDumpError> {
    let output_write_error = |e: std::io::Error| QuizDumpError::OutputWrite {
        path: output_path.to_path_buf(),
        reason: e.to_string(),
    };

    if let Some(parent) = output_path.parent() {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(output_write_error)?;
    }

    let part_path = partial_path(output_path);
    tokio::fs::write(&part_path, content)
        .await
        .map_err(output_write_error)?;
    tokio::fs::rename(&part_path, output_path)
        .await
        .map_err(output_write_error)?;

    Ok(())
}
