use super::types::{Manifest, TextList};
use crate::error::QuizDumpError;
use serde::Serialize;
use std::path::{Path, PathBuf};

pub const QUESTIONS_FILE_NAME: &str = "questions.json";

pub fn text_list_file_name(text_list: &TextList) -> String {
    format!(
        "questionTexts-{}.json",
        text_list.language_key.to_lowercase()
    )
}

/// Writes the question list to `questions.json` below `output_dir`, creating the directory.
pub fn save_questions(manifest: &Manifest, output_dir: &Path) -> Result<PathBuf, QuizDumpError> {
    ensure_dir(output_dir)?;
    let path = output_dir.join(QUESTIONS_FILE_NAME);
    write_json(&path, manifest.questions())?;
    tracing::info!("Saved {} questions to {}", manifest.questions().len(), path.display());
    Ok(path)
}

pub fn save_text_lists(
    manifest: &Manifest,
    output_dir: &Path,
) -> Result<Vec<PathBuf>, QuizDumpError> {
    ensure_dir(output_dir)?;
    manifest
        .text_lists()
        .iter()
        .map(|text_list| {
            let path = output_dir.join(text_list_file_name(text_list));
            write_json(&path, text_list)?;
            tracing::debug!(language = %text_list.language_key, path = %path.display(), "Saved texts");
            Ok(path)
        })
        .collect()
}

fn ensure_dir(dir: &Path) -> Result<(), QuizDumpError> {
    std::fs::create_dir_all(dir).map_err(|e| QuizDumpError::OutputWrite {
        path: dir.to_path_buf(),
        reason: e.to_string(),
    })
}

fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<(), QuizDumpError> {
    let json = serde_json::to_string(value).map_err(|e| QuizDumpError::OutputWrite {
        path: path.to_path_buf(),
        reason: format!("JSON serialization failed: {}", e),
    })?;
    std::fs::write(path, json).map_err(|e| QuizDumpError::OutputWrite {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}
