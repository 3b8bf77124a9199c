//! Text intake from uploaded files and speech recognition
//!
//! Only plain text is read here. Document formats need an extraction
//! collaborator and are rejected with `UnsupportedInputFormat`.

use std::path::Path;

use tokio::fs;

use super::translator::types::{cap_chars, MAX_INPUT_CHARS};
use crate::shared::error::{AppError, AppResult};

const PLAIN_TEXT_EXTENSIONS: &[&str] = &["txt", "text", "md"];

/// Read a plain-text upload, capped to `max_chars` (at most 5000).
pub async fn read_text_file(path: &Path, max_chars: usize) -> AppResult<String> {
    match path.extension().and_then(|e| e.to_str()) {
        None => {}
        Some(ext) if PLAIN_TEXT_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()) => {}
        Some(ext) => {
            return Err(AppError::UnsupportedInputFormat(format!(
                "Cannot extract text from .{} files",
                ext
            )));
        }
    }

    let bytes = fs::read(path).await?;
    let text = String::from_utf8(bytes).map_err(|_| {
        AppError::UnsupportedInputFormat(format!("{} is not UTF-8 text", path.display()))
    })?;

    let limit = max_chars.min(MAX_INPUT_CHARS);
    let capped = cap_chars(&text, limit);
    if capped.len() < text.len() {
        tracing::info!("[Ingest] {} truncated to {} characters", path.display(), limit);
    }
    Ok(capped.to_string())
}

/// Accept a speech-recognition result as input text.
pub fn accept_transcript(transcript: &str, max_chars: usize) -> String {
    cap_chars(transcript.trim(), max_chars.min(MAX_INPUT_CHARS)).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_reads_plain_text() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("note.TXT");
        tokio::fs::write(&path, "Hello, world!").await.unwrap();

        let text = read_text_file(&path, MAX_INPUT_CHARS).await.unwrap();
        assert_eq!(text, "Hello, world!");
    }

    #[tokio::test]
    async fn test_caps_long_files() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("long.txt");
        tokio::fs::write(&path, "b".repeat(MAX_INPUT_CHARS * 2)).await.unwrap();

        let text = read_text_file(&path, usize::MAX).await.unwrap();
        assert_eq!(text.chars().count(), MAX_INPUT_CHARS);
    }

    #[tokio::test]
    async fn test_rejects_documents() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["report.pdf", "letter.docx"] {
            let path = dir.path().join(name);
            tokio::fs::write(&path, b"%PDF-1.7").await.unwrap();
            let result = read_text_file(&path, MAX_INPUT_CHARS).await;
            assert!(matches!(result, Err(AppError::UnsupportedInputFormat(_))), "{}", name);
        }
    }

    #[tokio::test]
    async fn test_rejects_binary_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("blob");
        tokio::fs::write(&path, [0xffu8, 0xfe, 0x00]).await.unwrap();
        let result = read_text_file(&path, MAX_INPUT_CHARS).await;
        assert!(matches!(result, Err(AppError::UnsupportedInputFormat(_))));
    }

    #[tokio::test]
    async fn test_missing_file_is_io_error() {
        let result = read_text_file(Path::new("/definitely/not/here.txt"), 10).await;
        assert!(matches!(result, Err(AppError::Io(_))));
    }

    #[test]
    fn test_transcript_is_trimmed_and_capped() {
        assert_eq!(accept_transcript("  hello there \n", 100), "hello there");
        assert_eq!(accept_transcript("abcdef", 4), "abcd");
    }
}
