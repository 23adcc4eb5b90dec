// src/fs/detection.rs
//! File type detection using magic numbers and extension-based fallback.

use std::{fmt, path::Path};

use anyhow::{Context, Result};
use infer::{Infer, MatcherType};
use mime_guess::MimeGuess;

/// High-level file categories, one icon slot each.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum FileCategory {
    Image,
    Audio,
    Video,
    Document,
    Binary,
}

impl FileCategory {
    pub const fn as_str(self) -> &'static str {
        match self {
            FileCategory::Image => "Image",
            FileCategory::Audio => "Audio",
            FileCategory::Video => "Video",
            FileCategory::Document => "Document",
            FileCategory::Binary => "Binary",
        }
    }

    /// Category for an extension-guessed MIME type. Only known document
    /// formats under `application/` count as documents.
    fn from_mime(top: &str, sub: &str) -> Self {
        match (top, sub) {
            ("image", _) => FileCategory::Image,
            ("audio", _) => FileCategory::Audio,
            ("video", _) => FileCategory::Video,
            ("text", _) => FileCategory::Document,
            ("application", sub) if is_document_subtype(sub) => FileCategory::Document,
            _ => FileCategory::Binary,
        }
    }
}

impl fmt::Display for FileCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn is_document_subtype(sub: &str) -> bool {
    matches!(sub, "pdf" | "json" | "xml" | "rtf" | "msword")
        || sub.starts_with("vnd.openxmlformats-")
        || sub.starts_with("vnd.oasis.opendocument.")
}

/// Holds a detected MIME type + category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileType {
    pub mime: String,
    pub category: FileCategory,
}

/// Detect MIME type & category for a given file path.
pub fn detect_file_type(path: &Path) -> Result<FileType> {
    let sniffed = Infer::new()
        .get_from_path(path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    if let Some(kind) = sniffed {
        let category = match kind.matcher_type() {
            MatcherType::Image => FileCategory::Image,
            MatcherType::Audio => FileCategory::Audio,
            MatcherType::Video => FileCategory::Video,
            MatcherType::Doc | MatcherType::Text | MatcherType::Book => FileCategory::Document,
            _ => FileCategory::Binary,
        };
        tracing::debug!(path = %path.display(), mime = kind.mime_type(), "sniffed file type");
        return Ok(FileType {
            mime: kind.mime_type().to_string(),
            category,
        });
    }

    let (mime, category) = match MimeGuess::from_path(path).first() {
        Some(mime) => {
            let category = FileCategory::from_mime(mime.type_().as_str(), mime.subtype().as_str());
            (mime.to_string(), category)
        }
        None => ("application/octet-stream".to_string(), FileCategory::Binary),
    };
    tracing::debug!(path = %path.display(), %mime, "guessed file type from extension");

    Ok(FileType { mime, category })
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    const PNG_MAGIC: &[u8] = &[0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a];

    fn file_with(suffix: &str, bytes: &[u8]) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(bytes).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn magic_number_wins_over_extension() {
        let file = file_with(".txt", PNG_MAGIC);
        let kind = detect_file_type(file.path()).unwrap();
        assert_eq!(kind.category, FileCategory::Image);
        assert_eq!(kind.mime, "image/png");
    }

    #[test]
    fn falls_back_to_extension() {
        let file = file_with(".txt", b"just some words");
        let kind = detect_file_type(file.path()).unwrap();
        assert_eq!(kind.category, FileCategory::Document);
        assert_eq!(kind.mime, "text/plain");
    }

    #[test]
    fn unknown_extension_is_binary() {
        let file = file_with(".zzunknown", b"\x01\x02\x03");
        let kind = detect_file_type(file.path()).unwrap();
        assert_eq!(kind.category, FileCategory::Binary);
        assert_eq!(kind.mime, "application/octet-stream");
    }

    #[test]
    fn known_application_types_are_binary() {
        for (suffix, mime) in [
            (".bin", "application/octet-stream"),
            (".zip", "application/zip"),
            (".wasm", "application/wasm"),
        ] {
            let file = file_with(suffix, b"\x01\x02\x03\x04");
            let kind = detect_file_type(file.path()).unwrap();
            assert_eq!(kind.mime, mime, "{suffix}");
            assert_eq!(kind.category, FileCategory::Binary, "{suffix}");
        }
    }

    #[test]
    fn document_subtypes_are_documents() {
        let file = file_with(".json", b"\x01\x02\x03\x04");
        let kind = detect_file_type(file.path()).unwrap();
        assert_eq!(kind.mime, "application/json");
        assert_eq!(kind.category, FileCategory::Document);

        assert_eq!(FileCategory::from_mime("application", "pdf"), FileCategory::Document);
        assert_eq!(
            FileCategory::from_mime(
                "application",
                "vnd.openxmlformats-officedocument.wordprocessingml.document"
            ),
            FileCategory::Document
        );
        assert_eq!(FileCategory::from_mime("application", "x-executable"), FileCategory::Binary);
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(detect_file_type(&dir.path().join("gone.mp3")).is_err());
    }

    #[test]
    fn category_display() {
        assert_eq!(FileCategory::Audio.to_string(), "Audio");
    }
}
