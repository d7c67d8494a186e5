//! Images attached to analysis requests

use std::path::Path;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use nexus_core::prelude::*;

use crate::request::{InlineData, Part};

const DEFAULT_MIME_TYPE: &str = "image/jpeg";

/// A base64-encoded image ready to be sent inline
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineImage {
    pub mime_type: String,
    pub data: String,
    /// Where the image came from, for display
    pub label: String,
}

impl InlineImage {
    /// Accept either a `data:<mime>;base64,<payload>` URL or a bare base64 payload.
    pub fn from_data_url(input: &str) -> Self {
        let input = input.trim();
        match input.split_once(',') {
            Some((header, payload)) if !payload.is_empty() => {
                let mime_type = header
                    .strip_prefix("data:")
                    .and_then(|h| h.split(';').next())
                    .filter(|m| !m.is_empty())
                    .unwrap_or(DEFAULT_MIME_TYPE)
                    .to_string();
                Self {
                    mime_type,
                    data: payload.to_string(),
                    label: "inline image".to_string(),
                }
            }
            _ => Self {
                mime_type: DEFAULT_MIME_TYPE.to_string(),
                data: input.to_string(),
                label: "inline image".to_string(),
            },
        }
    }

    /// Read and encode an image file; the MIME type follows the extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path)?;
        if bytes.is_empty() {
            return Err(Error::generation(format!(
                "image file is empty: {}",
                path.display()
            )));
        }
        Ok(Self {
            mime_type: mime_for_path(path).to_string(),
            data: STANDARD.encode(bytes),
            label: path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string()),
        })
    }

    /// Load from a path, or treat the input as a data URL when it looks like one
    pub fn load(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        if trimmed.starts_with("data:") {
            Ok(Self::from_data_url(trimmed))
        } else {
            Self::from_path(Path::new(trimmed))
        }
    }

    pub fn to_part(&self) -> Part {
        Part::InlineData(InlineData {
            mime_type: self.mime_type.clone(),
            data: self.data.clone(),
        })
    }

    /// Approximate decoded size in bytes
    pub fn byte_len(&self) -> usize {
        self.data.len() / 4 * 3
    }
}

fn mime_for_path(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "heic" => "image/heic",
        _ => DEFAULT_MIME_TYPE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_data_url_extracts_mime_and_payload() {
        let img = InlineImage::from_data_url("data:image/png;base64,iVBORw0KGgo=");
        assert_eq!(img.mime_type, "image/png");
        assert_eq!(img.data, "iVBORw0KGgo=");
    }

    #[test]
    fn test_bare_payload_defaults_to_jpeg() {
        let img = InlineImage::from_data_url("/9j/4AAQSkZJRg==");
        assert_eq!(img.mime_type, "image/jpeg");
        assert_eq!(img.data, "/9j/4AAQSkZJRg==");
    }

    #[test]
    fn test_from_path_encodes_bytes() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("mock.PNG");
        std::fs::write(&path, [1u8, 2, 3]).unwrap();

        let img = InlineImage::from_path(&path).unwrap();
        assert_eq!(img.mime_type, "image/png");
        assert_eq!(img.data, "AQID");
        assert_eq!(img.label, "mock.PNG");
    }

    #[test]
    fn test_from_path_missing_file_is_io_error() {
        let err = InlineImage::from_path(Path::new("/definitely/not/here.jpg")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_from_path_rejects_empty_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("empty.jpg");
        std::fs::write(&path, b"").unwrap();
        assert!(InlineImage::from_path(&path).is_err());
    }

    #[test]
    fn test_load_dispatches_on_prefix() {
        let img = InlineImage::load("data:image/webp;base64,AAAA").unwrap();
        assert_eq!(img.mime_type, "image/webp");
    }
}
