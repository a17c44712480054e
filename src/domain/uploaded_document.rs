use std::path::Path;

use serde::Serialize;

/// File formats accepted as syllabus uploads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SupportedFormat {
    Pdf,
    Docx,
    Txt,
}

impl SupportedFormat {
    pub fn from_filename(filename: &str) -> Option<Self> {
        let extension = Path::new(filename).extension()?.to_str()?;
        match extension.to_ascii_lowercase().as_str() {
            "pdf" => Some(Self::Pdf),
            "docx" => Some(Self::Docx),
            "txt" => Some(Self::Txt),
            _ => None,
        }
    }

    pub fn as_mime(&self) -> &'static str {
        match self {
            Self::Pdf => "application/pdf",
            Self::Docx => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
            Self::Txt => "text/plain",
        }
    }
}

/// Reference to a file held by the external indexing service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UploadedDocument {
    /// Opaque vendor handle, e.g. `files/abc123`.
    pub handle: String,
    pub uri: String,
    pub mime_type: String,
    pub display_name: String,
}

impl UploadedDocument {
    pub fn new(handle: String, uri: String, mime_type: String, display_name: String) -> Self {
        Self {
            handle,
            uri,
            mime_type,
            display_name,
        }
    }
}
