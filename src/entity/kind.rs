//! File classification
//!
//! Derives a closed category from a mime type once, at ingestion time.

/// How a file can be previewed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewKind {
    Image,
    Video,
    Audio,
    Generic,
}

impl PreviewKind {
    pub fn from_mime(mime_type: &str) -> Self {
        FileKind::from_mime(mime_type).preview_kind()
    }
}

/// Display category of a file, used for listing icons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Image,
    Video,
    Audio,
    Pdf,
    Document,
    Spreadsheet,
    Other,
}

impl FileKind {
    /// Classify a mime type. Prefix checks win over substring checks, so
    /// `text/csv` is a document while `application/vnd.ms-excel` is a spreadsheet.
    ///
    /// Matching ignores ASCII case and surrounding whitespace: `IMAGE/PNG`
    /// is an image (RFC 2045 makes type and subtype case-insensitive).
    pub fn from_mime(mime_type: &str) -> Self {
        let mime = mime_type.trim().to_ascii_lowercase();

        if mime.starts_with("image/") {
            FileKind::Image
        } else if mime.starts_with("video/") {
            FileKind::Video
        } else if mime.starts_with("audio/") {
            FileKind::Audio
        } else if mime.contains("pdf") {
            FileKind::Pdf
        } else if mime.contains("document") || mime.contains("text") {
            FileKind::Document
        } else if mime.contains("spreadsheet") || mime.contains("excel") {
            FileKind::Spreadsheet
        } else {
            FileKind::Other
        }
    }

    pub fn preview_kind(self) -> PreviewKind {
        match self {
            FileKind::Image => PreviewKind::Image,
            FileKind::Video => PreviewKind::Video,
            FileKind::Audio => PreviewKind::Audio,
            _ => PreviewKind::Generic,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FileKind::Image => "image",
            FileKind::Video => "video",
            FileKind::Audio => "audio",
            FileKind::Pdf => "pdf",
            FileKind::Document => "doc",
            FileKind::Spreadsheet => "sheet",
            FileKind::Other => "file",
        }
    }
}
