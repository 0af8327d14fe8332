use super::uploaded_asset::file_extension;

/// Containers accepted by the video endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VideoFormat {
    Mp4,
    Mkv,
    Webm,
    Avi,
}

impl VideoFormat {
    pub fn from_mime(mime: &str) -> Option<Self> {
        let essence = mime.split(';').next().unwrap_or_default().trim();
        match essence.to_ascii_lowercase().as_str() {
            "video/mp4" => Some(Self::Mp4),
            "video/x-matroska" | "video/mkv" => Some(Self::Mkv),
            "video/webm" => Some(Self::Webm),
            "video/x-msvideo" | "video/avi" | "video/msvideo" => Some(Self::Avi),
            _ => None,
        }
    }

    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "mp4" => Some(Self::Mp4),
            "mkv" => Some(Self::Mkv),
            "webm" => Some(Self::Webm),
            "avi" => Some(Self::Avi),
            _ => None,
        }
    }

    /// Resolves the declared content type, falling back to the filename
    /// extension for generic binary uploads.
    pub fn detect(content_type: &str, filename: &str) -> Option<Self> {
        if let Some(format) = Self::from_mime(content_type) {
            return Some(format);
        }
        let generic = content_type.is_empty()
            || content_type.starts_with("application/octet-stream");
        if generic {
            return file_extension(filename).and_then(|ext| Self::from_extension(&ext));
        }
        None
    }

    pub fn as_suffix(&self) -> &'static str {
        match self {
            Self::Mp4 => ".mp4",
            Self::Mkv => ".mkv",
            Self::Webm => ".webm",
            Self::Avi => ".avi",
        }
    }
}
