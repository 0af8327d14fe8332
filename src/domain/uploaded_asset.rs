use bytes::Bytes;

/// An upload received from a client, owned by the request handling it.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadedAsset {
    pub filename: String,
    pub content_type: String,
    pub data: Bytes,
}

impl UploadedAsset {
    pub fn new(filename: impl Into<String>, content_type: impl Into<String>, data: Bytes) -> Self {
        Self {
            filename: filename.into(),
            content_type: content_type.into(),
            data,
        }
    }

    /// Lowercase text after the final `.` of the filename, if any.
    pub fn extension(&self) -> Option<String> {
        file_extension(&self.filename)
    }

    pub fn size_bytes(&self) -> u64 {
        self.data.len() as u64
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

pub fn file_extension(filename: &str) -> Option<String> {
    let (_, ext) = filename.rsplit_once('.')?;
    if ext.is_empty() {
        return None;
    }
    Some(ext.to_ascii_lowercase())
}
