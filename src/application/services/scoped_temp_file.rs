use std::io;
use std::path::{Path, PathBuf};

use tempfile::{Builder, TempPath};

/// A uniquely named temporary file that is deleted when the guard drops.
///
/// The file exists on disk from construction until drop (or `close`), so
/// external tools can be pointed at `path()` while the guard is alive.
#[derive(Debug)]
pub struct ScopedTempFile {
    path: TempPath,
}

impl ScopedTempFile {
    pub fn new(suffix: &str) -> io::Result<Self> {
        Ok(Self::create(
            Builder::new().prefix("tolka-").suffix(suffix).tempfile()?,
        ))
    }

    pub fn new_in(dir: &Path, suffix: &str) -> io::Result<Self> {
        Ok(Self::create(
            Builder::new()
                .prefix("tolka-")
                .suffix(suffix)
                .tempfile_in(dir)?,
        ))
    }

    /// Acquires a file in `dir` when given, otherwise in the system temp dir.
    pub fn acquire(dir: Option<&Path>, suffix: &str) -> io::Result<Self> {
        match dir {
            Some(dir) => Self::new_in(dir, suffix),
            None => Self::new(suffix),
        }
    }

    fn create(file: tempfile::NamedTempFile) -> Self {
        let path = file.into_temp_path();
        tracing::debug!(path = %path.display(), "Temporary file acquired");
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn to_path_buf(&self) -> PathBuf {
        self.path.to_path_buf()
    }

    /// Deletes the file now, surfacing any I/O error instead of logging it.
    pub fn close(self) -> io::Result<()> {
        let shown = self.path.display().to_string();
        self.path.close()?;
        tracing::debug!(path = %shown, "Temporary file deleted");
        Ok(())
    }
}
