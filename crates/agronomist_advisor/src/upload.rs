//! Scoped storage for uploaded images.

use agronomist_error::{UploadError, UploadErrorKind};
use std::path::{Path, PathBuf};
use tracing::{debug, instrument, warn};

/// Prefix prepended to the uploaded filename.
pub const TEMP_PREFIX: &str = "temp_";

/// Accepted upload extensions, compared case-insensitively.
pub const ALLOWED_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];

/// An uploaded image written to `<dir>/temp_<original_name>`.
///
/// The file is removed when this value is dropped, on every exit path.
/// Names are not made unique: two concurrent uploads with the same
/// filename share a path.
#[derive(Debug)]
pub struct TempUpload {
    path: PathBuf,
}

impl TempUpload {
    /// Validate `original_name` and write `bytes` to the temp path.
    ///
    /// # Errors
    ///
    /// Fails if the name carries path components, has an unsupported
    /// extension, or the write fails.
    #[instrument(skip_all, fields(dir = %dir.display(), name = original_name, size = bytes.len()))]
    pub async fn create(
        dir: &Path,
        original_name: &str,
        bytes: &[u8],
    ) -> Result<Self, UploadError> {
        let path = Self::temp_path(dir, original_name)?;

        tokio::fs::write(&path, bytes)
            .await
            .map_err(|e| UploadError::new(UploadErrorKind::Io(e.to_string())))?;

        debug!(path = %path.display(), "Staged upload");
        Ok(Self { path })
    }

    /// Where an upload named `original_name` would be staged.
    pub fn temp_path(dir: &Path, original_name: &str) -> Result<PathBuf, UploadError> {
        let name = original_name;
        if name.trim().is_empty()
            || name == "."
            || name == ".."
            || name.contains(['/', '\\'])
            || name.contains('\0')
        {
            return Err(UploadError::new(UploadErrorKind::InvalidFilename(
                original_name.to_string(),
            )));
        }

        let extension = Path::new(name)
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();
        if !ALLOWED_EXTENSIONS.contains(&extension.as_str()) {
            return Err(UploadError::new(UploadErrorKind::UnsupportedExtension(
                extension,
            )));
        }

        Ok(dir.join(format!("{TEMP_PREFIX}{name}")))
    }

    /// Path of the staged file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for TempUpload {
    // Drop cannot await, so removal is a blocking call.
    fn drop(&mut self) {
        match std::fs::remove_file(&self.path) {
            Ok(()) => debug!(path = %self.path.display(), "Removed staged upload"),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => warn!(path = %self.path.display(), error = %e, "Failed to remove staged upload"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_written_then_removed_on_drop() {
        let dir = tempfile::tempdir().unwrap();
        let upload = TempUpload::create(dir.path(), "leaf.JPG", b"bytes").await.unwrap();

        assert_eq!(upload.path(), dir.path().join("temp_leaf.JPG"));
        assert_eq!(std::fs::read(upload.path()).unwrap(), b"bytes");

        let path = upload.path().to_path_buf();
        drop(upload);
        assert!(!path.exists());
    }

    #[test]
    fn test_rejects_bad_names() {
        let dir = Path::new("/tmp");
        for name in ["", "..", "../etc/passwd.png", "a\\b.jpg", "leaf.gif", "leaf"] {
            assert!(TempUpload::temp_path(dir, name).is_err(), "{name} accepted");
        }
        assert!(TempUpload::temp_path(dir, "leaf.jpeg").is_ok());
        assert!(TempUpload::temp_path(dir, "Leaf.PNG").is_ok());
    }

    #[test]
    fn test_staged_name_keeps_original_verbatim() {
        let dir = Path::new("uploads");
        assert_eq!(
            TempUpload::temp_path(dir, " leaf.jpg").unwrap(),
            dir.join("temp_ leaf.jpg")
        );
        assert!(TempUpload::temp_path(dir, "   ").is_err());
    }

    #[test]
    fn test_unsupported_extension_kind() {
        let err = TempUpload::temp_path(Path::new("."), "leaf.webp").unwrap_err();
        assert_eq!(err.kind, UploadErrorKind::UnsupportedExtension("webp".into()));
    }

    #[tokio::test]
    async fn test_already_deleted_file_is_fine() {
        let dir = tempfile::tempdir().unwrap();
        let upload = TempUpload::create(dir.path(), "leaf.png", b"x").await.unwrap();
        std::fs::remove_file(upload.path()).unwrap();
        drop(upload);
    }
}
