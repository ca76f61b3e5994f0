//! Image loading.

use agronomist_core::ContentPart;
use agronomist_error::{AgronomistError, AgronomistResult, NotFoundError, UploadError, UploadErrorKind};
use std::io::ErrorKind;
use std::path::Path;
use tracing::{debug, instrument};

/// MIME type reported for every uploaded image.
///
/// PNG uploads are labeled JPEG as well. Change this constant to fix that.
pub const IMAGE_MIME_TYPE: &str = "image/jpeg";

/// Read an image file into a content part.
///
/// The payload is the file's raw bytes; the MIME type is always
/// [`IMAGE_MIME_TYPE`]. The caller owns the file and its deletion.
///
/// # Errors
///
/// Returns [`NotFoundError`] if `path` does not exist, or an upload I/O error
/// if it exists but cannot be read.
#[instrument(skip_all, fields(path = %path.display()))]
pub async fn load_image(path: &Path) -> AgronomistResult<ContentPart> {
    let bytes = tokio::fs::read(path).await.map_err(|e| -> AgronomistError {
        match e.kind() {
            ErrorKind::NotFound => NotFoundError::new(path).into(),
            _ => UploadError::new(UploadErrorKind::Io(e.to_string())).into(),
        }
    })?;

    debug!(bytes = bytes.len(), "Loaded image");
    Ok(ContentPart::image(bytes, IMAGE_MIME_TYPE))
}
