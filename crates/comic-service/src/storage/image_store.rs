//! Filesystem store for comic cover images
//!
//! Images are written under the public web root and referenced by a
//! root-relative URL of the form `/images/{name}`. Names combine the upload
//! timestamp with a random suffix so concurrent uploads never collide.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use chrono::Utc;
use rand::distributions::Alphanumeric;
use rand::Rng;
use tracing::{debug, warn};

use comic_common::{AppError, AppResult};

/// Extensions accepted for cover uploads
pub const ALLOWED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png"];

/// Length of the random filename suffix
const NAME_SUFFIX_LEN: usize = 10;

/// An uploaded cover image, decoded from a multipart field
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub bytes: Vec<u8>,
    pub extension: String,
}

impl ImageUpload {
    /// Validate the extension against the accepted set
    pub fn validate(&self) -> AppResult<()> {
        let ext = self.extension.to_ascii_lowercase();
        if !ALLOWED_EXTENSIONS.contains(&ext.as_str()) {
            return Err(AppError::Validation(format!(
                "Unsupported image type: {ext}"
            )));
        }
        Ok(())
    }
}

/// Filesystem-backed image store
#[derive(Debug, Clone)]
pub struct ImageStore {
    images_dir: PathBuf,
    max_bytes: usize,
}

impl ImageStore {
    /// Create a store rooted at the given images directory, rejecting uploads
    /// larger than `max_bytes`
    pub fn new(images_dir: impl Into<PathBuf>, max_bytes: usize) -> Self {
        Self {
            images_dir: images_dir.into(),
            max_bytes,
        }
    }

    /// Write an upload to disk and return its public URL
    pub async fn store(&self, upload: &ImageUpload) -> AppResult<String> {
        upload.validate()?;

        if upload.bytes.len() > self.max_bytes {
            return Err(AppError::Validation(format!(
                "Image exceeds the maximum upload size of {} bytes",
                self.max_bytes
            )));
        }

        tokio::fs::create_dir_all(&self.images_dir)
            .await
            .map_err(|e| AppError::Storage(format!("Failed to create images dir: {e}")))?;

        let name = Self::generate_name(&upload.extension);
        let path = self.images_dir.join(&name);

        tokio::fs::write(&path, &upload.bytes)
            .await
            .map_err(|e| AppError::Storage(format!("Failed to write image: {e}")))?;

        debug!(name = %name, size = upload.bytes.len(), "Stored cover image");

        Ok(format!("/images/{name}"))
    }

    /// Remove a previously stored image by its public URL
    ///
    /// Missing files are ignored so a delete retried after a partial failure
    /// still succeeds. URLs outside `/images/` are rejected.
    pub async fn delete(&self, image_url: &str) -> AppResult<()> {
        let Some(name) = image_url.strip_prefix("/images/") else {
            return Err(AppError::Storage(format!(
                "Refusing to delete non-image path: {image_url}"
            )));
        };

        // Stored names never contain separators
        if name.contains('/') || name.contains("..") {
            return Err(AppError::Storage(format!(
                "Refusing to delete non-image path: {image_url}"
            )));
        }

        let path = self.images_dir.join(name);
        match tokio::fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                warn!(url = %image_url, "Image already removed");
                Ok(())
            }
            Err(e) => Err(AppError::Storage(format!("Failed to delete image: {e}"))),
        }
    }

    /// Directory this store writes into
    pub fn images_dir(&self) -> &Path {
        &self.images_dir
    }

    fn generate_name(extension: &str) -> String {
        let suffix: String = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(NAME_SUFFIX_LEN)
            .map(char::from)
            .collect();
        let ext = extension.to_ascii_lowercase();
        format!("{}_{suffix}.{ext}", Utc::now().timestamp())
    }
}
