//! Disk storage for uploaded asset files.
//!
//! Every upload gets a fresh `<ulid>_<name>` file under the upload
//! directory. Files are opened with create-new semantics, so an existing
//! file is never overwritten.

use std::path::{Path, PathBuf};

use tokio::io::AsyncWriteExt;

use crate::error::AppError;
use crate::models::generate_ulid;

/// URL prefix and `file_path` prefix of stored uploads.
pub const UPLOADS_MOUNT: &str = "uploads";

/// Name used when an upload's filename sanitizes to nothing.
const FALLBACK_NAME: &str = "upload";

/// Location of a stored upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredFile {
    /// Public relative path, `uploads/<stored name>`.
    pub file_path: String,
    /// Where the bytes were written.
    pub disk_path: PathBuf,
}

/// Writes uploaded bytes under a root directory.
#[derive(Debug, Clone)]
pub struct AssetStore {
    root: PathBuf,
}

impl AssetStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The directory files are written to and served from.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Creates the root directory if absent.
    pub async fn ensure_root(&self) -> Result<(), AppError> {
        tokio::fs::create_dir_all(&self.root).await?;
        Ok(())
    }

    /// Persists `bytes` under a unique name derived from `original_filename`.
    pub async fn store(
        &self,
        bytes: &[u8],
        original_filename: &str,
    ) -> Result<StoredFile, AppError> {
        self.ensure_root().await?;

        let stored_name = format!("{}_{}", generate_ulid(), sanitize_filename(original_filename));
        let disk_path = self.root.join(&stored_name);

        let mut file = tokio::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&disk_path)
            .await?;
        file.write_all(bytes).await?;
        file.flush().await?;

        tracing::debug!(path = %disk_path.display(), size = bytes.len(), "Stored upload");

        Ok(StoredFile {
            file_path: format!("{}/{}", UPLOADS_MOUNT, stored_name),
            disk_path,
        })
    }
}

/// Reduces a client-supplied filename to its final path component.
///
/// Both `/` and `\` count as separators; `.` and `..` are dropped.
fn sanitize_filename(name: &str) -> String {
    let last = name
        .rsplit(|c: char| c == '/' || c == '\\')
        .next()
        .unwrap_or_default()
        .trim();

    match last {
        "" | "." | ".." => FALLBACK_NAME.to_string(),
        other => other.to_string(),
    }
}
