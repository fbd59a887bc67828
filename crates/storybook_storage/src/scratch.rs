//! Filesystem scratch store with drop-guarded artifacts.
//!
//! Layout: `{base_path}/{request_id}/page_{index}.{ext}`

use std::path::{Path, PathBuf};
use storybook_error::{StorageError, StorageErrorKind, StorybookResult};
use uuid::Uuid;

/// Identifies one staged image: which request, which page.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
#[display("{}/page_{}.{}", request_id, page, extension)]
pub struct ArtifactKey {
    request_id: Uuid,
    page: usize,
    extension: &'static str,
}

impl ArtifactKey {
    /// Key for page `page` of request `request_id`.
    pub fn new(request_id: Uuid, page: usize, extension: &'static str) -> Self {
        Self {
            request_id,
            page,
            extension,
        }
    }

    /// Request this artifact belongs to.
    pub fn request_id(&self) -> Uuid {
        self.request_id
    }

    /// Zero-based page index.
    pub fn page(&self) -> usize {
        self.page
    }

    fn file_name(&self) -> String {
        format!("page_{}.{}", self.page, self.extension)
    }
}

/// Directory that holds staged artifacts while a document is assembled.
#[derive(Debug, Clone)]
pub struct ScratchStore {
    base_path: PathBuf,
}

impl ScratchStore {
    /// Create a scratch store rooted at `base_path`.
    ///
    /// Creates the base directory if it doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns error if the directory cannot be created.
    #[tracing::instrument(skip(base_path))]
    pub fn new(base_path: impl Into<PathBuf>) -> StorybookResult<Self> {
        let base_path = base_path.into();

        std::fs::create_dir_all(&base_path).map_err(|e| {
            StorageError::new(StorageErrorKind::DirectoryCreation(format!(
                "{}: {}",
                base_path.display(),
                e
            )))
        })?;

        tracing::debug!(path = %base_path.display(), "Created scratch store");
        Ok(Self { base_path })
    }

    /// Scratch store under the OS temp directory.
    ///
    /// # Errors
    ///
    /// Returns error if the directory cannot be created.
    pub fn in_temp_dir() -> StorybookResult<Self> {
        Self::new(std::env::temp_dir().join("storybook"))
    }

    /// Root directory of the store.
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Where the artifact for `key` lives.
    pub fn path_for(&self, key: &ArtifactKey) -> PathBuf {
        self.base_path
            .join(key.request_id.to_string())
            .join(key.file_name())
    }

    /// Write `data` under `key` and return a guard that removes it on drop.
    ///
    /// # Errors
    ///
    /// Returns error if the request directory or the file cannot be written.
    #[tracing::instrument(skip(self, data), fields(key = %key, size = data.len()))]
    pub async fn stage(&self, key: &ArtifactKey, data: &[u8]) -> StorybookResult<StagedArtifact> {
        let path = self.path_for(key);
        let dir = path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| self.base_path.clone());

        tokio::fs::create_dir_all(&dir).await.map_err(|e| {
            StorageError::new(StorageErrorKind::DirectoryCreation(format!(
                "{}: {}",
                dir.display(),
                e
            )))
        })?;

        // The guard exists before the write so a partial file is still cleaned up.
        let staged = StagedArtifact { path, dir };
        tokio::fs::write(&staged.path, data).await.map_err(|e| {
            StorageError::new(StorageErrorKind::FileWrite(format!(
                "{}: {}",
                staged.path.display(),
                e
            )))
        })?;

        tracing::debug!(path = %staged.path.display(), "Staged artifact");
        Ok(staged)
    }
}

/// A staged file that is deleted when the guard goes out of scope.
#[derive(Debug)]
pub struct StagedArtifact {
    path: PathBuf,
    dir: PathBuf,
}

impl StagedArtifact {
    /// Location of the staged file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the staged bytes back.
    ///
    /// # Errors
    ///
    /// Returns error if the file is missing or unreadable.
    pub async fn read(&self) -> StorybookResult<Vec<u8>> {
        tokio::fs::read(&self.path).await.map_err(|e| {
            let kind = if e.kind() == std::io::ErrorKind::NotFound {
                StorageErrorKind::NotFound(self.path.display().to_string())
            } else {
                StorageErrorKind::FileRead(format!("{}: {}", self.path.display(), e))
            };
            StorageError::new(kind).into()
        })
    }
}

impl Drop for StagedArtifact {
    fn drop(&mut self) {
        match std::fs::remove_file(&self.path) {
            Ok(()) => tracing::debug!(path = %self.path.display(), "Removed staged artifact"),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => tracing::warn!(
                path = %self.path.display(),
                error = %e,
                "Failed to remove staged artifact"
            ),
        }
        // Succeeds only once the last page of the request is gone.
        let _ = std::fs::remove_dir(&self.dir);
    }
}
