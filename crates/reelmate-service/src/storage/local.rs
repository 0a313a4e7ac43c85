//! Local-disk media storage
//!
//! Writes uploads into a directory that the HTTP layer serves statically and
//! returns `{base_url}/{file_name}`.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use reelmate_common::StorageConfig;
use reelmate_core::{DomainError, MediaStorage, RepoResult};
use tracing::{debug, error, instrument};

#[derive(Debug, Clone)]
pub struct LocalMediaStorage {
    root: PathBuf,
    base_url: String,
}

impl LocalMediaStorage {
    pub fn new(root: impl Into<PathBuf>, base_url: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(config: &StorageConfig) -> Self {
        Self::new(&config.upload_dir, &config.media_base_url)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

/// A single path component without traversal or hidden-file tricks
fn is_safe_file_name(name: &str) -> bool {
    !name.is_empty()
        && !name.starts_with('.')
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
}

#[async_trait]
impl MediaStorage for LocalMediaStorage {
    #[instrument(skip(self, bytes), fields(size = bytes.len()))]
    async fn upload(&self, bytes: Vec<u8>, file_name: &str) -> RepoResult<String> {
        if !is_safe_file_name(file_name) {
            return Err(DomainError::StorageError(format!(
                "refusing to store file named {file_name:?}"
            )));
        }

        tokio::fs::create_dir_all(&self.root).await.map_err(|e| {
            error!(error = %e, root = %self.root.display(), "Cannot create upload directory");
            DomainError::StorageError(e.to_string())
        })?;

        let path = self.root.join(file_name);
        tokio::fs::write(&path, bytes).await.map_err(|e| {
            error!(error = %e, path = %path.display(), "Upload write failed");
            DomainError::StorageError(e.to_string())
        })?;

        debug!(path = %path.display(), "Upload stored");
        Ok(format!("{}/{}", self.base_url, file_name))
    }
}
