//! Media storage port
//!
//! Binary video data never touches the database. It is handed to a storage
//! backend which returns the public URL that gets persisted on the post.

use async_trait::async_trait;

use super::repositories::RepoResult;

#[async_trait]
pub trait MediaStorage: Send + Sync {
    /// Store `bytes` under `file_name` and return the URL it is served from
    async fn upload(&self, bytes: Vec<u8>, file_name: &str) -> RepoResult<String>;
}
