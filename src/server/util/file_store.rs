//! Storage for uploaded attraction images.
//!
//! Attractions keep relative paths into the upload directory. Purging is best effort:
//! callers use [`purge_files`], which logs failures and never returns them.

use async_trait::async_trait;
use std::{
    io,
    path::{Component, Path, PathBuf},
};

#[async_trait]
pub trait FileStore: Send + Sync {
    /// Removes the file stored under `path`.
    async fn purge_file(&self, path: &str) -> io::Result<()>;
}

/// File store rooted at a local upload directory.
pub struct LocalFileStore {
    root: PathBuf,
}

impl LocalFileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Maps a stored path onto the upload root.
    ///
    /// Leading slashes are ignored; `..` and other non-normal components are rejected.
    fn resolve(&self, path: &str) -> io::Result<PathBuf> {
        let relative = Path::new(path.trim_start_matches('/'));

        let escapes_root = relative
            .components()
            .any(|component| !matches!(component, Component::Normal(_) | Component::CurDir));
        if escapes_root || relative.as_os_str().is_empty() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("Refusing to purge path outside upload directory: {}", path),
            ));
        }

        Ok(self.root.join(relative))
    }
}

#[async_trait]
impl FileStore for LocalFileStore {
    async fn purge_file(&self, path: &str) -> io::Result<()> {
        let full_path = self.resolve(path)?;

        tokio::fs::remove_file(full_path).await
    }
}

/// Purges every path, logging failures at `warn`.
pub async fn purge_files(store: &dyn FileStore, paths: &[String]) {
    for path in paths {
        if let Err(e) = store.purge_file(path).await {
            tracing::warn!("Failed to purge file {}: {}", path, e);
        }
    }
}
