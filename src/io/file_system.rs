//! Local file system access for import sources
//!
//! Uses tokio for non-blocking file access and wraps the tokio file in a
//! compatibility layer so csv-async can read it.

use crate::core::traits::FileSystem;
use crate::types::ImportError;
use std::io::ErrorKind;
use std::path::Path;
use tokio_util::compat::{Compat, TokioAsyncReadCompatExt};

/// [`FileSystem`] backed by the local disk
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFileSystem;

impl FileSystem for LocalFileSystem {
    type Reader = Compat<tokio::fs::File>;

    async fn open_read(&self, path: &Path) -> Result<Self::Reader, ImportError> {
        let file = tokio::fs::File::open(path).await.map_err(|e| match e.kind() {
            ErrorKind::NotFound => ImportError::file_not_found(path),
            _ => ImportError::Io {
                message: format!("Failed to open file '{}': {}", path.display(), e),
            },
        })?;

        Ok(file.compat())
    }

    async fn delete_file(&self, path: &Path) -> Result<(), ImportError> {
        tokio::fs::remove_file(path)
            .await
            .map_err(|e| ImportError::Io {
                message: format!("Failed to remove file '{}': {}", path.display(), e),
            })
    }
}
