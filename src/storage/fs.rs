//! Filesystem storage backend.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tokio::io::AsyncWriteExt;

use crate::error::{Result, Web2TxtError};
use crate::storage::Storage;

/// Storage backend that writes UTF-8 text files to the local filesystem.
///
/// Names are joined onto the base directory; an absolute name replaces it.
/// Parent directories must already exist.
///
/// # Example
///
/// ```rust,no_run
/// use web2txt::FsStorage;
///
/// let here = FsStorage::default();
/// let archive = FsStorage::new("/var/data/pages");
/// ```
#[derive(Clone, Debug, Default)]
pub struct FsStorage {
    base_dir: PathBuf,
}

impl FsStorage {
    /// Create a new `FsStorage` rooted at the given directory.
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    fn resolve(&self, name: &str) -> PathBuf {
        self.base_dir.join(name)
    }
}

fn map_io_error(path: &Path, source: std::io::Error) -> Web2TxtError {
    if source.kind() == ErrorKind::PermissionDenied {
        Web2TxtError::PermissionDenied {
            path: path.to_path_buf(),
        }
    } else {
        Web2TxtError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

impl Storage for FsStorage {
    async fn put(&self, name: &str, text: &str) -> Result<PathBuf> {
        let path = self.resolve(name);

        // The handle is dropped, and the file closed, on every return path.
        let mut file = tokio::fs::File::create(&path)
            .await
            .map_err(|e| map_io_error(&path, e))?;
        file.write_all(text.as_bytes())
            .await
            .map_err(|e| map_io_error(&path, e))?;
        file.flush().await.map_err(|e| map_io_error(&path, e))?;

        tracing::debug!("Wrote {} bytes to {}", text.len(), path.display());
        Ok(path)
    }
}
