//! JSON file implementation of the `SnapshotRepository` trait.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::debug;

use stockroom_core::error::PersistenceError;
use stockroom_core::repository::{Snapshot, SnapshotRepository};

/// Stores the snapshot as one pretty-printed JSON document.
///
/// Saves go to a sibling `.tmp` file which is synced and then renamed over the
/// target, so a crash mid-write leaves the previous snapshot intact.
#[derive(Debug, Clone)]
pub struct JsonFileSnapshotRepository {
    path: PathBuf,
}

impl JsonFileSnapshotRepository {
    /// Creates a repository backed by the file at `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The snapshot file location.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(std::ffi::OsStr::to_os_string)
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

fn io_err(path: &Path, source: std::io::Error) -> PersistenceError {
    PersistenceError::Io {
        path: path.to_path_buf(),
        source,
    }
}

async fn write_synced(path: &Path, bytes: &[u8]) -> Result<(), PersistenceError> {
    let mut file = fs::File::create(path).await.map_err(|err| io_err(path, err))?;
    file.write_all(bytes).await.map_err(|err| io_err(path, err))?;
    file.sync_all().await.map_err(|err| io_err(path, err))
}

#[async_trait]
impl SnapshotRepository for JsonFileSnapshotRepository {
    async fn load(&self) -> Result<Option<Snapshot>, PersistenceError> {
        let bytes = match fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(io_err(&self.path, err)),
        };

        let snapshot: Snapshot = serde_json::from_slice(&bytes).map_err(|err| {
            PersistenceError::Corrupt(format!("{}: {err}", self.path.display()))
        })?;
        debug!(path = %self.path.display(), "loaded snapshot");
        Ok(Some(snapshot))
    }

    async fn save(&self, snapshot: &Snapshot) -> Result<(), PersistenceError> {
        let json = serde_json::to_vec_pretty(snapshot).map_err(PersistenceError::Encode)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .map_err(|err| io_err(parent, err))?;
        }

        let tmp_path = self.temp_path();
        let written = match write_synced(&tmp_path, &json).await {
            Ok(()) => fs::rename(&tmp_path, &self.path)
                .await
                .map_err(|err| io_err(&self.path, err)),
            Err(err) => Err(err),
        };
        if let Err(err) = written {
            if let Err(cleanup) = fs::remove_file(&tmp_path).await {
                debug!(
                    path = %tmp_path.display(),
                    error = %cleanup,
                    "could not remove temp snapshot"
                );
            }
            return Err(err);
        }
        debug!(path = %self.path.display(), bytes = json.len(), "saved snapshot");
        Ok(())
    }
}
