//! JSON file implementation of the snapshot repository.

use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::domain::aggregate::AggregateState;
use crate::domain::repositories::{SnapshotError, SnapshotRepository};

/// Stores the aggregate as a pretty-printed JSON document on disk.
///
/// Saves write a sibling `*.tmp` file and rename it over the target, so a
/// crash mid-write leaves the previous snapshot intact.
pub struct JsonFileSnapshotRepository {
    path: PathBuf,
}

impl JsonFileSnapshotRepository {
    /// Creates a repository backed by the file at `path`.
    ///
    /// The file does not need to exist yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "snapshot".into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

#[async_trait]
impl SnapshotRepository for JsonFileSnapshotRepository {
    async fn load(&self) -> Result<Option<AggregateState>, SnapshotError> {
        let raw = match fs::read(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let state = serde_json::from_slice(&raw)?;
        Ok(Some(state))
    }

    async fn save(&self, state: &AggregateState) -> Result<(), SnapshotError> {
        let payload = serde_json::to_vec_pretty(state)?;

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).await?;
        }

        let tmp = self.temp_path();
        fs::write(&tmp, payload).await?;
        fs::rename(&tmp, &self.path).await?;

        Ok(())
    }
}
