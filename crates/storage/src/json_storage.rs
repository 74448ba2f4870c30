//! JSON file storage implementation.
//!
//! Persists the whole task collection as a single pretty-printed JSON
//! file. Writes go through a sibling temp file and a rename, so a failed
//! save never clobbers the previous collection and a reader never sees a
//! partially written one.

use super::{Result, TaskStore};
use std::path::{Path, PathBuf};
use taskman_core::Task;
use tokio::fs;
use tracing::debug;

/// File-based JSON storage backend.
pub struct JsonTaskStore {
    path: PathBuf,
}

impl JsonTaskStore {
    /// Create a store backed by the given file. The file (and its parent
    /// directories) are not created until the first `save`.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_os_string();
        name.push(".tmp");
        PathBuf::from(name)
    }
}

#[async_trait::async_trait]
impl TaskStore for JsonTaskStore {
    async fn load(&self) -> Result<Vec<Task>> {
        let text = match fs::read_to_string(&self.path).await {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        if text.trim().is_empty() {
            return Ok(Vec::new());
        }

        let tasks = serde_json::from_str(&text)?;
        Ok(tasks)
    }

    async fn save(&self, tasks: &[Task]) -> Result<()> {
        let json = serde_json::to_string_pretty(tasks)?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await?;
            }
        }

        let tmp = self.tmp_path();
        fs::write(&tmp, json.as_bytes()).await?;
        fs::rename(&tmp, &self.path).await?;

        debug!("Saved {} tasks to {}", tasks.len(), self.path.display());
        Ok(())
    }
}
