//! Storage trait abstraction.

use async_trait::async_trait;
use taskman_core::Task;

/// Error type for storage operations.
pub type Result<T> = std::result::Result<T, StorageError>;

/// Errors that can occur during storage operations.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Other error
    #[error("{0}")]
    Other(String),
}

/// Storage abstraction for the task collection.
///
/// This trait allows different storage backends to be plugged in. The
/// contract is whole-collection: `load` returns every persisted task and
/// `save` replaces the entire collection. There is no per-task update at
/// this layer; callers read the snapshot, modify it, and write it back.
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// Load the full task collection. Absent backing data is an empty
    /// collection; data that exists but cannot be parsed is an error.
    async fn load(&self) -> Result<Vec<Task>>;

    /// Replace the full task collection.
    async fn save(&self, tasks: &[Task]) -> Result<()>;
}
