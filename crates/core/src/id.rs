//! Unique identifiers for TaskMan entities.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a Task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TaskId(Uuid);

impl TaskId {
    /// Generate a new TaskId
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Whether this id's canonical hyphenated form starts with `prefix`.
    pub fn starts_with(&self, prefix: &str) -> bool {
        self.0.to_string().starts_with(prefix)
    }
}

impl Default for TaskId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl std::str::FromStr for TaskId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}
