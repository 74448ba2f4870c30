//! Task model - the unit of work tracked by the planner.

use crate::id::TaskId;
use serde::{Deserialize, Serialize};

/// A task in the planner's collection.
///
/// Serialized with camelCase field names so the persisted file format and
/// the tool output format stay stable across restarts.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Unique identifier
    pub id: TaskId,

    /// Task title
    pub title: String,

    /// Detailed description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Due date (ISO local date), caller-supplied and not validated
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,

    /// Whether the task has been completed
    #[serde(default)]
    pub completed: bool,

    /// Creation date (ISO local date)
    pub created_at: String,
}

impl Task {
    /// Create a pending task with a fresh id, dated today.
    pub fn new(
        title: impl Into<String>,
        description: Option<String>,
        due_date: Option<String>,
    ) -> Self {
        Self {
            id: TaskId::new(),
            title: title.into(),
            description,
            due_date,
            completed: false,
            created_at: chrono::Local::now().date_naive().to_string(),
        }
    }
}

/// Filter for querying tasks.
#[derive(Debug, Clone, Copy, Default)]
pub struct TaskFilter {
    /// Keep only tasks whose completion flag matches
    pub completed: Option<bool>,
}

impl TaskFilter {
    /// Whether the task passes this filter.
    pub fn matches(&self, task: &Task) -> bool {
        self.completed.map_or(true, |completed| task.completed == completed)
    }
}

/// Compact task view returned by listing operations.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskSummary {
    /// Unique identifier
    pub id: TaskId,

    /// Task title
    pub title: String,

    /// Whether the task has been completed
    pub completed: bool,

    /// Due date, when one was set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
}

impl From<&Task> for TaskSummary {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id,
            title: task.title.clone(),
            completed: task.completed,
            due_date: task.due_date.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_task_is_pending() {
        let task = Task::new("Buy milk", None, None);
        assert!(!task.completed);
        assert_eq!(task.title, "Buy milk");
        assert!(task.description.is_none());
        assert!(task.due_date.is_none());
        assert!(!task.created_at.is_empty());
    }

    #[test]
    fn test_new_tasks_get_distinct_ids() {
        let a = Task::new("a", None, None);
        let b = Task::new("b", None, None);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_filter_unset_matches_everything() {
        let mut task = Task::new("t", None, None);
        let filter = TaskFilter::default();
        assert!(filter.matches(&task));
        task.completed = true;
        assert!(filter.matches(&task));
    }

    #[test]
    fn test_filter_by_completion() {
        let mut task = Task::new("t", None, None);
        let pending_only = TaskFilter { completed: Some(false) };
        let completed_only = TaskFilter { completed: Some(true) };

        assert!(pending_only.matches(&task));
        assert!(!completed_only.matches(&task));

        task.completed = true;
        assert!(!pending_only.matches(&task));
        assert!(completed_only.matches(&task));
    }

    #[test]
    fn test_summary_omits_absent_due_date() {
        let task = Task::new("t", None, None);
        let json = serde_json::to_value(TaskSummary::from(&task)).unwrap();
        assert!(json.get("dueDate").is_none());
        assert_eq!(json["title"], "t");
        assert_eq!(json["completed"], false);
    }

    #[test]
    fn test_summary_carries_due_date_when_set() {
        let task = Task::new("t", None, Some("2025-12-24".to_string()));
        let json = serde_json::to_value(TaskSummary::from(&task)).unwrap();
        assert_eq!(json["dueDate"], "2025-12-24");
    }

    #[test]
    fn test_task_serializes_camel_case() {
        let task = Task::new("t", Some("desc".to_string()), Some("2025-01-01".to_string()));
        let json = serde_json::to_value(&task).unwrap();
        assert!(json.get("dueDate").is_some());
        assert!(json.get("createdAt").is_some());
        assert!(json.get("due_date").is_none());
    }

    #[test]
    fn test_task_deserializes_with_defaults() {
        // Files written before a task was completed may omit the flag.
        let task: Task = serde_json::from_str(
            r#"{"id":"abcdef12-1111-4111-8111-111111111111","title":"t","createdAt":"2025-01-01"}"#,
        )
        .unwrap();
        assert!(!task.completed);
        assert!(task.description.is_none());
    }
}
