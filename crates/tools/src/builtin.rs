//! Built-in tools (task planner, GitHub lookup).

use super::r#trait::{parse_args, Tool, ToolError};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use taskman_core::{Task, TaskFilter, TaskSummary};
use taskman_storage::TaskStore;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AddTaskArgs {
    title: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    due_date: Option<String>,
}

/// Create a new task in the store.
pub struct AddTaskTool {
    store: Arc<dyn TaskStore>,
}

impl AddTaskTool {
    /// Create the tool over the given store.
    pub fn new(store: Arc<dyn TaskStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl Tool for AddTaskTool {
    fn name(&self) -> &str {
        "add_task"
    }

    fn description(&self) -> &str {
        "Add a new household task"
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "title": {"type": "string", "description": "Task title"},
                "description": {"type": "string", "description": "Detailed description"},
                "dueDate": {"type": "string", "format": "date", "description": "Due date"}
            },
            "required": ["title"]
        })
    }

    async fn call(&self, arguments: Value) -> Result<Value, ToolError> {
        let args: AddTaskArgs = parse_args(arguments)?;
        if args.title.trim().is_empty() {
            return Err(ToolError::InvalidArgument(
                "title must not be empty".to_string(),
            ));
        }

        let mut tasks = self.store.load().await?;
        let task = Task::new(args.title, args.description, args.due_date);
        let title = task.title.clone();
        tasks.push(task);
        self.store.save(&tasks).await?;

        Ok(json!({
            "status": "success",
            "message": format!("Task '{}' added", title)
        }))
    }
}

#[derive(Debug, Deserialize)]
struct ListTasksArgs {
    #[serde(default)]
    completed: Option<bool>,
}

/// List tasks, optionally filtered by completion state.
pub struct ListTasksTool {
    store: Arc<dyn TaskStore>,
}

impl ListTasksTool {
    /// Create the tool over the given store.
    pub fn new(store: Arc<dyn TaskStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl Tool for ListTasksTool {
    fn name(&self) -> &str {
        "list_tasks"
    }

    fn description(&self) -> &str {
        "List all tasks (completed or pending)"
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "completed": {
                    "type": "boolean",
                    "description": "Keep only tasks with this completion state"
                }
            }
        })
    }

    async fn call(&self, arguments: Value) -> Result<Value, ToolError> {
        let args: ListTasksArgs = parse_args(arguments)?;
        let filter = TaskFilter {
            completed: args.completed,
        };

        let tasks = self.store.load().await?;
        let summaries: Vec<TaskSummary> = tasks
            .iter()
            .filter(|task| filter.matches(task))
            .map(TaskSummary::from)
            .collect();

        Ok(json!({ "tasks": summaries }))
    }
}

#[derive(Debug, Deserialize)]
struct MarkCompletedArgs {
    id: String,
}

/// Flip a task's completion flag to true.
pub struct MarkCompletedTool {
    store: Arc<dyn TaskStore>,
}

impl MarkCompletedTool {
    /// Create the tool over the given store.
    pub fn new(store: Arc<dyn TaskStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl Tool for MarkCompletedTool {
    fn name(&self) -> &str {
        "mark_completed"
    }

    fn description(&self) -> &str {
        "Mark a task as completed, by exact id or unique id prefix"
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "id": {"type": "string", "description": "Task id or id prefix"}
            },
            "required": ["id"]
        })
    }

    async fn call(&self, arguments: Value) -> Result<Value, ToolError> {
        let args: MarkCompletedArgs = parse_args(arguments)?;
        if args.id.trim().is_empty() {
            return Err(ToolError::InvalidArgument("id must not be empty".to_string()));
        }

        let mut tasks = self.store.load().await?;

        // Exact id wins; otherwise the first task in stored order whose id
        // starts with the given prefix.
        let position = tasks
            .iter()
            .position(|task| task.id.to_string() == args.id)
            .or_else(|| tasks.iter().position(|task| task.id.starts_with(&args.id)));

        let Some(position) = position else {
            return Err(ToolError::NotFound(format!(
                "No task matches id '{}'",
                args.id
            )));
        };

        let task = &mut tasks[position];
        if task.completed {
            return Ok(json!({
                "status": "already_completed",
                "message": format!("Task '{}' is already completed", task.title)
            }));
        }

        task.completed = true;
        let title = task.title.clone();
        self.store.save(&tasks).await?;

        Ok(json!({
            "status": "success",
            "message": format!("Task '{}' marked as completed", title)
        }))
    }
}

#[derive(Debug, Deserialize)]
struct GithubUserArgs {
    username: String,
}

/// Subset of the GitHub user profile surfaced to callers.
#[derive(Debug, Deserialize)]
struct GithubUser {
    login: String,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    bio: Option<String>,
    public_repos: u64,
}

/// Look up a GitHub user profile by login.
pub struct GithubUserTool {
    client: reqwest::Client,
}

impl GithubUserTool {
    /// Create the tool with a fresh HTTP client.
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

impl Default for GithubUserTool {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Tool for GithubUserTool {
    fn name(&self) -> &str {
        "get_github_user"
    }

    fn description(&self) -> &str {
        "Fetch a GitHub user profile by login"
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "username": {"type": "string", "description": "GitHub login"}
            },
            "required": ["username"]
        })
    }

    async fn call(&self, arguments: Value) -> Result<Value, ToolError> {
        let args: GithubUserArgs = parse_args(arguments)?;

        // The GitHub API rejects requests without a User-Agent.
        let user: GithubUser = self
            .client
            .get(format!("https://api.github.com/users/{}", args.username))
            .header(reqwest::header::USER_AGENT, "taskman-mcp")
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(json!({
            "login": user.login,
            "name": user.name,
            "bio": user.bio,
            "publicRepos": user.public_repos
        }))
    }
}
