// Task record stored by the local data source

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single to-do item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub title: String,
    pub description: String,
    pub completed: bool,
}

impl Task {
    /// Create a new active task with a generated id
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::with_id(Uuid::now_v7().to_string(), title, description, false)
    }

    /// Build a task with a caller-supplied id
    pub fn with_id(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        completed: bool,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            completed,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Text to show in a one-line listing: the title, or the description when untitled
    pub fn title_for_list(&self) -> &str {
        if self.title.is_empty() {
            &self.description
        } else {
            &self.title
        }
    }

    pub fn is_active(&self) -> bool {
        !self.completed
    }

    /// True when there is neither a title nor a description
    pub fn is_empty(&self) -> bool {
        self.title.is_empty() && self.description.is_empty()
    }
}

impl std::fmt::Display for Task {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Task with title {}", self.title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_task_is_active_with_unique_id() {
        let a = Task::new("Buy milk", "2%");
        let b = Task::new("Buy milk", "2%");

        assert!(a.is_active());
        assert!(!a.completed);
        assert!(!a.id.is_empty());
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_title_for_list_falls_back_to_description() {
        let titled = Task::with_id("1", "Title", "Desc", false);
        assert_eq!(titled.title_for_list(), "Title");

        let untitled = Task::with_id("2", "", "Desc", false);
        assert_eq!(untitled.title_for_list(), "Desc");
    }

    #[test]
    fn test_is_empty() {
        assert!(Task::with_id("1", "", "", false).is_empty());
        assert!(!Task::with_id("1", "t", "", false).is_empty());
        assert!(!Task::with_id("1", "", "d", false).is_empty());
    }

    #[test]
    fn test_task_serialization() {
        let task = Task::with_id("task-1", "Title", "Desc", true);
        let json = serde_json::to_string(&task).unwrap();
        assert!(json.contains("\"id\":\"task-1\""));
        assert!(json.contains("\"completed\":true"));

        let back: Task = serde_json::from_str(&json).unwrap();
        assert_eq!(back, task);
    }
}
