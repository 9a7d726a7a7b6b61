//! Observed task rows
//!
//! A `TaskState` is one row of the host feed: the task name as the
//! client displays it and whether the row was marked completed. Rows
//! arrive as an ordered sequence and the order carries through to the
//! CSV report.

use serde::{Deserialize, Serialize};

use super::key::TaskKey;

/// A single observed task row from the host feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskState {
    /// Display name as observed in the client
    pub name: String,

    /// Whether the row was marked completed
    pub completed: bool,
}

impl TaskState {
    pub fn new(name: impl Into<String>, completed: bool) -> Self {
        Self {
            name: name.into(),
            completed,
        }
    }

    /// The normalized lookup key for this row's name.
    pub fn key(&self) -> TaskKey {
        TaskKey::new(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_from_feed_row() {
        let state: TaskState =
            serde_json::from_str(r#"{"name": "Kill a Goblin", "completed": true}"#).unwrap();
        assert_eq!(state.name, "Kill a Goblin");
        assert!(state.completed);
    }

    #[test]
    fn key_normalizes_the_display_name() {
        let state = TaskState::new("Kill the Dragon!", false);
        assert_eq!(state.key().as_str(), "kill the dragon");
    }
}
