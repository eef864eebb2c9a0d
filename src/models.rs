//! Frontend Models
//!
//! Data structures matching the task service.

use serde::{Deserialize, Serialize};

/// Task data structure (matches the service)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: u32,
    pub title: String,
    pub completed: bool,
}

impl Task {
    /// Payload that flips the completion flag while keeping the title.
    pub fn toggled(&self) -> TaskPayload<'_> {
        TaskPayload {
            title: &self.title,
            completed: !self.completed,
        }
    }
}

/// Request body for create and update calls
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskPayload<'a> {
    pub title: &'a str,
    pub completed: bool,
}

/// Response envelope of the suggestion endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct SuggestionResponse {
    pub suggestion: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn toggled_inverts_only_the_flag() {
        let task = Task {
            id: 7,
            title: "Water the plants".to_string(),
            completed: false,
        };

        let payload = task.toggled();
        assert_eq!(payload.title, "Water the plants");
        assert!(payload.completed);
    }

    #[test]
    fn toggling_twice_restores_the_original_flag() {
        let task = Task {
            id: 1,
            title: "Read".to_string(),
            completed: true,
        };

        // Simulate the server echoing each payload back.
        let once = Task {
            id: task.id,
            title: task.toggled().title.to_string(),
            completed: task.toggled().completed,
        };
        let twice = Task {
            id: once.id,
            title: once.toggled().title.to_string(),
            completed: once.toggled().completed,
        };

        assert_eq!(twice, task);
    }
}
