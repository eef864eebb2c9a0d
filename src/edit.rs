//! Inline Title Editing
//!
//! Single-slot edit session: at most one task title is being revised at
//! any time. Beginning an edit elsewhere replaces the slot and the old
//! draft is gone.

use crate::models::Task;

/// The task currently being edited plus its uncommitted draft
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    pub task_id: u32,
    pub draft: String,
}

impl EditSession {
    /// Open a session seeded with the task's current title.
    pub fn begin(task: &Task) -> Self {
        Self {
            task_id: task.id,
            draft: task.title.clone(),
        }
    }

    /// Whether this session targets the given task.
    pub fn is_for(&self, task_id: u32) -> bool {
        self.task_id == task_id
    }
}

/// Clear the slot when it references the given task.
///
/// Called when a task is deleted so the session never dangles.
pub fn discard_for(slot: &mut Option<EditSession>, task_id: u32) {
    if slot.as_ref().is_some_and(|session| session.is_for(task_id)) {
        *slot = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn make_task(id: u32, title: &str) -> Task {
        Task {
            id,
            title: title.to_string(),
            completed: false,
        }
    }

    #[test]
    fn begin_seeds_draft_with_current_title() {
        let task = make_task(4, "Plan the trip");

        let session = EditSession::begin(&task);

        assert_eq!(session.task_id, 4);
        assert_eq!(session.draft, "Plan the trip");
    }

    #[test]
    fn beginning_on_another_task_replaces_the_session() {
        let a = make_task(1, "Task A");
        let b = make_task(2, "Task B");

        let mut slot = Some(EditSession::begin(&a));
        slot.as_mut().unwrap().draft = "half-typed revision".to_string();

        // User clicks edit on B; A's draft is silently discarded.
        slot = Some(EditSession::begin(&b));

        let session = slot.unwrap();
        assert_eq!(session.task_id, 2);
        assert_eq!(session.draft, "Task B");
    }

    #[test]
    fn discard_for_clears_only_the_matching_session() {
        let task = make_task(3, "Task C");

        let mut slot = Some(EditSession::begin(&task));
        discard_for(&mut slot, 99);
        assert!(slot.is_some());

        discard_for(&mut slot, 3);
        assert_eq!(slot, None);
    }

    #[test]
    fn discard_for_tolerates_an_empty_slot() {
        let mut slot: Option<EditSession> = None;
        discard_for(&mut slot, 1);
        assert_eq!(slot, None);
    }
}
