//! View Projection
//!
//! Pure derivation of the top-level render state. Holds no state of its
//! own; components match on the result.

use crate::models::Task;
use crate::store::LoadState;

/// Mutually exclusive render states for the task panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskListView {
    /// Initial fetch still in flight
    Loading,
    /// Initial fetch failed; the session stays here
    LoadFailed,
    /// Loaded with nothing to show
    Empty,
    /// Loaded with at least one task
    List,
}

/// Project load state and collection onto the four render states.
pub fn project_list(load_state: LoadState, tasks: &[Task]) -> TaskListView {
    match load_state {
        LoadState::Loading => TaskListView::Loading,
        LoadState::Failed => TaskListView::LoadFailed,
        LoadState::Loaded if tasks.is_empty() => TaskListView::Empty,
        LoadState::Loaded => TaskListView::List,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn make_task(id: u32) -> Task {
        Task {
            id,
            title: format!("Task {id}"),
            completed: false,
        }
    }

    #[test]
    fn loading_wins_regardless_of_collection() {
        assert_eq!(project_list(LoadState::Loading, &[]), TaskListView::Loading);
        assert_eq!(
            project_list(LoadState::Loading, &[make_task(1)]),
            TaskListView::Loading
        );
    }

    #[test]
    fn failed_load_never_renders_a_list() {
        assert_eq!(project_list(LoadState::Failed, &[]), TaskListView::LoadFailed);
    }

    #[test]
    fn loaded_empty_collection_gets_the_empty_state() {
        assert_eq!(project_list(LoadState::Loaded, &[]), TaskListView::Empty);
    }

    #[test]
    fn loaded_tasks_render_as_a_list() {
        assert_eq!(
            project_list(LoadState::Loaded, &[make_task(1), make_task(2)]),
            TaskListView::List
        );
    }
}
