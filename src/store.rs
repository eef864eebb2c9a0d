//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The store owns
//! the authoritative task list for the session; every mutation operation
//! calls the service first and reconciles local state from its response.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::api;
use crate::edit::{self, EditSession};
use crate::models::{Task, TaskPayload};

/// Outcome of the initial fetch
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoadState {
    #[default]
    Loading,
    Failed,
    Loaded,
}

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Authoritative task list for the session
    pub tasks: Vec<Task>,
    /// Whether the initial fetch has resolved
    pub load_state: LoadState,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Append a freshly created task at the end of the list
pub fn store_append_task(store: &AppStore, task: Task) {
    store.tasks().write().push(task);
}

/// Replace a task in the store by ID
pub fn store_replace_task(store: &AppStore, updated: Task) {
    replace_task(&mut store.tasks().write(), updated);
}

/// Remove a task from the store by ID
pub fn store_remove_task(store: &AppStore, task_id: u32) {
    remove_task(&mut store.tasks().write(), task_id);
}

/// Replace the task with a matching id; unknown ids leave the list untouched
pub fn replace_task(tasks: &mut Vec<Task>, updated: Task) {
    if let Some(task) = tasks.iter_mut().find(|task| task.id == updated.id) {
        *task = updated;
    }
}

/// Drop the task with the given id; unknown ids leave the list untouched
pub fn remove_task(tasks: &mut Vec<Task>, task_id: u32) {
    tasks.retain(|task| task.id != task_id);
}

/// Titles that must never reach the service
pub fn is_blank(title: &str) -> bool {
    title.trim().is_empty()
}

// ========================
// Store Operations
// ========================

/// Replace the whole collection with the service's list.
///
/// A failed load is terminal for the session: the collection stays
/// unpopulated and the view shows the failure banner.
pub async fn load_all(store: AppStore) {
    match api::list_tasks().await {
        Ok(tasks) => {
            store.tasks().set(tasks);
            store.load_state().set(LoadState::Loaded);
        }
        Err(err) => {
            web_sys::console::error_1(&format!("[STORE] initial load failed: {err}").into());
            store.load_state().set(LoadState::Failed);
        }
    }
}

/// Create a task from the pending input.
///
/// Returns `true` when the service acknowledged the creation, so the
/// caller knows it may clear its input. Blank titles issue no request.
pub async fn add_task(store: AppStore, title: String) -> bool {
    if is_blank(&title) {
        return false;
    }
    match api::create_task(&title).await {
        Ok(created) => {
            store_append_task(&store, created);
            true
        }
        Err(err) => {
            web_sys::console::error_1(&format!("[STORE] create failed: {err}").into());
            false
        }
    }
}

/// Flip a task's completion flag.
///
/// The server's returned representation replaces the local copy; a local
/// optimistic flip is never assumed.
pub async fn toggle_completion(store: AppStore, task: Task) {
    match api::update_task(task.id, &task.toggled()).await {
        Ok(updated) => store_replace_task(&store, updated),
        Err(err) => {
            web_sys::console::error_1(
                &format!("[STORE] toggle failed for #{}: {err}", task.id).into(),
            );
        }
    }
}

/// Delete a task, discarding a matching edit session so it cannot dangle.
pub async fn delete_task(
    store: AppStore,
    set_editing: WriteSignal<Option<EditSession>>,
    task_id: u32,
) {
    match api::delete_task(task_id).await {
        Ok(()) => {
            store_remove_task(&store, task_id);
            set_editing.update(|slot| edit::discard_for(slot, task_id));
        }
        Err(err) => {
            web_sys::console::error_1(&format!("[STORE] delete failed for #{task_id}: {err}").into());
        }
    }
}

/// Apply a save resolution: a successful response replaces the task by id;
/// the edit session closes either way. On failure the title on screen
/// stays stale. Known limitation.
pub fn settle_saved_title(
    tasks: &mut Vec<Task>,
    slot: &mut Option<EditSession>,
    outcome: Result<Task, api::ApiError>,
) {
    if let Ok(updated) = outcome {
        replace_task(tasks, updated);
    }
    *slot = None;
}

/// Persist an edited title.
pub async fn save_edited_title(
    store: AppStore,
    set_editing: WriteSignal<Option<EditSession>>,
    task: Task,
    new_title: String,
) {
    let payload = TaskPayload {
        title: &new_title,
        completed: task.completed,
    };
    let outcome = api::update_task(task.id, &payload).await;
    if let Err(err) = &outcome {
        web_sys::console::error_1(
            &format!("[STORE] title update failed for #{}: {err}", task.id).into(),
        );
    }
    set_editing.update(|slot| settle_saved_title(&mut store.tasks().write(), slot, outcome));
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn make_task(id: u32, title: &str, completed: bool) -> Task {
        Task {
            id,
            title: title.to_string(),
            completed,
        }
    }

    #[test]
    fn replace_swaps_only_the_matching_task() {
        let mut tasks = vec![
            make_task(1, "one", false),
            make_task(2, "two", false),
            make_task(3, "three", true),
        ];

        replace_task(&mut tasks, make_task(2, "two, revised", true));

        assert_eq!(tasks[0], make_task(1, "one", false));
        assert_eq!(tasks[1], make_task(2, "two, revised", true));
        assert_eq!(tasks[2], make_task(3, "three", true));
    }

    #[test]
    fn replace_with_unknown_id_is_a_noop() {
        let mut tasks = vec![make_task(1, "one", false)];
        let before = tasks.clone();

        replace_task(&mut tasks, make_task(99, "ghost", true));

        assert_eq!(tasks, before);
    }

    #[test]
    fn remove_drops_exactly_the_matching_task() {
        let mut tasks = vec![
            make_task(1, "one", false),
            make_task(2, "two", false),
            make_task(3, "three", false),
        ];

        remove_task(&mut tasks, 2);

        assert_eq!(tasks.len(), 2);
        assert!(tasks.iter().all(|task| task.id != 2));
    }

    #[test]
    fn remove_with_unknown_id_is_a_noop() {
        let mut tasks = vec![make_task(1, "one", false)];

        remove_task(&mut tasks, 42);

        assert_eq!(tasks, vec![make_task(1, "one", false)]);
    }

    #[test]
    fn failed_save_still_closes_the_edit_session() {
        let mut tasks = vec![make_task(1, "old title", false)];
        let mut slot = Some(EditSession {
            task_id: 1,
            draft: "new title".to_string(),
        });

        let outcome = Err(api::ApiError::Status {
            status: 500,
            path: "/tasks/1".to_string(),
            detail: None,
        });
        settle_saved_title(&mut tasks, &mut slot, outcome);

        // The editor exits even though nothing changed.
        assert_eq!(slot, None);
        assert_eq!(tasks[0].title, "old title");
    }

    #[test]
    fn successful_save_replaces_the_task_and_closes_the_session() {
        let mut tasks = vec![make_task(1, "old title", false)];
        let mut slot = Some(EditSession {
            task_id: 1,
            draft: "new title".to_string(),
        });

        settle_saved_title(&mut tasks, &mut slot, Ok(make_task(1, "new title", false)));

        assert_eq!(slot, None);
        assert_eq!(tasks[0].title, "new title");
    }

    #[test]
    fn blank_titles_are_rejected() {
        assert!(is_blank(""));
        assert!(is_blank("   "));
        assert!(is_blank("\t\n"));
        assert!(!is_blank("buy milk"));
        assert!(!is_blank("  padded  "));
    }
}
