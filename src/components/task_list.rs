//! Task List Component
//!
//! Renders the collection with explicit loading, failure, and empty
//! states. The four top-level states are mutually exclusive.

use leptos::prelude::*;

use crate::components::TaskRow;
use crate::edit::EditSession;
use crate::store::{use_app_store, AppStateStoreFields};
use crate::suggestion::SuggestionResult;
use crate::view::{project_list, TaskListView};

/// Task list with projection-driven top-level states
#[component]
pub fn TaskList(
    editing: ReadSignal<Option<EditSession>>,
    set_editing: WriteSignal<Option<EditSession>>,
    set_suggestion: WriteSignal<Option<SuggestionResult>>,
    suggestion_loading: ReadSignal<bool>,
    set_suggestion_loading: WriteSignal<bool>,
) -> impl IntoView {
    let app = use_app_store();

    let list_view = move || project_list(app.load_state().get(), &app.tasks().read());

    view! {
        <div class="task-list">
            {move || match list_view() {
                TaskListView::Loading => view! {
                    <p class="loading-hint">"Loading tasks..."</p>
                }.into_any(),
                TaskListView::LoadFailed => view! {
                    <p class="load-error">"Could not load tasks. Is the service running?"</p>
                }.into_any(),
                TaskListView::Empty => view! {
                    <p class="empty-hint">"No tasks yet. Add one above."</p>
                }.into_any(),
                TaskListView::List => view! {
                    <div class="task-rows">
                        <For
                            each=move || app.tasks().get()
                            key=|task| (task.id, task.title.clone(), task.completed)
                            children=move |task| view! {
                                <TaskRow
                                    task=task
                                    editing=editing
                                    set_editing=set_editing
                                    set_suggestion=set_suggestion
                                    suggestion_loading=suggestion_loading
                                    set_suggestion_loading=set_suggestion_loading
                                />
                            }
                        />
                        <p class="task-count">
                            {move || format!("{} tasks", app.tasks().read().len())}
                        </p>
                    </div>
                }.into_any(),
            }}
        </div>
    }
}
