//! Task Row Component
//!
//! A single task with completion toggle, inline title edit, suggestion
//! trigger, and delete.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::edit::EditSession;
use crate::models::Task;
use crate::store::{self, use_app_store};
use crate::suggestion::{self, SuggestionResult};

/// A single task row in the list
#[component]
pub fn TaskRow(
    task: Task,
    editing: ReadSignal<Option<EditSession>>,
    set_editing: WriteSignal<Option<EditSession>>,
    set_suggestion: WriteSignal<Option<SuggestionResult>>,
    suggestion_loading: ReadSignal<bool>,
    set_suggestion_loading: WriteSignal<bool>,
) -> impl IntoView {
    let app = use_app_store();

    let id = task.id;
    let completed = task.completed;
    let title = task.title.clone();

    let is_editing = move || editing.get().is_some_and(|session| session.is_for(id));

    // Commit triggers (Enter, blur, save resolution) all funnel through
    // here; the slot may already be gone when a second trigger fires.
    let save = {
        let task = task.clone();
        move || {
            let Some(session) = editing.get_untracked() else {
                return;
            };
            if !session.is_for(id) {
                return;
            }
            spawn_local(store::save_edited_title(
                app,
                set_editing,
                task.clone(),
                session.draft,
            ));
        }
    };

    let toggle = {
        let task = task.clone();
        move |_: web_sys::Event| {
            spawn_local(store::toggle_completion(app, task.clone()));
        }
    };

    let begin_edit = {
        let task = task.clone();
        move |_: web_sys::MouseEvent| {
            set_editing.set(Some(EditSession::begin(&task)));
        }
    };
    let begin_edit_dbl = begin_edit.clone();

    let suggest = {
        let title = title.clone();
        move |_: web_sys::MouseEvent| {
            spawn_local(suggestion::request_suggestion(
                set_suggestion,
                set_suggestion_loading,
                title.clone(),
            ));
        }
    };

    let display_title = title.clone();

    view! {
        <div class=move || if completed { "task-row completed" } else { "task-row" }>
            // Checkbox
            <input type="checkbox" checked=completed on:change=toggle />

            // Title: plain text, or the inline editor while this row owns
            // the edit slot
            {move || if is_editing() {
                let save_on_blur = save.clone();
                let save_on_enter = save.clone();
                view! {
                    <input
                        type="text"
                        class="title-edit-input"
                        autofocus=true
                        prop:value=move || {
                            editing.get()
                                .filter(|session| session.is_for(id))
                                .map(|session| session.draft)
                                .unwrap_or_default()
                        }
                        on:input=move |ev| {
                            let target = ev.target().unwrap();
                            let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                            let value = input.value();
                            set_editing.update(|slot| {
                                if let Some(session) =
                                    slot.as_mut().filter(|session| session.is_for(id))
                                {
                                    session.draft = value;
                                }
                            });
                        }
                        on:blur=move |_| save_on_blur()
                        on:keydown=move |ev: web_sys::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                ev.prevent_default();
                                save_on_enter();
                            }
                        }
                    />
                }.into_any()
            } else {
                let display_title = display_title.clone();
                let begin_edit_dbl = begin_edit_dbl.clone();
                view! {
                    <span class="task-title" on:dblclick=begin_edit_dbl>{display_title}</span>
                }.into_any()
            }}

            // Edit button
            <button class="edit-btn" on:click=begin_edit>"✎"</button>

            // Suggestion trigger, disabled while a request is in flight
            <button
                class="suggest-btn"
                disabled=move || suggestion_loading.get()
                on:click=suggest
            >"💡"</button>

            // Delete button
            <button class="delete-btn" on:click=move |_| {
                spawn_local(store::delete_task(app, set_editing, id));
            }>"×"</button>
        </div>
    }
}
