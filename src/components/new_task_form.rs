//! New Task Form Component
//!
//! Input row for creating tasks.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::store::{self, use_app_store};

/// Form for creating new tasks
#[component]
pub fn NewTaskForm() -> impl IntoView {
    let app = use_app_store();

    let (title, set_title) = signal(String::new());

    let create_task = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let text = title.get();
        if store::is_blank(&text) {
            return;
        }
        spawn_local(async move {
            // Typed text survives a failed create.
            if store::add_task(app, text).await {
                set_title.set(String::new());
            }
        });
    };

    view! {
        <form class="new-task-form" on:submit=create_task>
            <div class="new-task-row">
                <input
                    type="text"
                    placeholder="Add a task..."
                    prop:value=move || title.get()
                    on:input=move |ev| {
                        let target = ev.target().unwrap();
                        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                        set_title.set(input.value());
                    }
                />
                <button type="submit">"Add"</button>
            </div>
        </form>
    }
}
