//! TaskMate App
//!
//! Main application component: owns the store and the two single-slot
//! signals (edit session, suggestion) and wires them into the layout.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::components::{NewTaskForm, SuggestionPanel, TaskList};
use crate::edit::EditSession;
use crate::store::{self, AppState};
use crate::suggestion::SuggestionResult;

#[component]
pub fn App() -> impl IntoView {
    // State
    let app = Store::new(AppState::default());
    provide_context(app);

    let (editing, set_editing) = signal::<Option<EditSession>>(None);
    let (suggestion, set_suggestion) = signal::<Option<SuggestionResult>>(None);
    let (suggestion_loading, set_suggestion_loading) = signal(false);

    // Load tasks on mount; a failure here is terminal for the session
    Effect::new(move |_| {
        spawn_local(store::load_all(app));
    });

    view! {
        <div class="app-layout">
            // Center: task panel
            <main class="main-content">
                <h1>"TaskMate"</h1>

                <NewTaskForm />

                <TaskList
                    editing=editing
                    set_editing=set_editing
                    set_suggestion=set_suggestion
                    suggestion_loading=suggestion_loading
                    set_suggestion_loading=set_suggestion_loading
                />
            </main>

            // Right: suggestion column (shown while pending or displaying)
            <SuggestionPanel
                suggestion=suggestion
                set_suggestion=set_suggestion
                suggestion_loading=suggestion_loading
            />
        </div>
    }
}
