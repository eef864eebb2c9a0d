//! Suggestion Panel Component
//!
//! Side column showing the single pending or displayed suggestion.

use leptos::prelude::*;

use crate::suggestion::SuggestionResult;

/// Suggestion column (shown while loading or displaying a result)
#[component]
pub fn SuggestionPanel(
    suggestion: ReadSignal<Option<SuggestionResult>>,
    set_suggestion: WriteSignal<Option<SuggestionResult>>,
    suggestion_loading: ReadSignal<bool>,
) -> impl IntoView {
    view! {
        <Show when=move || suggestion_loading.get()>
            <div class="suggestion-column loading">
                <div class="spinner"></div>
                <p>"Asking for a suggestion..."</p>
            </div>
        </Show>

        {move || suggestion.get().map(|result| view! {
            <div class="suggestion-column">
                <div class="suggestion-header">
                    <span class="suggestion-title">{result.for_task_title.clone()}</span>
                    <button class="close-btn" on:click=move |_| set_suggestion.set(None)>
                        "×"
                    </button>
                </div>
                <pre class="suggestion-text">{result.text.clone()}</pre>
            </div>
        })}
    }
}
