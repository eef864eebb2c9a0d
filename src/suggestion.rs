//! Suggestion Pipeline
//!
//! Request/format/display cycle for service-generated task guidance.
//! One result is visible at a time; a new request clears the old one
//! before anything else happens.

use leptos::prelude::*;
use regex::Regex;
use std::sync::OnceLock;

use crate::api;

/// Header shown in place of a task title when the request fails
const FAILURE_TITLE: &str = "Error";
/// Body shown when the request fails
const FAILURE_TEXT: &str = "Failed to fetch a suggestion. Please try again later.";

/// A materialized suggestion for one task title
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionResult {
    pub for_task_title: String,
    pub text: String,
}

impl SuggestionResult {
    fn failure() -> Self {
        Self {
            for_task_title: FAILURE_TITLE.to_string(),
            text: FAILURE_TEXT.to_string(),
        }
    }
}

static ORDINAL_RE: OnceLock<Regex> = OnceLock::new();

/// Ordinal list-item prefix: digits, a period, whitespace
fn ordinal_re() -> &'static Regex {
    ORDINAL_RE.get_or_init(|| Regex::new(r"\d+\.\s+").expect("pattern is valid"))
}

/// Normalize raw model output for display.
///
/// Order matters: emphasis markers are dropped first, then ordinal
/// prefixes become bulleted lines, then surrounding whitespace is trimmed.
pub fn format_suggestion(raw: &str) -> String {
    let stripped = raw.replace("**", "");
    let bulleted = ordinal_re().replace_all(&stripped, "\n• ");
    bulleted.trim().to_string()
}

/// Run one request cycle for the given task title.
///
/// Clears the displayed result, flips the loading flag, then publishes
/// either the formatted text or the failure placeholder. Responses are not
/// sequence-guarded: when cycles overlap, the later arrival wins.
pub async fn request_suggestion(
    set_result: WriteSignal<Option<SuggestionResult>>,
    set_loading: WriteSignal<bool>,
    title: String,
) {
    set_result.set(None);
    set_loading.set(true);
    match api::fetch_suggestion(&title).await {
        Ok(raw) => {
            set_result.set(Some(SuggestionResult {
                for_task_title: title,
                text: format_suggestion(&raw),
            }));
        }
        Err(err) => {
            web_sys::console::error_1(&format!("[SUGGEST] request failed: {err}").into());
            set_result.set(Some(SuggestionResult::failure()));
        }
    }
    set_loading.set(false);
}
