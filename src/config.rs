//! Client Configuration
//!
//! The single external setting: where the task service lives.

use std::sync::OnceLock;

/// Default service address for local development
const DEFAULT_API_BASE: &str = "http://127.0.0.1:8000";

static API_BASE: OnceLock<String> = OnceLock::new();

/// Base address of the task service, fixed for the lifetime of the process.
///
/// Override at build time with `TASKMATE_API_BASE`.
pub fn api_base() -> &'static str {
    API_BASE.get_or_init(|| {
        option_env!("TASKMATE_API_BASE")
            .unwrap_or(DEFAULT_API_BASE)
            .trim_end_matches('/')
            .to_string()
    })
}
