//! UI Components
//!
//! Leptos components for the task panel.

mod new_task_form;
mod suggestion_panel;
mod task_list;
mod task_row;

pub use new_task_form::NewTaskForm;
pub use suggestion_panel::SuggestionPanel;
pub use task_list::TaskList;
pub use task_row::TaskRow;
