//! UI Components
//!
//! One Leptos component per file.

mod filter_select;
mod new_task_form;
mod task_list;
mod task_row;

pub use filter_select::FilterSelect;
pub use new_task_form::NewTaskForm;
pub use task_list::TaskListView;
pub use task_row::TaskRow;
