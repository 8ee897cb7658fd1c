pub mod error;
pub mod filter;
pub mod form;
pub mod lookup;
pub mod models;
pub mod sort;
pub mod view;

pub use error::{CoreError, Result};
pub use filter::select_active_tasks;
pub use form::{CreateTaskPayload, TaskForm, UpdateTaskPayload};
pub use lookup::{
    DASHBOARD_FALLBACK_NAME, UNKNOWN_USER_PLACEHOLDER, resolve_dashboard_name,
    resolve_user_display_name,
};
pub use models::approve_status::ApproveStatus;
pub use models::dashboard::{ALL_DASHBOARDS_ID, Dashboard};
pub use models::task::Task;
pub use models::task_status::TaskStatus;
pub use models::user::User;
pub use sort::{SortField, SortOrder, SortState, parse_timestamp, sort_indicator, sorted_view};
pub use view::{BoardView, Selection};

#[cfg(test)]
mod tests;
