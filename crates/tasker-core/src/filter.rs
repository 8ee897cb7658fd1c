//! Narrowing the task collection to the active dashboard.

use crate::models::dashboard::ALL_DASHBOARDS_ID;
use crate::models::task::Task;

/// Return the tasks belonging to `active_dashboard_id`, preserving input
/// order. The aggregate sentinel and an unresolved empty id both mean "no
/// narrowing"; [`crate::view::BoardView`] decides whether an unresolved
/// view shows anything at all. The input is never mutated.
pub fn select_active_tasks(tasks: &[Task], active_dashboard_id: &str) -> Vec<Task> {
    if active_dashboard_id.is_empty() || active_dashboard_id == ALL_DASHBOARDS_ID {
        return tasks.to_vec();
    }

    tasks
        .iter()
        .filter(|task| task.dashboard_id == active_dashboard_id)
        .cloned()
        .collect()
}
