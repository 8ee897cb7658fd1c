mod lookup;
mod models;
mod view;

use crate::{Task, TaskStatus};

/// Build a task fixture with the fields the sort/filter tests care about
pub(crate) fn task(id: &str, status: TaskStatus, deadline: &str, dashboard_id: &str) -> Task {
    let mut task = Task::new(id, format!("Task {id}"), "user-1", dashboard_id, deadline);
    task.status = status;
    task
}

pub(crate) fn ids(tasks: &[Task]) -> Vec<&str> {
    tasks.iter().map(|task| task.id.as_str()).collect()
}
