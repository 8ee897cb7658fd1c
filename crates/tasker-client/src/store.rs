//! In-memory snapshots of the backend collections.
//!
//! Each refresh replaces a whole snapshot; derived views (filtered, sorted)
//! are computed elsewhere from these immutable slices. Overlapping
//! refreshes are last-write-wins per collection.

use crate::client::Client;
use crate::remote::Remote;

use log::warn;
use tasker_core::{Dashboard, Task, User};

/// Snapshot store for the three backend collections, each with its own
/// loading state.
#[derive(Debug, Default)]
pub struct BoardData {
    pub(crate) tasks: Remote<Vec<Task>>,
    pub(crate) dashboards: Remote<Vec<Dashboard>>,
    pub(crate) users: Remote<Vec<User>>,
}

impl BoardData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Refresh the task snapshot for the given active dashboard
    pub async fn refresh_tasks(&mut self, client: &Client, active_dashboard_id: &str) {
        self.tasks = Remote::Loading;
        self.tasks = client
            .tasks_for(active_dashboard_id)
            .await
            .inspect_err(|error| warn!("failed to load tasks: {error}"))
            .into();
    }

    /// Refresh the dashboard snapshot
    pub async fn refresh_dashboards(&mut self, client: &Client) {
        self.dashboards = Remote::Loading;
        self.dashboards = client
            .list_dashboards()
            .await
            .inspect_err(|error| warn!("failed to load dashboards: {error}"))
            .into();
    }

    /// Refresh the user snapshot
    pub async fn refresh_users(&mut self, client: &Client) {
        self.users = Remote::Loading;
        self.users = client
            .list_users()
            .await
            .inspect_err(|error| warn!("failed to load users: {error}"))
            .into();
    }

    pub fn tasks(&self) -> &Remote<Vec<Task>> {
        &self.tasks
    }

    pub fn dashboards(&self) -> &Remote<Vec<Dashboard>> {
        &self.dashboards
    }

    pub fn users(&self) -> &Remote<Vec<User>> {
        &self.users
    }

    /// Ready tasks, or an empty slice. Fetch failures never reach the
    /// sort/filter layer; they stay observable on [`Self::tasks`].
    pub fn tasks_or_empty(&self) -> &[Task] {
        self.tasks.ready().map(Vec::as_slice).unwrap_or(&[])
    }

    /// Ready dashboards, or just the aggregate entry: the "all" view keeps
    /// working while the list is loading or failed.
    pub fn dashboards_or_default(&self) -> Vec<Dashboard> {
        match self.dashboards.ready() {
            Some(dashboards) => dashboards.clone(),
            None => vec![Dashboard::aggregate()],
        }
    }

    /// Ready users, or an empty slice
    pub fn users_or_empty(&self) -> &[User] {
        self.users.ready().map(Vec::as_slice).unwrap_or(&[])
    }

    /// First failure across the three collections, for banner display
    pub fn first_error(&self) -> Option<&str> {
        self.dashboards
            .error()
            .or_else(|| self.tasks.error())
            .or_else(|| self.users.error())
    }
}
