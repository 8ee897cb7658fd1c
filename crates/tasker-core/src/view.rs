//! Board view state: dashboard selection composed with the sort engine.
//!
//! The browser client kept this in ambient context shared across the
//! component tree; here it is an explicit struct owned by the caller and
//! passed to whatever renders the board.

use crate::filter::select_active_tasks;
use crate::lookup::resolve_dashboard_name;
use crate::models::dashboard::{ALL_DASHBOARDS_ID, Dashboard};
use crate::models::task::Task;
use crate::sort::{SortField, SortState};

/// Outcome of a dashboard selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// The selection was recorded.
    Changed,
    /// The aggregate was re-selected while already active; the caller
    /// should re-fetch the unfiltered task collection. Fire-and-forget:
    /// filtering and sorting proceed on whatever is cached.
    RefreshAll,
}

/// View state for one board: the loaded dashboard list, the user's explicit
/// selection (if any) and the sort state.
#[derive(Debug, Clone, Default)]
pub struct BoardView {
    dashboards: Vec<Dashboard>,
    selected: Option<String>,
    pub sort: SortState,
}

impl BoardView {
    pub fn new(dashboards: Vec<Dashboard>) -> Self {
        Self {
            dashboards,
            selected: None,
            sort: SortState::new(),
        }
    }

    /// Replace the dashboard list after a (re-)fetch
    pub fn set_dashboards(&mut self, dashboards: Vec<Dashboard>) {
        self.dashboards = dashboards;
    }

    pub fn dashboards(&self) -> &[Dashboard] {
        &self.dashboards
    }

    /// Resolve the active dashboard id.
    ///
    /// Precedence: explicit selection, then the first real dashboard after
    /// the aggregate entry, then empty until dashboards resolve.
    pub fn active_dashboard_id(&self) -> String {
        if let Some(id) = &self.selected {
            return id.clone();
        }

        self.dashboards
            .iter()
            .find(|dashboard| !dashboard.is_aggregate())
            .map(|dashboard| dashboard.id.clone())
            .unwrap_or_default()
    }

    /// Record a selection. Re-selecting the already-active aggregate asks
    /// the caller to refresh instead of silently doing nothing.
    pub fn select(&mut self, dashboard_id: &str) -> Selection {
        if dashboard_id == ALL_DASHBOARDS_ID && self.selected.as_deref() == Some(ALL_DASHBOARDS_ID)
        {
            return Selection::RefreshAll;
        }

        self.selected = Some(dashboard_id.to_string());
        Selection::Changed
    }

    pub fn toggle_sort(&mut self, field: SortField) {
        self.sort.toggle(field);
    }

    /// The tasks this view shows: filtered to the active dashboard, then
    /// sorted. With nothing selected and no dashboards loaded there is
    /// nothing to show yet.
    pub fn visible_tasks(&self, tasks: &[Task]) -> Vec<Task> {
        let active = self.active_dashboard_id();
        if active.is_empty() {
            return Vec::new();
        }

        let filtered = select_active_tasks(tasks, &active);
        self.sort.sorted_view(&filtered)
    }

    /// Board title, resolved through the dashboard lookup
    pub fn title(&self) -> String {
        resolve_dashboard_name(&self.dashboards, &self.active_dashboard_id())
    }
}
