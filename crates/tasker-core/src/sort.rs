//! Tri-state, single-key task sorting.
//!
//! One field is sortable at a time. Toggling the active field cycles
//! unsorted -> ascending -> descending -> unsorted; toggling a different
//! field always restarts at ascending.

use crate::models::task::Task;
use crate::models::task_status::TaskStatus;
use crate::{CoreError, Result as CoreErrorResult};

use std::cmp::Ordering;
use std::panic::Location;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use error_location::ErrorLocation;

/// Rank order for status sorting.
pub const STATUS_ORDER: [TaskStatus; 4] = [
    TaskStatus::ToDo,
    TaskStatus::InProgress,
    TaskStatus::Done,
    TaskStatus::Canceled,
];

/// A sortable table column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortField {
    Status,
    Deadline,
    CreatedAt,
}

impl SortField {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Status => "status",
            Self::Deadline => "deadline",
            Self::CreatedAt => "createdAt",
        }
    }
}

impl FromStr for SortField {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "status" => Ok(Self::Status),
            "deadline" => Ok(Self::Deadline),
            "createdAt" => Ok(Self::CreatedAt),
            _ => Err(CoreError::InvalidSortField {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for SortField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

impl FromStr for SortOrder {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            _ => Err(CoreError::InvalidSortOrder {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Active sort column and direction. Both unset means input order.
///
/// Never persisted; each view starts unsorted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortState {
    pub field: Option<SortField>,
    pub order: Option<SortOrder>,
}

impl SortState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the sort cycle for `field`.
    ///
    /// A different field always resets to ascending. The same field steps
    /// ascending -> descending -> cleared. The `None` order arm is
    /// unreachable through this method alone but restores a sane state.
    pub fn toggle(&mut self, field: SortField) {
        if self.field != Some(field) {
            self.field = Some(field);
            self.order = Some(SortOrder::Asc);
            return;
        }

        match self.order {
            Some(SortOrder::Asc) => self.order = Some(SortOrder::Desc),
            Some(SortOrder::Desc) => {
                self.field = None;
                self.order = None;
            }
            None => self.order = Some(SortOrder::Asc),
        }
    }

    pub fn is_active(&self) -> bool {
        self.field.is_some() && self.order.is_some()
    }

    /// Sorted copy of `tasks` under the current state
    pub fn sorted_view(&self, tasks: &[Task]) -> Vec<Task> {
        sorted_view(tasks, self.field, self.order)
    }

    /// Header indicator for `field` under the current state
    pub fn indicator(&self, field: SortField) -> &'static str {
        sort_indicator(self, field)
    }
}

/// Return a sorted copy of `tasks`, or the input order when no sort is
/// active. The input is never mutated, and the sort is stable: equal keys
/// keep their original relative order.
pub fn sorted_view(
    tasks: &[Task],
    field: Option<SortField>,
    order: Option<SortOrder>,
) -> Vec<Task> {
    let (Some(field), Some(order)) = (field, order) else {
        return tasks.to_vec();
    };

    let mut view = tasks.to_vec();
    view.sort_by(|a, b| {
        let comp = match field {
            SortField::Status => sort_rank(a.status).cmp(&sort_rank(b.status)),
            SortField::Deadline => compare_timestamps(&a.deadline, &b.deadline),
            SortField::CreatedAt => compare_timestamps(&a.created_at, &b.created_at),
        };
        match order {
            SortOrder::Asc => comp,
            SortOrder::Desc => comp.reverse(),
        }
    });
    view
}

/// Position of `status` in [`STATUS_ORDER`].
///
/// `review` and `blocked` have no rank of their own and compare as `to-do`.
pub fn sort_rank(status: TaskStatus) -> usize {
    STATUS_ORDER.iter().position(|s| *s == status).unwrap_or(0)
}

fn compare_timestamps(a: &str, b: &str) -> Ordering {
    match (parse_timestamp(a), parse_timestamp(b)) {
        (Some(a), Some(b)) => a.cmp(&b),
        // malformed values compare as equal instead of failing the sort
        _ => Ordering::Equal,
    }
}

/// Parse an ISO timestamp as the backend and forms produce them: RFC 3339,
/// a naive datetime with or without seconds, or a bare date.
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(value) {
        return Some(ts.with_timezone(&Utc));
    }

    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, format) {
            return Some(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Symbol shown in a table header for `field`.
pub fn sort_indicator(state: &SortState, field: SortField) -> &'static str {
    if state.field != Some(field) {
        return "⇅";
    }
    match state.order {
        Some(SortOrder::Asc) => "↑",
        Some(SortOrder::Desc) => "↓",
        None => "⇅",
    }
}
