use crate::models::approve_status::ApproveStatus;
use crate::models::task_status::TaskStatus;

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// The central work-item entity.
///
/// Timestamps are kept as the ISO strings the backend sends. Parsing only
/// happens at comparison time, so a malformed value degrades a sort instead
/// of failing deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,

    // Workflow
    pub status: TaskStatus,
    pub approve_status: ApproveStatus,

    // People
    pub reporter_id: String,
    #[serde(default)]
    pub assigner_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reviewer_id: Option<String>,
    pub approver_id: String,

    // Dates (ISO strings)
    pub deadline: String,
    pub created_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub started_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<String>,

    // Grouping and dependencies
    pub dashboard_id: String,
    /// Ids of tasks that must complete before this one. Advisory only -
    /// contents are not validated against the task collection.
    #[serde(default)]
    pub blocked_by: Vec<String>,
}

impl Task {
    /// Create a task with default workflow state
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        reporter_id: impl Into<String>,
        dashboard_id: impl Into<String>,
        deadline: impl Into<String>,
    ) -> Self {
        let reporter_id = reporter_id.into();
        Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            status: TaskStatus::ToDo,
            approve_status: ApproveStatus::Approved,
            approver_id: reporter_id.clone(),
            reporter_id,
            assigner_id: None,
            reviewer_id: None,
            deadline: deadline.into(),
            created_at: Utc::now().to_rfc3339(),
            started_at: None,
            completed_at: None,
            dashboard_id: dashboard_id.into(),
            blocked_by: Vec::new(),
        }
    }

    /// Whether other tasks block this one
    pub fn has_blockers(&self) -> bool {
        !self.blocked_by.is_empty()
    }

    pub fn requires_approval(&self) -> bool {
        self.approve_status == ApproveStatus::NeedApproval
    }
}
