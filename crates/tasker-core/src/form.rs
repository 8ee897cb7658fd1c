//! Task create/edit form state and payload construction.
//!
//! The two toggles (approval, blockers) gate fields that keep their stale
//! values in form state; payload construction normalizes them so stale
//! selections never reach the backend.

use crate::models::approve_status::ApproveStatus;
use crate::models::dashboard::ALL_DASHBOARDS_ID;
use crate::models::task::Task;
use crate::models::task_status::TaskStatus;
use crate::models::user::User;
use crate::{CoreError, Result as CoreErrorResult};

use serde::Serialize;

/// Body for the create endpoint.
///
/// Field names follow the backend's create contract, which differs from
/// the entity shape (`dashboardID`/`reporterID`/`approverID`/`blockers`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateTaskPayload {
    pub title: String,
    pub description: String,
    pub deadline: String,
    #[serde(rename = "dashboardID")]
    pub dashboard_id: String,
    #[serde(rename = "reporterID")]
    pub reporter_id: String,
    #[serde(rename = "approveStatus")]
    pub approve_status: ApproveStatus,
    /// Null whenever approval is not required
    #[serde(rename = "approverID")]
    pub approver_id: Option<String>,
    pub blockers: Vec<String>,
}

/// Body for the update endpoint: a full snapshot of the edited task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTaskPayload {
    pub title: String,
    pub description: String,
    pub deadline: String,
    pub reporter_id: String,
    /// Null whenever approval is not required
    pub approver_id: Option<String>,
    pub approve_status: ApproveStatus,
    pub dashboard_id: String,
    /// Null when the blocker toggle is off
    pub blocked_by: Option<Vec<String>>,
    pub status: TaskStatus,
    pub assigner_id: Option<String>,
}

/// In-progress create/edit form state.
#[derive(Debug, Clone, Default)]
pub struct TaskForm {
    pub title: String,
    pub description: String,
    pub deadline: String,
    pub reporter_id: String,
    pub approver_id: String,
    pub approve_status: ApproveStatus,
    pub dashboard_id: String,
    /// Multi-select contents; only submitted while `has_blockers` is on
    pub blocked_by: Vec<String>,
    pub has_blockers: bool,
    /// Editable on the edit surface only
    pub status: TaskStatus,
}

impl TaskForm {
    /// Fresh create form. Reporter and approver both default to the acting
    /// user; the approver can be overridden once approval is required.
    pub fn for_reporter(user_id: &str) -> Self {
        Self {
            reporter_id: user_id.to_string(),
            approver_id: user_id.to_string(),
            ..Self::default()
        }
    }

    /// Edit form seeded from an existing task
    pub fn from_task(task: &Task) -> Self {
        Self {
            title: task.title.clone(),
            description: task.description.clone(),
            deadline: task.deadline.clone(),
            reporter_id: task.reporter_id.clone(),
            approver_id: task.approver_id.clone(),
            approve_status: task.approve_status,
            dashboard_id: task.dashboard_id.clone(),
            blocked_by: task.blocked_by.clone(),
            has_blockers: task.has_blockers(),
            status: task.status,
        }
    }

    /// Approval toggle. The stored approver is kept when toggling off so
    /// flipping back restores the previous choice; payload construction
    /// drops it instead.
    pub fn set_require_approval(&mut self, required: bool) {
        self.approve_status = if required {
            ApproveStatus::NeedApproval
        } else {
            ApproveStatus::Approved
        };
    }

    pub fn requires_approval(&self) -> bool {
        self.approve_status == ApproveStatus::NeedApproval
    }

    /// Blocker toggle. Toggling off clears the multi-select immediately.
    pub fn set_has_blockers(&mut self, has_blockers: bool) {
        self.has_blockers = has_blockers;
        if !has_blockers {
            self.blocked_by.clear();
        }
    }

    /// Local validation, run before any network call.
    ///
    /// Blocker contents are deliberately left unchecked: self-references
    /// and unknown ids pass through, matching the backend's contract.
    pub fn validate(&self, users: &[User]) -> CoreErrorResult<()> {
        if self.title.trim().is_empty() {
            return Err(CoreError::validation("title is required", Some("title")));
        }

        if self.deadline.trim().is_empty() {
            return Err(CoreError::validation(
                "deadline is required",
                Some("deadline"),
            ));
        }

        if self.dashboard_id.is_empty() || self.dashboard_id == ALL_DASHBOARDS_ID {
            return Err(CoreError::validation(
                "a real dashboard must be selected",
                Some("dashboardId"),
            ));
        }

        if self.requires_approval() {
            if self.approver_id.is_empty() {
                return Err(CoreError::validation(
                    "approver is required when approval is requested",
                    Some("approverId"),
                ));
            }
            if !users.iter().any(|user| user.id == self.approver_id) {
                return Err(CoreError::validation(
                    "approver must be an existing user",
                    Some("approverId"),
                ));
            }
        }

        Ok(())
    }

    /// Create payload with toggle normalization applied
    pub fn create_payload(&self) -> CreateTaskPayload {
        CreateTaskPayload {
            title: self.title.clone(),
            description: self.description.clone(),
            deadline: self.deadline.clone(),
            dashboard_id: self.dashboard_id.clone(),
            reporter_id: self.reporter_id.clone(),
            approve_status: self.approve_status,
            approver_id: self
                .requires_approval()
                .then(|| self.approver_id.clone()),
            blockers: if self.has_blockers {
                self.blocked_by.clone()
            } else {
                Vec::new()
            },
        }
    }

    /// Update payload with toggle normalization applied.
    ///
    /// The edit surface has no assignee picker; the reporter is mirrored
    /// into `assignerId`, as the backend expects.
    pub fn update_payload(&self) -> UpdateTaskPayload {
        UpdateTaskPayload {
            title: self.title.clone(),
            description: self.description.clone(),
            deadline: self.deadline.clone(),
            reporter_id: self.reporter_id.clone(),
            approver_id: self
                .requires_approval()
                .then(|| self.approver_id.clone()),
            approve_status: self.approve_status,
            dashboard_id: self.dashboard_id.clone(),
            blocked_by: self.has_blockers.then(|| self.blocked_by.clone()),
            status: self.status,
            assigner_id: Some(self.reporter_id.clone()),
        }
    }
}
