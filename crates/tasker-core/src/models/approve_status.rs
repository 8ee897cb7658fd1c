use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Approval workflow state.
///
/// `need-approval -> approval -> approved` or `rejected`. An `approver_id`
/// is only meaningful while approval is still required.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ApproveStatus {
    NeedApproval,
    Approval,
    #[default]
    Approved,
    Rejected,
}

impl ApproveStatus {
    /// Convert to the wire string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NeedApproval => "need-approval",
            Self::Approval => "approval",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }
}

impl FromStr for ApproveStatus {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "need-approval" => Ok(Self::NeedApproval),
            "approval" => Ok(Self::Approval),
            "approved" => Ok(Self::Approved),
            "rejected" => Ok(Self::Rejected),
            _ => Err(CoreError::InvalidApproveStatus {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for ApproveStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
