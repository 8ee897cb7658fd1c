use serde::{Deserialize, Serialize};

/// Sentinel id of the synthetic aggregate dashboard.
pub const ALL_DASHBOARDS_ID: &str = "all";

/// Display name of the aggregate entry.
const ALL_DASHBOARDS_NAME: &str = "Все дашборды";

/// A named board that tasks belong to.
///
/// The loaded dashboard list always starts with the synthetic aggregate
/// entry; a task's `dashboard_id` never points at it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dashboard {
    /// Some backend responses key this as `ID`
    #[serde(alias = "ID")]
    pub id: String,
    pub name: String,
}

impl Dashboard {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }

    /// The synthetic "every dashboard" aggregate
    pub fn aggregate() -> Self {
        Self::new(ALL_DASHBOARDS_ID, ALL_DASHBOARDS_NAME)
    }

    pub fn is_aggregate(&self) -> bool {
        self.id == ALL_DASHBOARDS_ID
    }
}
