use serde::{Deserialize, Serialize};

/// A registered user, as returned by the backend user listing.
///
/// Read-only from the client's perspective; used for id -> name resolution
/// and as selectable approver options in forms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub surname: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub middlename: Option<String>,
    pub login: String,
    #[serde(rename = "roleID")]
    pub role_id: i32,
}

impl User {
    /// Name rendered in tables and selection lists
    pub fn display_name(&self) -> String {
        format!("{} {}", self.name, self.surname)
    }
}
