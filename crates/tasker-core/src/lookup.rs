//! Read-only id -> display-name projections.

use crate::models::dashboard::Dashboard;
use crate::models::user::User;

/// Placeholder for ids with no matching user.
pub const UNKNOWN_USER_PLACEHOLDER: &str = "—";

/// Title shown when a dashboard id resolves to nothing.
pub const DASHBOARD_FALLBACK_NAME: &str = "Дашборд";

/// Display name for `id`, or the fixed placeholder. Never fails on unknown
/// ids.
pub fn resolve_user_display_name(users: &[User], id: &str) -> String {
    users
        .iter()
        .find(|user| user.id == id)
        .map(User::display_name)
        .unwrap_or_else(|| UNKNOWN_USER_PLACEHOLDER.to_string())
}

/// Name of the dashboard with `id`, or the fixed fallback. The aggregate
/// entry resolves through the same path since it is part of the loaded
/// list.
pub fn resolve_dashboard_name(dashboards: &[Dashboard], id: &str) -> String {
    dashboards
        .iter()
        .find(|dashboard| dashboard.id == id)
        .map(|dashboard| dashboard.name.clone())
        .unwrap_or_else(|| DASHBOARD_FALLBACK_NAME.to_string())
}
