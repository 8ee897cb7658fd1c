use crate::{
    DASHBOARD_FALLBACK_NAME, Dashboard, UNKNOWN_USER_PLACEHOLDER, User, resolve_dashboard_name,
    resolve_user_display_name,
};

fn users() -> Vec<User> {
    vec![User {
        id: "u1".to_string(),
        name: "Иван".to_string(),
        surname: "Петров".to_string(),
        middlename: None,
        login: "ipetrov".to_string(),
        role_id: 1,
    }]
}

#[test]
fn test_known_user_resolves_to_display_name() {
    assert_eq!(resolve_user_display_name(&users(), "u1"), "Иван Петров");
}

#[test]
fn test_unknown_user_resolves_to_placeholder() {
    assert_eq!(
        resolve_user_display_name(&users(), "nonexistent-id"),
        UNKNOWN_USER_PLACEHOLDER
    );
}

#[test]
fn test_unknown_user_on_empty_collection() {
    assert_eq!(resolve_user_display_name(&[], "u1"), UNKNOWN_USER_PLACEHOLDER);
}

#[test]
fn test_dashboard_name_resolution() {
    let dashboards = vec![Dashboard::aggregate(), Dashboard::new("d1", "Frontend")];

    assert_eq!(resolve_dashboard_name(&dashboards, "d1"), "Frontend");
    assert_eq!(resolve_dashboard_name(&dashboards, "all"), "Все дашборды");
    assert_eq!(
        resolve_dashboard_name(&dashboards, "d9"),
        DASHBOARD_FALLBACK_NAME
    );
}
