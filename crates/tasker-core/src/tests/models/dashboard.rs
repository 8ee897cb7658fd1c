use crate::{ALL_DASHBOARDS_ID, Dashboard};

#[test]
fn test_aggregate_dashboard() {
    let aggregate = Dashboard::aggregate();

    assert_eq!(aggregate.id, ALL_DASHBOARDS_ID);
    assert_eq!(aggregate.name, "Все дашборды");
    assert!(aggregate.is_aggregate());
}

#[test]
fn test_real_dashboard_is_not_aggregate() {
    let dashboard = Dashboard::new("d1", "Frontend");

    assert!(!dashboard.is_aggregate());
}

#[test]
fn test_dashboard_accepts_uppercase_id_key() {
    // some backend responses key the id as `ID`
    let dashboard: Dashboard = serde_json::from_str(r#"{"ID":"d1","name":"Frontend"}"#).unwrap();

    assert_eq!(dashboard.id, "d1");
    assert_eq!(dashboard.name, "Frontend");
}
