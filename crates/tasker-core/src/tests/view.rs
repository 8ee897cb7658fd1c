use crate::tests::{ids, task};
use crate::{BoardView, Dashboard, Selection, SortField, TaskStatus};

fn dashboards() -> Vec<Dashboard> {
    vec![
        Dashboard::aggregate(),
        Dashboard::new("d1", "Frontend"),
        Dashboard::new("d2", "Backend"),
    ]
}

#[test]
fn test_explicit_selection_wins() {
    let mut view = BoardView::new(dashboards());
    view.select("d2");

    assert_eq!(view.active_dashboard_id(), "d2");
}

#[test]
fn test_defaults_to_first_real_dashboard() {
    let view = BoardView::new(dashboards());

    // the aggregate entry is skipped
    assert_eq!(view.active_dashboard_id(), "d1");
}

#[test]
fn test_unresolved_until_dashboards_load() {
    let view = BoardView::new(Vec::new());

    assert_eq!(view.active_dashboard_id(), "");
    assert!(view.visible_tasks(&[task("1", TaskStatus::ToDo, "2025-08-01", "d1")]).is_empty());
}

#[test]
fn test_explicit_all_shows_everything_even_without_dashboards() {
    let mut view = BoardView::new(Vec::new());
    view.select("all");

    let tasks = vec![
        task("1", TaskStatus::ToDo, "2025-08-01", "d1"),
        task("2", TaskStatus::ToDo, "2025-08-01", "d2"),
    ];

    assert_eq!(view.visible_tasks(&tasks).len(), 2);
}

#[test]
fn test_reselecting_all_requests_refresh() {
    let mut view = BoardView::new(dashboards());

    assert_eq!(view.select("all"), Selection::Changed);
    assert_eq!(view.select("all"), Selection::RefreshAll);
    // selecting something else re-arms the refresh rule
    assert_eq!(view.select("d1"), Selection::Changed);
    assert_eq!(view.select("all"), Selection::Changed);
}

#[test]
fn test_visible_tasks_filters_then_sorts() {
    let mut view = BoardView::new(dashboards());
    view.select("d1");

    let tasks = vec![
        task("1", TaskStatus::Done, "2025-08-01", "d1"),
        task("3", TaskStatus::ToDo, "2025-09-01", "d2"),
        task("2", TaskStatus::ToDo, "2025-07-01", "d1"),
    ];

    // unsorted: input order, narrowed to d1
    assert_eq!(ids(&view.visible_tasks(&tasks)), vec!["1", "2"]);

    view.toggle_sort(SortField::Deadline);
    assert_eq!(ids(&view.visible_tasks(&tasks)), vec!["2", "1"]);

    view.toggle_sort(SortField::Deadline);
    assert_eq!(ids(&view.visible_tasks(&tasks)), vec!["1", "2"]);
}

#[test]
fn test_title_resolution() {
    let mut view = BoardView::new(dashboards());

    assert_eq!(view.title(), "Frontend");

    view.select("all");
    assert_eq!(view.title(), "Все дашборды");

    view.select("d9");
    assert_eq!(view.title(), "Дашборд");
}

#[test]
fn test_set_dashboards_after_load() {
    let mut view = BoardView::new(Vec::new());
    assert_eq!(view.active_dashboard_id(), "");

    view.set_dashboards(dashboards());

    assert_eq!(view.active_dashboard_id(), "d1");
}
