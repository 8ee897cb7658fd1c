use crate::board::render_board;

use tasker_core::{BoardView, Dashboard, SortField, Task, TaskStatus, User};

fn dashboards() -> Vec<Dashboard> {
    vec![Dashboard::aggregate(), Dashboard::new("d1", "Frontend")]
}

fn tasks() -> Vec<Task> {
    let mut early = Task::new("t1", "Ранняя задача", "u1", "d1", "2025-07-01");
    early.status = TaskStatus::Done;
    early.assigner_id = Some("u1".to_string());

    let late = Task::new("t2", "Поздняя задача", "u1", "d1", "2025-08-01");

    vec![early, late]
}

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
fn test_render_shows_title_and_rows() {
    let view = BoardView::new(dashboards());

    let rendered = render_board(&view, &tasks(), &users());

    assert!(rendered.starts_with("== Frontend =="));
    assert!(rendered.contains("Ранняя задача"));
    assert!(rendered.contains("Иван Петров"));
    // the unassigned task renders the placeholder
    assert!(rendered.contains("—"));
}

#[test]
fn test_render_reflects_sort_toggle() {
    let mut view = BoardView::new(dashboards());
    view.toggle_sort(SortField::Deadline);

    let rendered = render_board(&view, &tasks(), &users());

    assert!(rendered.contains("Дедлайн ↑"));
    assert!(rendered.contains("Статус ⇅"));

    // ascending by deadline puts the early task first
    let early = rendered.find("Ранняя задача").unwrap();
    let late = rendered.find("Поздняя задача").unwrap();
    assert!(early < late);
}

#[test]
fn test_render_descending_reverses_rows() {
    let mut view = BoardView::new(dashboards());
    view.toggle_sort(SortField::Deadline);
    view.toggle_sort(SortField::Deadline);

    let rendered = render_board(&view, &tasks(), &users());

    assert!(rendered.contains("Дедлайн ↓"));
    let early = rendered.find("Ранняя задача").unwrap();
    let late = rendered.find("Поздняя задача").unwrap();
    assert!(late < early);
}

#[test]
fn test_render_empty_board() {
    let mut view = BoardView::new(dashboards());
    view.select("all");

    let rendered = render_board(&view, &[], &[]);

    assert!(rendered.contains("== Все дашборды =="));
    assert!(rendered.contains("(нет задач)"));
}
