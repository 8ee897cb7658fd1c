//! Plain-text rendering of the board table.
//!
//! Mirrors the web client's table: title on top, sortable column headers
//! with their indicators, one row per visible task.

use tasker_core::{
    BoardView, SortField, Task, UNKNOWN_USER_PLACEHOLDER, User, resolve_user_display_name,
};

pub fn render_board(view: &BoardView, tasks: &[Task], users: &[User]) -> String {
    let visible = view.visible_tasks(tasks);

    let headers = [
        "Задача".to_string(),
        format!("Статус {}", view.sort.indicator(SortField::Status)),
        format!("Дедлайн {}", view.sort.indicator(SortField::Deadline)),
        format!("Создано {}", view.sort.indicator(SortField::CreatedAt)),
        "Исполнитель".to_string(),
    ];

    let rows: Vec<[String; 5]> = visible
        .iter()
        .map(|task| {
            let assignee = task
                .assigner_id
                .as_deref()
                .map(|id| resolve_user_display_name(users, id))
                .unwrap_or_else(|| UNKNOWN_USER_PLACEHOLDER.to_string());

            [
                task.title.clone(),
                task.status.to_string(),
                task.deadline.clone(),
                task.created_at.clone(),
                assignee,
            ]
        })
        .collect();

    let mut widths: Vec<usize> = headers.iter().map(|header| header.chars().count()).collect();
    for row in &rows {
        for (index, cell) in row.iter().enumerate() {
            widths[index] = widths[index].max(cell.chars().count());
        }
    }

    let mut out = String::new();
    out.push_str(&format!("== {} ==\n", view.title()));
    push_row(&mut out, &headers, &widths);
    for row in &rows {
        push_row(&mut out, row, &widths);
    }

    if rows.is_empty() {
        out.push_str("(нет задач)\n");
    }

    out
}

fn push_row(out: &mut String, cells: &[String; 5], widths: &[usize]) {
    let mut line = String::new();
    for (index, cell) in cells.iter().enumerate() {
        line.push_str(cell);
        line.push_str(&" ".repeat(widths[index] - cell.chars().count()));
        if index + 1 < cells.len() {
            line.push_str("  ");
        }
    }
    out.push_str(line.trim_end());
    out.push('\n');
}
