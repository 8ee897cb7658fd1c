use crate::{ApproveStatus, Task, TaskStatus};

#[test]
fn test_task_new_defaults() {
    let task = Task::new("t1", "Прототип главной страницы", "u1", "d1", "2025-08-01");

    assert_eq!(task.status, TaskStatus::ToDo);
    assert_eq!(task.approve_status, ApproveStatus::Approved);
    assert_eq!(task.reporter_id, "u1");
    assert_eq!(task.approver_id, "u1");
    assert_eq!(task.dashboard_id, "d1");
    assert!(task.blocked_by.is_empty());
    assert!(!task.has_blockers());
    assert!(!task.requires_approval());
}

#[test]
fn test_task_wire_shape() {
    let task: Task = serde_json::from_str(
        r#"{
            "id": "t1",
            "title": "Прототип",
            "description": "",
            "status": "in-progress",
            "approveStatus": "need-approval",
            "reporterId": "u1",
            "assignerId": null,
            "approverId": "u2",
            "deadline": "2025-08-01T12:00:00Z",
            "createdAt": "2025-07-01T09:30:00Z",
            "dashboardId": "d1",
            "blockedBy": ["t9"]
        }"#,
    )
    .unwrap();

    assert_eq!(task.status, TaskStatus::InProgress);
    assert_eq!(task.approve_status, ApproveStatus::NeedApproval);
    assert_eq!(task.assigner_id, None);
    assert_eq!(task.blocked_by, vec!["t9".to_string()]);
    assert!(task.has_blockers());
    assert!(task.requires_approval());
}

#[test]
fn test_task_tolerates_missing_optional_fields() {
    // a minimal record, as older backend snapshots produce
    let task: Task = serde_json::from_str(
        r#"{
            "id": "t1",
            "title": "Прототип",
            "status": "to-do",
            "approveStatus": "approved",
            "reporterId": "u1",
            "approverId": "u1",
            "deadline": "2025-08-01",
            "createdAt": "2025-07-01",
            "dashboardId": "d1"
        }"#,
    )
    .unwrap();

    assert_eq!(task.description, "");
    assert_eq!(task.assigner_id, None);
    assert!(task.blocked_by.is_empty());
}
