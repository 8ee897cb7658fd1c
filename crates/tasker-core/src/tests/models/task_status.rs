use crate::TaskStatus;

use std::str::FromStr;

#[test]
fn test_task_status_as_str() {
    assert_eq!(TaskStatus::ToDo.as_str(), "to-do");
    assert_eq!(TaskStatus::InProgress.as_str(), "in-progress");
    assert_eq!(TaskStatus::Review.as_str(), "review");
    assert_eq!(TaskStatus::Blocked.as_str(), "blocked");
    assert_eq!(TaskStatus::Done.as_str(), "done");
    assert_eq!(TaskStatus::Canceled.as_str(), "canceled");
}

#[test]
fn test_task_status_from_str() {
    assert_eq!(TaskStatus::from_str("to-do").unwrap(), TaskStatus::ToDo);
    assert_eq!(
        TaskStatus::from_str("in-progress").unwrap(),
        TaskStatus::InProgress
    );
    assert_eq!(TaskStatus::from_str("done").unwrap(), TaskStatus::Done);
    assert!(TaskStatus::from_str("invalid").is_err());
}

#[test]
fn test_task_status_default() {
    assert_eq!(TaskStatus::default(), TaskStatus::ToDo);
}

#[test]
fn test_task_status_sortable_subset() {
    assert!(TaskStatus::ToDo.is_sortable());
    assert!(TaskStatus::InProgress.is_sortable());
    assert!(TaskStatus::Done.is_sortable());
    assert!(TaskStatus::Canceled.is_sortable());
    assert!(!TaskStatus::Review.is_sortable());
    assert!(!TaskStatus::Blocked.is_sortable());
}

#[test]
fn test_task_status_wire_shape() {
    assert_eq!(
        serde_json::to_string(&TaskStatus::InProgress).unwrap(),
        "\"in-progress\""
    );
    assert_eq!(
        serde_json::from_str::<TaskStatus>("\"to-do\"").unwrap(),
        TaskStatus::ToDo
    );
}
