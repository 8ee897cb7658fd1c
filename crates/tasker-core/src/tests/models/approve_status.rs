use crate::ApproveStatus;

use std::str::FromStr;

#[test]
fn test_approve_status_as_str() {
    assert_eq!(ApproveStatus::NeedApproval.as_str(), "need-approval");
    assert_eq!(ApproveStatus::Approval.as_str(), "approval");
    assert_eq!(ApproveStatus::Approved.as_str(), "approved");
    assert_eq!(ApproveStatus::Rejected.as_str(), "rejected");
}

#[test]
fn test_approve_status_from_str() {
    assert_eq!(
        ApproveStatus::from_str("need-approval").unwrap(),
        ApproveStatus::NeedApproval
    );
    assert_eq!(
        ApproveStatus::from_str("rejected").unwrap(),
        ApproveStatus::Rejected
    );
    assert!(ApproveStatus::from_str("maybe").is_err());
}

#[test]
fn test_approve_status_default() {
    assert_eq!(ApproveStatus::default(), ApproveStatus::Approved);
}
