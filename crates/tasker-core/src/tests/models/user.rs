use crate::User;

fn user() -> User {
    User {
        id: "u1".to_string(),
        name: "Иван".to_string(),
        surname: "Петров".to_string(),
        middlename: None,
        login: "ipetrov".to_string(),
        role_id: 2,
    }
}

#[test]
fn test_user_display_name() {
    assert_eq!(user().display_name(), "Иван Петров");
}

#[test]
fn test_user_wire_shape() {
    let parsed: User = serde_json::from_str(
        r#"{"id":"u1","name":"Иван","surname":"Петров","login":"ipetrov","roleID":2}"#,
    )
    .unwrap();

    assert_eq!(parsed, user());
}
