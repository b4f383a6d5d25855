use super::*;

#[test]
fn normalize_username_trims_whitespace() {
    assert_eq!(normalize_username("  alice \n"), Ok("alice"));
}

#[test]
fn normalize_username_rejects_blank() {
    assert_eq!(normalize_username(""), Err(UsernameError::Empty));
    assert_eq!(normalize_username("   "), Err(UsernameError::Empty));
}

#[test]
fn user_serializes_camel_case_without_photo() {
    let user = User { user_id: "abc".into(), username: "alice".into(), photo: None };
    let json = serde_json::to_value(&user).unwrap();
    assert_eq!(json, serde_json::json!({ "userId": "abc", "username": "alice" }));
}

#[test]
fn user_serializes_photo_when_present() {
    let user = User { user_id: "abc".into(), username: "alice".into(), photo: Some("a.png".into()) };
    let json = serde_json::to_value(&user).unwrap();
    assert_eq!(json["photo"], "a.png");
}

#[test]
fn user_deserializes_missing_photo_as_none() {
    let user: User = serde_json::from_str(r#"{"userId":"abc","username":"bob"}"#).unwrap();
    assert_eq!(user.username, "bob");
    assert!(user.photo.is_none());
}
