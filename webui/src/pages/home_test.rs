use super::*;

#[test]
fn greeting_names_signed_in_user() {
    let user = User { user_id: "a1".to_owned(), username: "alice".to_owned(), photo: None };
    assert_eq!(greeting(Some(&user)), "Welcome back, alice.");
}

#[test]
fn greeting_for_guest() {
    assert_eq!(greeting(None), "Welcome to AlChats.");
}
