use crate::NewUser;

#[test]
fn test_full_name_joins_first_and_last() {
    let mut new_user = NewUser::regular("ada@example.com", "secret");
    new_user.first_name = "Ada".to_string();
    new_user.last_name = "Lovelace".to_string();

    let user = new_user.into_user("hash".to_string());

    assert_eq!(user.full_name(), "Ada Lovelace");
}

#[test]
fn test_full_name_with_empty_names_is_single_space() {
    let user = NewUser::regular("x@example.com", "secret").into_user("hash".to_string());

    assert_eq!(user.full_name(), " ");
}

#[test]
fn test_new_user_defaults() {
    let user = NewUser::regular("x@example.com", "secret").into_user("hash".to_string());

    assert!(!user.online);
    assert!(user.is_active);
    assert!(user.profile_image.is_none());
    assert!(user.username.is_none());
    assert_eq!(user.password_hash, "hash");
}

#[test]
fn test_password_hash_is_not_serialized() {
    let user = NewUser::regular("x@example.com", "secret").into_user("hash".to_string());

    let json = serde_json::to_value(&user).unwrap();

    assert!(json.get("password_hash").is_none());
    assert_eq!(json["email"], "x@example.com");
}
