use crate::{AuthError, hash_password, verify_password};

#[test]
fn given_password_when_hashed_then_phc_string_verifies() {
    let hash = hash_password("correct horse battery staple").unwrap();

    assert!(hash.starts_with("$argon2id$"));
    assert!(verify_password("correct horse battery staple", &hash).unwrap());
}

#[test]
fn given_wrong_password_when_verified_then_false() {
    let hash = hash_password("s3cret").unwrap();

    assert!(!verify_password("not-it", &hash).unwrap());
}

#[test]
fn given_same_password_twice_when_hashed_then_salts_differ() {
    let first = hash_password("repeat").unwrap();
    let second = hash_password("repeat").unwrap();

    assert_ne!(first, second);
}

#[test]
fn given_malformed_hash_when_verified_then_error() {
    let result = verify_password("anything", "not-a-phc-string");

    assert!(matches!(result, Err(AuthError::PasswordHash { .. })));
}
