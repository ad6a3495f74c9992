use crate::{MAX_CONTENT_LENGTH, validate_content};

#[test]
fn test_content_is_trimmed() {
    assert_eq!(validate_content("  hello  ").unwrap(), "hello");
}

#[test]
fn test_blank_content_is_rejected() {
    assert!(validate_content("   \n\t").is_err());
}

#[test]
fn test_content_at_limit_is_accepted_and_over_limit_rejected() {
    let at_limit = "a".repeat(MAX_CONTENT_LENGTH);
    let over_limit = "a".repeat(MAX_CONTENT_LENGTH + 1);

    assert!(validate_content(&at_limit).is_ok());
    assert!(validate_content(&over_limit).is_err());
}
