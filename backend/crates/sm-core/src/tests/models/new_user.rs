use crate::{CoreError, MAX_USERNAME_LENGTH, NewUser};

use googletest::prelude::*;

#[test]
fn given_regular_user_when_built_then_not_staff_or_superuser() {
    let new_user = NewUser::regular("alice@example.com", "pw");

    assert_that!(new_user.is_staff, eq(false));
    assert_that!(new_user.is_superuser, eq(false));
    assert_that!(new_user.is_superuser_requested(), eq(false));
    assert_that!(new_user.validate(), ok(anything()));
}

#[test]
fn given_superuser_when_built_then_staff_and_superuser() {
    let new_user = NewUser::superuser("root@example.com", "pw");

    assert_that!(new_user.is_staff, eq(true));
    assert_that!(new_user.is_superuser, eq(true));
    assert_that!(new_user.validate(), ok(anything()));
}

#[test]
fn given_mixed_case_domain_when_built_then_email_is_normalized() {
    let new_user = NewUser::regular("Alice@EXAMPLE.com", "pw");

    assert_that!(new_user.email, eq("Alice@example.com"));
}

#[test]
fn given_empty_email_when_validated_then_email_must_be_set() {
    let result = NewUser::regular("", "pw").validate();

    match result {
        Err(CoreError::Validation { message, field, .. }) => {
            assert_that!(message, eq("The given email must be set"));
            assert_that!(field, some(eq("email")));
        }
        other => panic!("expected validation error, got {:?}", other),
    }
}

#[test]
fn given_malformed_email_when_validated_then_error() {
    assert_that!(
        NewUser::regular("not-an-email", "pw").validate(),
        err(anything())
    );
}

#[test]
fn given_empty_password_when_validated_then_error() {
    assert_that!(
        NewUser::regular("a@example.com", "").validate(),
        err(anything())
    );
}

#[test]
fn given_superuser_without_staff_flag_when_validated_then_error() {
    let mut new_user = NewUser::superuser("root@example.com", "pw");
    new_user.is_staff = false;

    match new_user.validate() {
        Err(CoreError::Validation { message, .. }) => {
            assert_that!(message, eq("Superuser must have is_staff=True."));
        }
        other => panic!("expected validation error, got {:?}", other),
    }
}

#[test]
fn given_superuser_without_superuser_flag_when_validated_then_error() {
    let mut new_user = NewUser::superuser("root@example.com", "pw");
    new_user.is_superuser = false;

    match new_user.validate() {
        Err(CoreError::Validation { message, .. }) => {
            assert_that!(message, eq("Superuser must have is_superuser=True."));
        }
        other => panic!("expected validation error, got {:?}", other),
    }
}

#[test]
fn given_regular_staff_user_when_validated_then_ok() {
    let mut new_user = NewUser::regular("staff@example.com", "pw");
    new_user.is_staff = true;

    assert_that!(new_user.validate(), ok(anything()));
}

#[test]
fn given_username_too_long_when_validated_then_error() {
    let new_user = NewUser::regular("a@example.com", "pw")
        .with_username("x".repeat(MAX_USERNAME_LENGTH + 1));

    assert_that!(new_user.validate(), err(anything()));
}

#[test]
fn given_username_at_limit_when_validated_then_ok() {
    let new_user =
        NewUser::regular("a@example.com", "pw").with_username("x".repeat(MAX_USERNAME_LENGTH));

    assert_that!(new_user.validate(), ok(anything()));
}

#[test]
fn given_blank_username_when_validated_then_error() {
    let new_user = NewUser::regular("a@example.com", "pw").with_username("   ");

    assert_that!(new_user.validate(), err(anything()));
}
