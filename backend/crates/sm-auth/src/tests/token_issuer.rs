use crate::{JwtValidator, TokenIssuer};

use sm_core::NewUser;

const SECRET: &[u8] = b"issuer-secret-key-at-least-32-bytes";

#[test]
fn given_user_when_token_issued_then_validator_accepts_it() {
    let issuer = TokenIssuer::with_hs256(SECRET, 900);
    let validator = JwtValidator::with_hs256(SECRET);
    let user = NewUser::regular("alice@example.com", "pw").into_user("hash".to_string());

    let issued = issuer.issue(&user).unwrap();
    let claims = validator.validate(&issued.access_token).unwrap();

    assert_eq!(issued.token_type, "Bearer");
    assert_eq!(issued.expires_in, 900);
    assert_eq!(claims.user_id().unwrap(), user.id);
    assert_eq!(claims.email, "alice@example.com");
    assert_eq!(claims.exp - claims.iat, 900);
    assert_eq!(claims.roles, vec!["user".to_string()]);
}

#[test]
fn given_superuser_when_token_issued_then_roles_include_staff_and_superuser() {
    let issuer = TokenIssuer::with_hs256(SECRET, 900);
    let admin = NewUser::superuser("root@example.com", "pw").into_user("hash".to_string());

    let issued = issuer.issue(&admin).unwrap();
    let claims = JwtValidator::with_hs256(SECRET)
        .validate(&issued.access_token)
        .unwrap();

    assert!(claims.has_role("staff"));
    assert!(claims.has_role("superuser"));
}

#[test]
fn given_token_from_other_issuer_when_validated_then_rejected() {
    let issuer = TokenIssuer::with_hs256(b"another-secret-that-is-32-bytes-long", 900);
    let user = NewUser::regular("bob@example.com", "pw").into_user("hash".to_string());
    let issued = issuer.issue(&user).unwrap();

    let result = JwtValidator::with_hs256(SECRET).validate(&issued.access_token);

    assert!(result.is_err());
}
