/// Normalize an email address by lowercasing the domain part.
///
/// The local part is left untouched since mailbox names may be case
/// sensitive. Input without an `@` is returned unchanged.
pub fn normalize_email(email: &str) -> String {
    let email = email.trim();
    match email.rsplit_once('@') {
        Some((local, domain)) => format!("{}@{}", local, domain.to_lowercase()),
        None => email.to_string(),
    }
}
