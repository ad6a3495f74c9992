pub mod claims;
pub mod error;
pub mod jwt_validator;
pub mod password;
pub mod token_issuer;

pub use claims::Claims;
pub use error::{AuthError, Result};
pub use jwt_validator::JwtValidator;
pub use password::{hash_password, verify_password};
pub use token_issuer::{IssuedToken, TokenIssuer};

/// Clock skew tolerated when checking `exp`/`nbf`
pub const LEEWAY_SECS: u64 = 30;

#[cfg(test)]
mod tests;
