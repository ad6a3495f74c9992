mod password;
mod token_issuer;
