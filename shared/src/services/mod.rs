pub mod access_jwt;
pub mod verifier;

pub use access_jwt::{AccessJwtError, AccessJwtVerifier, AccessTokenClaims};
