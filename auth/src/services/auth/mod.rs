pub mod auth_service;
pub mod jwt;
pub mod password;
pub mod token_issuer;

pub use auth_service::AuthService;
pub use jwt::JwtIssuer;
pub use token_issuer::{IssuedToken, TokenIssuer};
