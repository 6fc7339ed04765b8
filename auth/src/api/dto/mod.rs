pub mod credentials;
pub mod validate;
