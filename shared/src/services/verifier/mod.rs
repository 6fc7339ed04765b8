//! Token Verification Client.
//!
//! `TokenVerifier` is the seam between the access middleware and whatever
//! answers "is this bearer token valid, and for whom?".
//! - `HttpTokenVerifier`: one round trip to the Authentication service per request
//! - `LocalTokenVerifier`: in-process check with the shared secret

pub mod client;
pub mod factory;
pub mod http;
pub mod local;

pub use client::{
    SharedVerifier, TokenVerifier, ValidateTokenResponse, VerifiedPrincipal, VerifyError,
};
pub use factory::{VerifierSettings, build_token_verifier};
pub use http::HttpTokenVerifier;
pub use local::LocalTokenVerifier;
