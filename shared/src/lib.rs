/*
 * Responsibility
 * - auth / student / todo / gateway で共通利用する部品
 * - Token Verification Client (verifier), access middleware, owner guard
 * - config / telemetry / HTTP middleware など ambient な部分
 */
pub mod config;
pub mod db;
pub mod error;
pub mod extractors;
pub mod guard;
pub mod middleware;
pub mod services;
pub mod telemetry;

pub use error::{AuthError, ErrorResponse};
pub use extractors::{AuthCtx, AuthCtxExtractor};
pub use services::verifier::{SharedVerifier, TokenVerifier, VerifiedPrincipal, VerifyError};
