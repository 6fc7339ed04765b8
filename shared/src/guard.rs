//! Resource Owner Guard.
//!
//! Runs before the resource is loaded, so a mismatch is 403 whether or not
//! the resource exists.

use tracing::warn;

use crate::error::AuthError;
use crate::extractors::AuthCtx;

/// Reject unless the verified principal owns `resource_id`.
pub fn ensure_owner(ctx: &AuthCtx, resource_id: i64) -> Result<(), AuthError> {
    if ctx.principal_id == resource_id {
        return Ok(());
    }

    warn!(
        principal_id = ctx.principal_id,
        resource_id,
        jti = ctx.jti.as_deref().unwrap_or("-"),
        "owner mismatch"
    );
    Err(AuthError::Forbidden)
}
