//! bearer token 検証 → AuthCtx を extensions に入れる
//!
//! - `Authorization: Bearer <token>` が無ければ verifier を呼ばずに 401
//! - verifier (remote / local) の失敗はすべて 401 (fail-closed)
//! - 成功時は `AuthCtx` を request extensions に格納し、handler は `AuthCtxExtractor` で受け取る

use axum::{
    Router,
    body::Body,
    extract::State,
    http::{HeaderMap, Request, header},
    middleware::{self, Next},
    response::Response,
};

use crate::error::AuthError;
use crate::extractors::AuthCtx;
use crate::services::verifier::SharedVerifier;

/// Gate every route already registered on `router` behind token verification.
///
/// 例：
/// ```ignore
/// let profile = Router::new().route("/students/profile/{id}", get(get_profile));
/// let profile = shared::middleware::auth::access::apply(profile, state.verifier.clone());
/// ```
pub fn apply<S>(router: Router<S>, verifier: SharedVerifier) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    // route_layer: unmatched paths still 404 instead of 401
    router.route_layer(middleware::from_fn_with_state(verifier, access_middleware))
}

/// Extract the bearer token. Missing header, other schemes and empty tokens are all "missing".
pub fn bearer_token(headers: &HeaderMap) -> Result<&str, AuthError> {
    let auth = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or(AuthError::MissingToken)?;

    let token = auth
        .strip_prefix("Bearer ")
        .or_else(|| auth.strip_prefix("bearer "))
        .ok_or(AuthError::MissingToken)?
        .trim();

    if token.is_empty() {
        return Err(AuthError::MissingToken);
    }
    Ok(token)
}

async fn access_middleware(
    State(verifier): State<SharedVerifier>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, AuthError> {
    let token = bearer_token(req.headers())?;

    let verified = match verifier.verify(token).await {
        Ok(v) => v,
        Err(err) => {
            tracing::warn!(
                error = %err,
                backend = verifier.backend_name(),
                "access token verification failed"
            );
            return Err(AuthError::InvalidToken);
        }
    };

    tracing::debug!(
        principal_id = verified.principal_id,
        backend = verifier.backend_name(),
        "access token verified"
    );

    // middleware → extractor への受け渡し
    req.extensions_mut().insert(AuthCtx::from(verified));

    Ok(next.run(req).await)
}
