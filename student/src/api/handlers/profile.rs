use axum::{
    Json,
    extract::{Path, State},
};
use shared::{AuthCtxExtractor, guard::ensure_owner};

use crate::{api::dto::students::StudentResponse, error::AppError, state::AppState};

/// `GET /students/profile/{id}`: only the owning principal may read it.
///
/// Ownership is checked before the lookup, so a mismatch is 403 whether
/// or not the student exists.
pub async fn get_profile(
    State(state): State<AppState>,
    AuthCtxExtractor(ctx): AuthCtxExtractor,
    Path(id): Path<i64>,
) -> Result<Json<StudentResponse>, AppError> {
    ensure_owner(&ctx, id)?;

    let row = state
        .students
        .get(id)
        .await?
        .ok_or(AppError::not_found("student"))?;

    Ok(Json(row.into()))
}
