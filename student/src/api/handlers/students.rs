/*
 * Responsibility
 * - /api/students 系 CRUD handler
 * - Path/Json を extractor で受け、DTO validation → repo 呼び出し
 */
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::{
    api::dto::students::{StudentRequest, StudentResponse},
    error::AppError,
    state::AppState,
};

pub async fn list_students(
    State(state): State<AppState>,
) -> Result<Json<Vec<StudentResponse>>, AppError> {
    let rows = state.students.list().await?;
    Ok(Json(rows.into_iter().map(StudentResponse::from).collect()))
}

pub async fn create_student(
    State(state): State<AppState>,
    Json(req): Json<StudentRequest>,
) -> Result<(StatusCode, Json<StudentResponse>), AppError> {
    req.validate()
        .map_err(|m| AppError::bad_request("VALIDATION", m))?;

    let row = state.students.create(req.name.trim(), req.email.trim()).await?;
    tracing::debug!(student_id = row.id, "student created");

    Ok((StatusCode::CREATED, Json(row.into())))
}

pub async fn get_student(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<StudentResponse>, AppError> {
    let row = state
        .students
        .get(id)
        .await?
        .ok_or(AppError::not_found("student"))?;

    Ok(Json(row.into()))
}

pub async fn update_student(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<StudentRequest>,
) -> Result<Json<StudentResponse>, AppError> {
    req.validate()
        .map_err(|m| AppError::bad_request("VALIDATION", m))?;

    let row = state
        .students
        .update(id, req.name.trim(), req.email.trim())
        .await?
        .ok_or(AppError::not_found("student"))?;

    Ok(Json(row.into()))
}

pub async fn delete_student(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    if state.students.delete(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("student"))
    }
}
