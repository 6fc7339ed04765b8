/*
 * Responsibility
 * - /api/todo, /api/todos の CRUD handler
 * - Path/Json を extractor で受け、DTO validation → repo 呼び出し
 */
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::{
    api::dto::todos::{TodoRequest, TodoResponse},
    error::AppError,
    state::AppState,
};

pub async fn list_todos(State(state): State<AppState>) -> Result<Json<Vec<TodoResponse>>, AppError> {
    let rows = state.todos.list().await?;
    Ok(Json(rows.into_iter().map(TodoResponse::from).collect()))
}

pub async fn create_todo(
    State(state): State<AppState>,
    Json(req): Json<TodoRequest>,
) -> Result<(StatusCode, Json<TodoResponse>), AppError> {
    req.validate()
        .map_err(|m| AppError::bad_request("VALIDATION", m))?;

    let row = state.todos.create(&req.description, req.is_complete()).await?;
    tracing::debug!(todo_id = row.id, "todo created");

    Ok((StatusCode::CREATED, Json(row.into())))
}

pub async fn get_todo(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<TodoResponse>, AppError> {
    let row = state
        .todos
        .get(id)
        .await?
        .ok_or(AppError::not_found("todo item"))?;

    Ok(Json(row.into()))
}

pub async fn update_todo(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<TodoRequest>,
) -> Result<Json<TodoResponse>, AppError> {
    req.validate()
        .map_err(|m| AppError::bad_request("VALIDATION", m))?;

    let row = state
        .todos
        .update(id, &req.description, req.is_complete())
        .await?
        .ok_or(AppError::not_found("todo item"))?;

    Ok(Json(row.into()))
}

pub async fn delete_todo(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    if state.todos.delete(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("todo item"))
    }
}
