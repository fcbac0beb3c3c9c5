use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use todo_core::{Todo, TodoDraft, TodoId};

use crate::extract::{ApiJson, ApiPath, ApiQuery};
use crate::state::ApiState;

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub title: String,
}

pub type ApiResult<T> = Result<T, (StatusCode, Json<ErrorResponse>)>;

fn not_found(id: TodoId) -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: format!("Todo not found: {}", id),
        }),
    )
}

fn internal_error(err: todo_core::Error) -> (StatusCode, Json<ErrorResponse>) {
    tracing::error!("Todo operation failed: {}", err);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: err.to_string(),
        }),
    )
}

/// List all todos
pub async fn list_todos(State(state): State<ApiState>) -> ApiResult<Json<Vec<Todo>>> {
    let todos = state.manager.list_todos().await.map_err(internal_error)?;
    Ok(Json(todos))
}

/// Get todo by ID
pub async fn get_todo(
    State(state): State<ApiState>,
    ApiPath(id): ApiPath<TodoId>,
) -> ApiResult<Json<Todo>> {
    match state.manager.get_todo(id).await.map_err(internal_error)? {
        Some(todo) => Ok(Json(todo)),
        None => Err(not_found(id)),
    }
}

/// Create a todo
pub async fn create_todo(
    State(state): State<ApiState>,
    ApiJson(payload): ApiJson<TodoDraft>,
) -> ApiResult<(StatusCode, Json<Todo>)> {
    let todo = state
        .manager
        .create_todo(payload)
        .await
        .map_err(internal_error)?;

    Ok((StatusCode::CREATED, Json(todo)))
}

/// Replace title, description and completion of a todo
pub async fn update_todo(
    State(state): State<ApiState>,
    ApiPath(id): ApiPath<TodoId>,
    ApiJson(payload): ApiJson<TodoDraft>,
) -> ApiResult<Json<Todo>> {
    match state
        .manager
        .update_todo(id, payload)
        .await
        .map_err(internal_error)?
    {
        Some(todo) => Ok(Json(todo)),
        None => Err(not_found(id)),
    }
}

/// Delete a todo
pub async fn delete_todo(
    State(state): State<ApiState>,
    ApiPath(id): ApiPath<TodoId>,
) -> ApiResult<StatusCode> {
    if state.manager.delete_todo(id).await.map_err(internal_error)? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}

pub async fn completed_todos(State(state): State<ApiState>) -> ApiResult<Json<Vec<Todo>>> {
    let todos = state
        .manager
        .get_completed_todos()
        .await
        .map_err(internal_error)?;
    Ok(Json(todos))
}

pub async fn pending_todos(State(state): State<ApiState>) -> ApiResult<Json<Vec<Todo>>> {
    let todos = state
        .manager
        .get_pending_todos()
        .await
        .map_err(internal_error)?;
    Ok(Json(todos))
}

/// Search todos by title, e.g. `/search?title=spring`
pub async fn search_todos(
    State(state): State<ApiState>,
    ApiQuery(params): ApiQuery<SearchParams>,
) -> ApiResult<Json<Vec<Todo>>> {
    let todos = state
        .manager
        .search_todos_by_title(&params.title)
        .await
        .map_err(internal_error)?;
    Ok(Json(todos))
}
