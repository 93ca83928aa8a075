use axum::Json;
use axum::extract::{Path, Query};
use axum::routing::{delete, post};
use axum::{Router, extract::State, http::StatusCode, routing::get};
use uuid::Uuid;

use crate::error::AppError;
use crate::models::*;
use crate::services::{FilteredTodos, TodoSummary};
use crate::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/todos", get(list_todos).post(create_todo))
        .route("/todos/{id}", get(get_todo).patch(update_todo).delete(delete_todo))
        .route("/todos/{id}/toggle", post(toggle_todo))
        .route("/summary", get(summary))
        .route("/notifications", get(list_notifications))
        .route("/notifications/{id}", delete(dismiss_notification))
        .with_state(state)
}

async fn health() -> StatusCode {
    StatusCode::OK
}

async fn list_todos(
    State(state): State<AppState>,
    Query(params): Query<RawFilter>
) -> Json<FilteredTodos> {
    let criteria = FilterCriteria::from_raw(&params);
    Json(state.todos.filter(&criteria).await)
}

async fn create_todo(
    State(state): State<AppState>,
    Json(req): Json<NewTodoRequest>
) -> Result<(StatusCode, Json<Todo>), AppError> {
    let todo = state.todos.add(req).await?;
    Ok((StatusCode::CREATED, Json(todo)))
}

async fn get_todo(
    State(state): State<AppState>,
    Path(id): Path<TodoId>
) -> Result<Json<Todo>, AppError> {
    let todo = state.todos.get(id).await.ok_or(AppError::NotFound)?;
    Ok(Json(todo))
}

async fn update_todo(
    State(state): State<AppState>,
    Path(id): Path<TodoId>,
    Json(req): Json<UpdateTodoRequest>
) -> Result<Json<Todo>, AppError> {
    let todo = state.todos
        .update(id, req)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(Json(todo))
}

async fn toggle_todo(
    State(state): State<AppState>,
    Path(id): Path<TodoId>
) -> Result<Json<Todo>, AppError> {
    let todo = state.todos.toggle(id).await.ok_or(AppError::NotFound)?;
    Ok(Json(todo))
}

async fn delete_todo(
    State(state): State<AppState>,
    Path(id): Path<TodoId>
) -> Result<StatusCode, AppError> {
    if state.todos.delete(id).await {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound)
    }
}

async fn summary(State(state): State<AppState>) -> Json<TodoSummary> {
    Json(state.todos.summary().await)
}

async fn list_notifications(State(state): State<AppState>) -> Json<Vec<NotificationRecord>> {
    Json(state.todos.notifier().active().await)
}

async fn dismiss_notification(
    State(state): State<AppState>,
    Path(id): Path<Uuid>
) -> StatusCode {
    // Already expired or dismissed is not an error.
    state.todos.notifier().dismiss(id).await;
    StatusCode::NO_CONTENT
}
