//! JSON API handlers (`/api/todos`).
//!
//! The wire field for the task text is `title`; the rename to the internal
//! `text` happens in the DTOs here and nowhere deeper.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::info;

use crate::error::TaskpadError;
use crate::model::Todo;

use super::state::AppState;

/// Wire shape of a todo.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TodoDto {
    pub id: u64,
    pub title: String,
    pub priority: String,
}

impl From<&Todo> for TodoDto {
    fn from(todo: &Todo) -> Self {
        Self {
            id: todo.id,
            title: todo.text.clone(),
            priority: todo.priority.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateTodoRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub priority: Option<String>,
}

/// Both fields optional: omitting one leaves that part of the record alone.
#[derive(Debug, Deserialize)]
pub struct UpdateTodoRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub priority: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct DeletedResponse {
    pub message: String,
    pub id: u64,
}

/// Store error mapped to an HTTP response: validation failures are 400,
/// missing ids are 404, body is `{"error": message}`.
#[derive(Debug)]
pub struct ApiError(TaskpadError);

impl From<TaskpadError> for ApiError {
    fn from(err: TaskpadError) -> Self {
        Self(err)
    }
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self.0 {
            TaskpadError::EmptyTask
            | TaskpadError::DuplicateTask
            | TaskpadError::UnknownPriority(_) => StatusCode::BAD_REQUEST,
            TaskpadError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }

    fn message(&self) -> String {
        match &self.0 {
            TaskpadError::EmptyTask => "Title cannot be empty".to_string(),
            TaskpadError::DuplicateTask => "This task already exists".to_string(),
            TaskpadError::UnknownPriority(value) => format!("Unknown priority: {value}"),
            TaskpadError::NotFound(_) => "Todo not found".to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "error": self.message() }))).into_response()
    }
}

/// `GET /api/todos`
pub async fn list_todos(State(state): State<AppState>) -> Json<Vec<TodoDto>> {
    let store = state.store();
    Json(store.list().iter().map(TodoDto::from).collect())
}

/// `POST /api/todos`
pub async fn create_todo(
    State(state): State<AppState>,
    Json(request): Json<CreateTodoRequest>,
) -> Result<(StatusCode, Json<TodoDto>), ApiError> {
    let mut store = state.store_mut();
    let todo = store.add(&request.title, request.priority.as_deref())?;
    info!(id = todo.id, "todo created");
    Ok((StatusCode::CREATED, Json(TodoDto::from(&todo))))
}

/// `PUT /api/todos/:id`
pub async fn update_todo(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(request): Json<UpdateTodoRequest>,
) -> Result<Json<TodoDto>, ApiError> {
    let mut store = state.store_mut();
    // An omitted title means "keep the current text".
    let text = match request.title {
        Some(title) => title,
        None => store
            .get(id)
            .ok_or(TaskpadError::NotFound(id))?
            .text
            .clone(),
    };
    let todo = store.edit(id, &text, request.priority.as_deref())?;
    info!(id, "todo updated");
    Ok(Json(TodoDto::from(&todo)))
}

/// `DELETE /api/todos/:id`
pub async fn delete_todo(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<DeletedResponse>, ApiError> {
    let mut store = state.store_mut();
    store.delete(id)?;
    info!(id, "todo deleted");
    Ok(Json(DeletedResponse {
        message: "Todo deleted successfully".to_string(),
        id,
    }))
}
