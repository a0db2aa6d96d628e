//! Form-driven page handlers (`/`, `/filter`, `/add`, `/edit/:id`,
//! `/delete/:id`).
//!
//! The wire field for the task text here is `task`. Every response is the
//! rendered page; store failures become the page's error banner instead of
//! an error status.

use axum::{
    extract::{Path, Query, State},
    response::Html,
    Form,
};
use serde::Deserialize;
use tracing::info;

use crate::error::TaskpadError;
use crate::model::PriorityFilter;

use super::render::render_page;
use super::state::AppState;

#[derive(Debug, Deserialize)]
pub struct TaskForm {
    #[serde(default)]
    pub task: String,
    #[serde(default)]
    pub priority: String,
}

#[derive(Debug, Deserialize)]
pub struct FilterQuery {
    #[serde(default)]
    pub priority: String,
}

/// `GET /`
pub async fn index(State(state): State<AppState>) -> Html<String> {
    let store = state.store();
    Html(render_page(store.list(), "All", None, None))
}

/// `GET /filter?priority=…`
pub async fn filter(
    State(state): State<AppState>,
    Query(query): Query<FilterQuery>,
) -> Html<String> {
    let store = state.store();
    match PriorityFilter::parse(Some(&query.priority)) {
        Ok(filter) => {
            let todos = store.list_by_priority(filter);
            Html(render_page(&todos, &filter.to_string(), None, None))
        }
        Err(err) => Html(render_page(
            store.list(),
            "All",
            Some(&banner_message(&err)),
            None,
        )),
    }
}

/// `POST /add`
pub async fn add_task(State(state): State<AppState>, Form(form): Form<TaskForm>) -> Html<String> {
    let mut store = state.store_mut();
    match store.add(&form.task, Some(&form.priority)) {
        Ok(todo) => {
            info!(id = todo.id, "todo created");
            Html(render_page(
                store.list(),
                "All",
                None,
                Some("Task added successfully!"),
            ))
        }
        Err(err) => Html(render_page(
            store.list(),
            "All",
            Some(&banner_message(&err)),
            None,
        )),
    }
}

/// `POST /edit/:id`
pub async fn edit_task(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Form(form): Form<TaskForm>,
) -> Html<String> {
    let mut store = state.store_mut();
    match store.edit(id, &form.task, Some(&form.priority)) {
        Ok(todo) => {
            info!(id = todo.id, "todo updated");
            Html(render_page(
                store.list(),
                "All",
                None,
                Some("Task updated successfully!"),
            ))
        }
        Err(err) => Html(render_page(
            store.list(),
            "All",
            Some(&banner_message(&err)),
            None,
        )),
    }
}

/// `POST /delete/:id`
pub async fn delete_task(State(state): State<AppState>, Path(id): Path<u64>) -> Html<String> {
    let mut store = state.store_mut();
    match store.delete(id) {
        Ok(todo) => {
            info!(id = todo.id, "todo deleted");
            Html(render_page(
                store.list(),
                "All",
                None,
                Some("Task deleted successfully!"),
            ))
        }
        Err(err) => Html(render_page(
            store.list(),
            "All",
            Some(&banner_message(&err)),
            None,
        )),
    }
}

fn banner_message(err: &TaskpadError) -> String {
    match err {
        TaskpadError::EmptyTask => "Task cannot be empty!".to_string(),
        TaskpadError::DuplicateTask => "This task already exists!".to_string(),
        TaskpadError::NotFound(_) => "Task not found!".to_string(),
        TaskpadError::UnknownPriority(value) => format!("Unknown priority: {value}"),
    }
}
