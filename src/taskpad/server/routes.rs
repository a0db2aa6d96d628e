//! Router assembly.
//!
//! Page routes at the root, the JSON API nested under `/api`. The API gets
//! a permissive CORS layer (a separate dev front end consumes it); the whole
//! router gets request tracing.

use axum::{
    routing::{get, post, put},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use super::state::AppState;
use super::{api, pages};

pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/todos", get(api::list_todos).post(api::create_todo))
        .route(
            "/todos/:id",
            put(api::update_todo).delete(api::delete_todo),
        )
        .layer(CorsLayer::permissive());

    Router::new()
        .route("/", get(pages::index))
        .route("/filter", get(pages::filter))
        .route("/add", post(pages::add_task))
        .route("/edit/:id", post(pages::edit_task))
        .route("/delete/:id", post(pages::delete_task))
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
