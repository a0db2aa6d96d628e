//! # HTTP boundary
//!
//! Two transport conventions over the same store, both kept deliberately
//! thin — parameter parsing, field renaming, and error-to-response mapping
//! live here and nowhere deeper:
//!
//! - [`pages`]: classic form posts with a server-rendered page. Text field
//!   is named `task`; failures render as an error banner.
//! - [`api`]: JSON under `/api/todos`. Text field is named `title`;
//!   failures are `{"error": …}` bodies with a 400 or 404 status.
//!
//! [`state::AppState`] holds the store behind an `RwLock`; [`routes`] wires
//! everything into one axum `Router`.

pub mod api;
pub mod pages;
pub mod render;
pub mod routes;
pub mod state;

pub use routes::build_router;
pub use state::AppState;
