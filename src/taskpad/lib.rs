//! # Taskpad Architecture
//!
//! Taskpad is a small in-memory todo list with a web front door. The core is
//! a **UI-agnostic library**; the HTTP server is just one client of it.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  HTTP Layer (server/, wired by main.rs)                     │
//! │  - Parses requests, renames wire fields, maps errors to     │
//! │    responses (error banner or JSON {error} + status)        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Store Layer (store.rs)                                     │
//! │  - Owns the collection and the id counter                   │
//! │  - The only mutation/query surface: list, filter,           │
//! │    add, edit, delete                                        │
//! │  - Enforces trimming, the duplicate rule, id uniqueness     │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `store.rs` inward, code takes regular arguments and returns regular
//! `Result` values. It never logs, never touches the network, never assumes
//! an HTTP context. The same store could sit behind a CLI or a test harness
//! unchanged — which is exactly how the unit tests drive it.
//!
//! ## Concurrency
//!
//! The store itself is single-threaded and synchronous; every operation runs
//! to completion. The server wraps it in an `RwLock` so reads may overlap
//! each other while mutations serialize (see [`server::state`]).
//!
//! ## Module Overview
//!
//! - [`model`]: Core data types (`Todo`, `Priority`, `PriorityFilter`)
//! - [`store`]: The todo collection and its validation rules
//! - [`server`]: axum routes, handlers, and page rendering
//! - [`config`]: Listen address resolution (defaults, env, CLI)
//! - [`error`]: Error types

pub mod config;
pub mod error;
pub mod model;
pub mod server;
pub mod store;
