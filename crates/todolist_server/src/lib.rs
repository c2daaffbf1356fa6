//! HTTP surface for the to-do list.
//!
//! # Responsibility
//! - Own server configuration, routing and request handling.
//! - Keep rendering and storage behind `views` and `todolist_core`.

#![forbid(unsafe_code)]

use axum::routing::get;
use axum::Router;
use rusqlite::Connection;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::Mutex;
use tower_http::services::ServeDir;

pub mod config;
pub mod http;
pub mod views;

pub use config::{ConfigError, ServerConfig};

/// Shared state handed to every route handler.
///
/// The connection is process-wide, opened once at startup with migrations
/// applied, and guarded by an async mutex because rusqlite connections are
/// not `Sync`.
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<Mutex<Connection>>,
}

impl AppState {
    pub fn new(conn: Connection) -> Self {
        Self {
            db: Arc::new(Mutex::new(conn)),
        }
    }
}

/// Builds the application router.
///
/// Four dynamic routes plus verbatim static files under `/static`.
pub fn build_router(state: AppState, static_dir: PathBuf) -> Router {
    Router::new()
        .route(
            "/",
            get(http::handlers::list_tasks_handler).post(http::handlers::create_task_handler),
        )
        .route(
            "/edit/:id",
            get(http::handlers::edit_page_handler).post(http::handlers::update_task_handler),
        )
        .route("/remove/:id", get(http::handlers::remove_task_handler))
        .nest_service("/static", ServeDir::new(static_dir))
        .with_state(state)
}
