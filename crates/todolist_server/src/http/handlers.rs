//! Route handlers for the CRUD surface.
//!
//! # Responsibility
//! - Map each route to exactly one storage operation and one response mode.
//!
//! # Invariants
//! - Reads render HTML; successful writes redirect to `/` (303).
//! - Create failures are swallowed behind a redirect; update/delete failures
//!   surface as a 500 with the error text.

use crate::views;
use crate::AppState;
use axum::extract::{Form, Path, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use log::{info, warn};
use serde::Deserialize;
use todolist_core::{SqliteTaskRepository, TaskId, TaskService};
use uuid::Uuid;

/// Form body shared by the create and edit routes.
///
/// `content` defaults to empty so a missing field surfaces as a validation
/// error instead of a rejected request.
#[derive(Debug, Deserialize)]
pub struct TaskForm {
    #[serde(default)]
    pub content: String,
}

/// `GET /` — render the list view with all tasks.
pub async fn list_tasks_handler(State(state): State<AppState>) -> Response {
    let conn = state.db.lock().await;
    let service = TaskService::new(SqliteTaskRepository::new(&conn));

    match service.list_all() {
        Ok(tasks) => Html(views::render_task_list(&tasks)).into_response(),
        Err(err) => storage_error_response(err.to_string()),
    }
}

/// `POST /` — insert a new task, then redirect to `/`.
///
/// Failures are intentionally swallowed: the user is redirected as if the
/// write succeeded, and the outcome is only visible in the refreshed list.
pub async fn create_task_handler(
    State(state): State<AppState>,
    Form(form): Form<TaskForm>,
) -> Redirect {
    let conn = state.db.lock().await;
    let service = TaskService::new(SqliteTaskRepository::new(&conn));

    match service.create(form.content) {
        Ok(id) => info!("event=task_create module=http status=ok id={id}"),
        Err(err) => warn!("event=task_create module=http status=swallowed error={err}"),
    }

    Redirect::to("/")
}

/// `GET /edit/:id` — render the edit view with all tasks and the target id.
///
/// The id is passed through to the view untouched; an id that matches no
/// task simply renders a page without an inline edit form.
pub async fn edit_page_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Response {
    let conn = state.db.lock().await;
    let service = TaskService::new(SqliteTaskRepository::new(&conn));

    match service.list_all() {
        Ok(tasks) => Html(views::render_task_edit(&tasks, &id)).into_response(),
        Err(err) => storage_error_response(err.to_string()),
    }
}

/// `POST /edit/:id` — replace the task's content, then redirect to `/`.
pub async fn update_task_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Form(form): Form<TaskForm>,
) -> Response {
    let id = match parse_task_id(&id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let conn = state.db.lock().await;
    let service = TaskService::new(SqliteTaskRepository::new(&conn));

    match service.update_content(id, &form.content) {
        Ok(()) => {
            info!("event=task_update module=http status=ok id={id}");
            Redirect::to("/").into_response()
        }
        Err(err) => {
            warn!("event=task_update module=http status=error id={id} error={err}");
            storage_error_response(err.to_string())
        }
    }
}

/// `GET /remove/:id` — delete the task, then redirect to `/`.
pub async fn remove_task_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Response {
    let id = match parse_task_id(&id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let conn = state.db.lock().await;
    let service = TaskService::new(SqliteTaskRepository::new(&conn));

    match service.delete(id) {
        Ok(()) => {
            info!("event=task_remove module=http status=ok id={id}");
            Redirect::to("/").into_response()
        }
        Err(err) => {
            warn!("event=task_remove module=http status=error id={id} error={err}");
            storage_error_response(err.to_string())
        }
    }
}

// An unparsable id behaves like any other storage failure on the mutating
// routes: the row it names cannot exist.
fn parse_task_id(raw: &str) -> Result<TaskId, Response> {
    Uuid::parse_str(raw)
        .map_err(|_| storage_error_response(format!("invalid task id: {raw}")))
}

fn storage_error_response(message: String) -> Response {
    (StatusCode::INTERNAL_SERVER_ERROR, message).into_response()
}
