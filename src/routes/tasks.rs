use actix_web::{delete, get, patch, post, web, HttpResponse, Responder};
use serde_json::json;
use uuid::Uuid;

use crate::auth::AuthenticatedUser;
use crate::error::AppError;
use crate::models::{TaskFilter, TaskInput, TaskUpdate};
use crate::tasks::TaskService;

/// List tasks
///
/// Returns the authenticated user's tasks, newest first. Supports `status`,
/// `priority`, and `search` query parameters, combined with AND;
/// unrecognized parameters are ignored.
#[get("")]
pub async fn list_tasks(
    service: web::Data<TaskService>,
    filter: web::Query<TaskFilter>,
    identity: AuthenticatedUser,
) -> Result<impl Responder, AppError> {
    let tasks = service.list(identity.id, &filter)?;
    let count = tasks.len();
    Ok(HttpResponse::Ok().json(json!({ "tasks": tasks, "count": count })))
}

/// Create a task
///
/// New tasks belong to the authenticated user, start Active, and default to
/// Medium priority when none is given.
#[post("")]
pub async fn create_task(
    service: web::Data<TaskService>,
    payload: web::Json<TaskInput>,
    identity: AuthenticatedUser,
) -> Result<impl Responder, AppError> {
    let task = service.create(identity.id, payload.into_inner())?;
    Ok(HttpResponse::Created().json(json!({ "task": task })))
}

/// Get a task by id
///
/// Answers 404 both when the id is unknown and when the task belongs to a
/// different user.
#[get("/{id}")]
pub async fn get_task(
    service: web::Data<TaskService>,
    task_id: web::Path<Uuid>,
    identity: AuthenticatedUser,
) -> Result<impl Responder, AppError> {
    let task = service.get(task_id.into_inner(), identity.id)?;
    Ok(HttpResponse::Ok().json(json!({ "task": task })))
}

/// Update a task
///
/// Partial update: only the fields present in the body change, everything
/// else keeps its prior value. The update timestamp is always refreshed.
#[patch("/{id}")]
pub async fn update_task(
    service: web::Data<TaskService>,
    task_id: web::Path<Uuid>,
    payload: web::Json<TaskUpdate>,
    identity: AuthenticatedUser,
) -> Result<impl Responder, AppError> {
    let task = service.update(task_id.into_inner(), identity.id, payload.into_inner())?;
    Ok(HttpResponse::Ok().json(json!({ "task": task })))
}

/// Delete a task
#[delete("/{id}")]
pub async fn delete_task(
    service: web::Data<TaskService>,
    task_id: web::Path<Uuid>,
    identity: AuthenticatedUser,
) -> Result<impl Responder, AppError> {
    service.delete(task_id.into_inner(), identity.id)?;
    Ok(HttpResponse::Ok().json(json!({ "message": "Task deleted successfully" })))
}
