//! Professor CRUD handlers: list, create, read, update, delete.

use crate::error::AppError;
use crate::extractors::{JsonBody, ProfessorId};
use crate::model::{CreateProfessorRequest, Professor};
use crate::response::deleted_body;
use crate::state::AppState;
use crate::store::StoreError;
use axum::{
    extract::State,
    http::{Method, StatusCode, Uri},
    Json,
};
use serde_json::Value;

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Professor>>, AppError> {
    let professors = state.store.list_all().await?;
    Ok(Json(professors))
}

pub async fn create(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<CreateProfessorRequest>,
) -> Result<(StatusCode, Json<Professor>), AppError> {
    let mut professor = Professor::from_request(body);
    professor.id = state.store.create(&professor).await?;
    tracing::info!(id = professor.id, "professor created");
    Ok((StatusCode::CREATED, Json(professor)))
}

pub async fn read(
    State(state): State<AppState>,
    ProfessorId(id): ProfessorId,
) -> Result<Json<Professor>, AppError> {
    let professor = state.store.get_by_id(id).await?;
    Ok(Json(professor))
}

/// Replace every mutable field. A missing id is silent success, echoing the payload with the
/// path id and fresh timestamps; with `report_missing_rows` set it is the not-found error.
pub async fn update(
    State(state): State<AppState>,
    ProfessorId(id): ProfessorId,
    JsonBody(body): JsonBody<CreateProfessorRequest>,
) -> Result<Json<Professor>, AppError> {
    let professor = Professor::from_request(body);
    match state.store.update(id, &professor).await? {
        Some(row) => {
            tracing::info!(id, "professor updated");
            Ok(Json(row))
        }
        None if state.api.report_missing_rows => Err(StoreError::NotFound(id).into()),
        None => Ok(Json(Professor { id, ..professor })),
    }
}

pub async fn delete(
    State(state): State<AppState>,
    ProfessorId(id): ProfessorId,
) -> Result<Json<Value>, AppError> {
    let removed = state.store.delete(id).await?;
    if removed == 0 && state.api.report_missing_rows {
        return Err(StoreError::NotFound(id).into());
    }
    tracing::info!(id, removed, "professor deleted");
    Ok(Json(deleted_body(id, state.api.wire_compat)))
}

/// Fallback for verbs not bound on a professor path.
pub async fn method_not_allowed(method: Method) -> AppError {
    AppError::MethodNotAllowed(method)
}

pub async fn no_route(uri: Uri) -> AppError {
    AppError::NoRoute(uri.path().to_string())
}
