//! Record endpoints. Paths and verbs match what existing front ends call.

use axum::{
    extract::{Path, State},
    Json,
};
use models::student::{Model, StudentChanges, StudentDraft};

use crate::{errors::JsonApiError, state::ServerState};

#[utoipa::path(
    get, path = "/getUsers", tag = "students",
    responses(
        (status = 200, description = "All records in insertion order", body = [crate::openapi::StudentDoc]),
        (status = 500, description = "List Failed")
    )
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<Model>>, JsonApiError> {
    state
        .students
        .list()
        .await
        .map(Json)
        .map_err(|e| JsonApiError::from_service(state.error_status, "List Failed", e))
}

#[utoipa::path(
    post, path = "/createUser", tag = "students",
    request_body = crate::openapi::StudentDraftDoc,
    responses(
        (status = 200, description = "Created record with its new id", body = crate::openapi::StudentDoc),
        (status = 500, description = "Create Failed")
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    Json(draft): Json<StudentDraft>,
) -> Result<Json<Model>, JsonApiError> {
    state
        .students
        .create(draft)
        .await
        .map(Json)
        .map_err(|e| JsonApiError::from_service(state.error_status, "Create Failed", e))
}

#[utoipa::path(
    put, path = "/updateUser/{id}", tag = "students",
    params(("id" = String, Path, description = "Record id")),
    request_body = crate::openapi::StudentChangesDoc,
    responses(
        (status = 200, description = "Updated record, or null when the id is unknown", body = crate::openapi::StudentDoc),
        (status = 400, description = "Malformed id"),
        (status = 500, description = "Update Failed")
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(changes): Json<StudentChanges>,
) -> Result<Json<Option<Model>>, JsonApiError> {
    state
        .students
        .update(&id, changes)
        .await
        .map(Json)
        .map_err(|e| JsonApiError::from_service(state.error_status, "Update Failed", e))
}

#[utoipa::path(
    delete, path = "/deleteUser/{id}", tag = "students",
    params(("id" = String, Path, description = "Record id")),
    responses(
        (status = 200, description = "Record as it was before deletion, or null", body = crate::openapi::StudentDoc),
        (status = 400, description = "Malformed id"),
        (status = 500, description = "Delete Failed")
    )
)]
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<Json<Option<Model>>, JsonApiError> {
    state
        .students
        .delete(&id)
        .await
        .map(Json)
        .map_err(|e| JsonApiError::from_service(state.error_status, "Delete Failed", e))
}
