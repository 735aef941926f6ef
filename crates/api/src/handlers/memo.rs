//! Handlers for the `/memos` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use memo_db::models::memo::{Memo, MemoInput};

use crate::error::{AppResult, ErrorResponse};
use crate::extract::{AppJson, PathId};
use crate::state::AppState;

/// GET /memos
#[utoipa::path(
    get,
    path = "/memos",
    tag = "memos",
    summary = "List memos",
    responses(
        (status = 200, description = "All memos", body = [Memo]),
        (status = 500, description = "Storage failure", body = ErrorResponse),
    )
)]
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Memo>>> {
    let memos = state.memos.list().await?;
    Ok(Json(memos))
}

/// GET /memos/{id}
#[utoipa::path(
    get,
    path = "/memos/{id}",
    tag = "memos",
    summary = "Get a memo",
    params(("id" = i64, Path, description = "Memo id")),
    responses(
        (status = 200, description = "The memo", body = Memo),
        (status = 400, description = "Malformed id", body = ErrorResponse),
        (status = 404, description = "No memo with this id", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse),
    )
)]
pub async fn get_by_id(
    State(state): State<AppState>,
    PathId(id): PathId,
) -> AppResult<Json<Memo>> {
    let memo = state.memos.get_by_id(id).await?;
    Ok(Json(memo))
}

/// POST /memos
#[utoipa::path(
    post,
    path = "/memos",
    tag = "memos",
    summary = "Create a memo",
    request_body = MemoInput,
    responses(
        (status = 201, description = "The created memo", body = Memo),
        (status = 400, description = "Malformed body", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse),
    )
)]
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<MemoInput>,
) -> AppResult<(StatusCode, Json<Memo>)> {
    let memo = state.memos.create(&input).await?;
    Ok((StatusCode::CREATED, Json(memo)))
}

/// PUT /memos/{id}
///
/// Writing back the current values is a successful no-op, not a 404.
#[utoipa::path(
    put,
    path = "/memos/{id}",
    tag = "memos",
    summary = "Update a memo",
    params(("id" = i64, Path, description = "Memo id")),
    request_body = MemoInput,
    responses(
        (status = 200, description = "The updated memo", body = Memo),
        (status = 400, description = "Malformed id or body", body = ErrorResponse),
        (status = 404, description = "No memo with this id", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse),
    )
)]
pub async fn update(
    State(state): State<AppState>,
    PathId(id): PathId,
    AppJson(input): AppJson<MemoInput>,
) -> AppResult<Json<Memo>> {
    let memo = state.memos.update(id, &input).await?;
    Ok(Json(memo))
}

/// DELETE /memos/{id}
#[utoipa::path(
    delete,
    path = "/memos/{id}",
    tag = "memos",
    summary = "Delete a memo",
    params(("id" = i64, Path, description = "Memo id")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 400, description = "Malformed id", body = ErrorResponse),
        (status = 404, description = "No memo with this id", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse),
    )
)]
pub async fn delete(State(state): State<AppState>, PathId(id): PathId) -> AppResult<StatusCode> {
    state.memos.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
