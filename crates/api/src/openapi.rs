//! OpenAPI documentation for the memo API.
//!
//! The document is served as JSON at `/api-docs/openapi.json` and rendered
//! by Scalar at `/docs`.

use axum::routing::get;
use axum::{Json, Router};
use memo_db::models::memo::{Memo, MemoInput};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

use crate::error::ErrorResponse;
use crate::handlers::memo;
use crate::state::AppState;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Memo API",
        description = "Create, read, update and delete short text memos."
    ),
    paths(memo::list, memo::get_by_id, memo::create, memo::update, memo::delete),
    components(schemas(Memo, MemoInput, ErrorResponse)),
    tags((name = "memos", description = "Memo management"))
)]
pub struct ApiDoc;

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Mount the OpenAPI document and the interactive reference.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api-docs/openapi.json", get(openapi_json))
        .merge(Scalar::with_url("/docs", ApiDoc::openapi()))
}
