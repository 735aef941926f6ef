//! Route definitions for the `/memos` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::memo;
use crate::state::AppState;

/// Memo routes.
///
/// ```text
/// GET    /memos                             -> list
/// POST   /memos                             -> create
/// GET    /memos/{id}                        -> get_by_id
/// PUT    /memos/{id}                        -> update
/// DELETE /memos/{id}                        -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/memos", get(memo::list).post(memo::create))
        .route(
            "/memos/{id}",
            get(memo::get_by_id)
                .put(memo::update)
                .delete(memo::delete),
        )
}
