pub mod health;
pub mod memo;

use axum::Router;

use crate::state::AppState;

/// Build the resource route tree.
///
/// ```text
/// /memos                                           list, create
/// /memos/{id}                                      get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().merge(memo::router())
}
