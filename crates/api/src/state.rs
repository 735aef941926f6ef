use std::sync::Arc;

use memo_db::repositories::MemoRepo;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Memo data access, over whichever storage backend was injected.
    pub memos: MemoRepo,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
