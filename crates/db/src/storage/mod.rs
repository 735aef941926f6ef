//! Storage backends for the `memos` table.
//!
//! [`MemoStorage`] is statement-level: each method is one round trip to the
//! backing store and knows nothing about not-found semantics. Those live in
//! [`crate::repositories::MemoRepo`].

use async_trait::async_trait;
use memo_core::types::DbId;

use crate::models::memo::Memo;

mod memory;
mod postgres;

pub use memory::MemoryMemoStorage;
pub use postgres::PgMemoStorage;

/// A backing store for memo rows.
///
/// Implementations must be safe to share across concurrently running
/// request tasks.
#[async_trait]
pub trait MemoStorage: Send + Sync {
    /// Check that the store is reachable.
    async fn ping(&self) -> Result<(), sqlx::Error>;

    /// Fetch every row, in storage-default order.
    async fn select_all(&self) -> Result<Vec<Memo>, sqlx::Error>;

    /// Fetch the row with the given id, if any.
    async fn select_by_id(&self, id: DbId) -> Result<Option<Memo>, sqlx::Error>;

    /// Insert a row and return the id assigned by the store.
    async fn insert(&self, title: &str, content: &str) -> Result<DbId, sqlx::Error>;

    /// Overwrite `title` and `content` of the row with the given id.
    ///
    /// Returns the number of rows whose values actually changed, so writing
    /// back identical values reports 0.
    async fn update(&self, id: DbId, title: &str, content: &str) -> Result<u64, sqlx::Error>;

    /// Delete the row with the given id. Returns the number of rows removed.
    async fn delete(&self, id: DbId) -> Result<u64, sqlx::Error>;
}
