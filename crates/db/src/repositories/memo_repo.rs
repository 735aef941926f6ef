//! Repository for the `memos` table.

use std::sync::Arc;

use memo_core::types::DbId;

use crate::error::DbError;
use crate::models::memo::{Memo, MemoInput};
use crate::storage::{MemoStorage, MemoryMemoStorage, PgMemoStorage};
use crate::DbPool;

const ENTITY: &str = "Memo";

/// Provides CRUD operations for memos over an injected storage backend.
///
/// Cloning is cheap; all clones share the same backend.
#[derive(Clone)]
pub struct MemoRepo {
    storage: Arc<dyn MemoStorage>,
}

impl MemoRepo {
    pub fn new(storage: Arc<dyn MemoStorage>) -> Self {
        Self { storage }
    }

    /// Repository backed by the given PostgreSQL pool.
    pub fn postgres(pool: DbPool) -> Self {
        Self::new(Arc::new(PgMemoStorage::new(pool)))
    }

    /// Repository backed by a fresh, empty in-memory store.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryMemoStorage::new()))
    }

    /// Check that the storage backend is reachable.
    pub async fn ping(&self) -> Result<(), DbError> {
        Ok(self.storage.ping().await?)
    }

    /// List all memos in storage-default order.
    pub async fn list(&self) -> Result<Vec<Memo>, DbError> {
        Ok(self.storage.select_all().await?)
    }

    /// Find a memo by id.
    pub async fn get_by_id(&self, id: DbId) -> Result<Memo, DbError> {
        self.storage
            .select_by_id(id)
            .await?
            .ok_or(DbError::NotFound { entity: ENTITY, id })
    }

    /// Insert a new memo and return it as stored.
    ///
    /// The row is re-fetched after the insert. If it has vanished in between,
    /// the create fails with `DbError::Query(RowNotFound)`.
    pub async fn create(&self, input: &MemoInput) -> Result<Memo, DbError> {
        let id = self.storage.insert(&input.title, &input.content).await?;
        match self.get_by_id(id).await {
            Err(DbError::NotFound { .. }) => Err(DbError::Query(sqlx::Error::RowNotFound)),
            other => other,
        }
    }

    /// Replace the title and content of a memo and return it as stored.
    ///
    /// Zero affected rows is ambiguous: the id may be absent, or the values
    /// may already match. Only the former is `NotFound`.
    pub async fn update(&self, id: DbId, input: &MemoInput) -> Result<Memo, DbError> {
        let affected = self
            .storage
            .update(id, &input.title, &input.content)
            .await?;

        if affected == 0 && self.storage.select_by_id(id).await?.is_none() {
            return Err(DbError::NotFound { entity: ENTITY, id });
        }

        self.get_by_id(id).await
    }

    /// Delete a memo. Returns `NotFound` if no row was removed.
    pub async fn delete(&self, id: DbId) -> Result<(), DbError> {
        let affected = self.storage.delete(id).await?;
        if affected == 0 {
            return Err(DbError::NotFound { entity: ENTITY, id });
        }
        Ok(())
    }
}
