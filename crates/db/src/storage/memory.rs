use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use memo_core::types::DbId;
use tokio::sync::RwLock;

use super::MemoStorage;
use crate::models::memo::Memo;

/// In-process memo storage.
///
/// Behaves like the `memos` table: ids start at 1 and are never reused,
/// `created_at` is stamped on insert, and updates report changed rows only.
/// Switching it to failing mode makes every call return
/// [`sqlx::Error::PoolClosed`].
#[derive(Debug, Default)]
pub struct MemoryMemoStorage {
    table: RwLock<Table>,
    failing: AtomicBool,
}

#[derive(Debug, Default)]
struct Table {
    rows: BTreeMap<DbId, Memo>,
    last_id: DbId,
}

impl MemoryMemoStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose every call fails as if the pool were closed.
    pub fn failing() -> Self {
        let storage = Self::default();
        storage.set_failing(true);
        storage
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    fn check(&self) -> Result<(), sqlx::Error> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(sqlx::Error::PoolClosed);
        }
        Ok(())
    }
}

#[async_trait]
impl MemoStorage for MemoryMemoStorage {
    async fn ping(&self) -> Result<(), sqlx::Error> {
        self.check()
    }

    async fn select_all(&self) -> Result<Vec<Memo>, sqlx::Error> {
        self.check()?;
        Ok(self.table.read().await.rows.values().cloned().collect())
    }

    async fn select_by_id(&self, id: DbId) -> Result<Option<Memo>, sqlx::Error> {
        self.check()?;
        Ok(self.table.read().await.rows.get(&id).cloned())
    }

    async fn insert(&self, title: &str, content: &str) -> Result<DbId, sqlx::Error> {
        self.check()?;
        let mut table = self.table.write().await;
        table.last_id += 1;
        let id = table.last_id;
        table.rows.insert(
            id,
            Memo {
                id,
                title: title.to_string(),
                content: content.to_string(),
                created_at: Utc::now(),
            },
        );
        Ok(id)
    }

    async fn update(&self, id: DbId, title: &str, content: &str) -> Result<u64, sqlx::Error> {
        self.check()?;
        let mut table = self.table.write().await;
        match table.rows.get_mut(&id) {
            Some(memo) if memo.title != title || memo.content != content => {
                memo.title = title.to_string();
                memo.content = content.to_string();
                Ok(1)
            }
            _ => Ok(0),
        }
    }

    async fn delete(&self, id: DbId) -> Result<u64, sqlx::Error> {
        self.check()?;
        let removed = self.table.write().await.rows.remove(&id);
        Ok(u64::from(removed.is_some()))
    }
}
