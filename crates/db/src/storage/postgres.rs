use async_trait::async_trait;
use memo_core::types::DbId;
use sqlx::PgPool;

use super::MemoStorage;
use crate::models::memo::Memo;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, content, created_at";

/// PostgreSQL-backed memo storage.
#[derive(Clone)]
pub struct PgMemoStorage {
    pool: PgPool,
}

impl PgMemoStorage {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MemoStorage for PgMemoStorage {
    async fn ping(&self) -> Result<(), sqlx::Error> {
        crate::health_check(&self.pool).await
    }

    async fn select_all(&self) -> Result<Vec<Memo>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM memos");
        sqlx::query_as::<_, Memo>(&query)
            .fetch_all(&self.pool)
            .await
    }

    async fn select_by_id(&self, id: DbId) -> Result<Option<Memo>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM memos WHERE id = $1");
        sqlx::query_as::<_, Memo>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    async fn insert(&self, title: &str, content: &str) -> Result<DbId, sqlx::Error> {
        sqlx::query_scalar::<_, DbId>(
            "INSERT INTO memos (title, content) VALUES ($1, $2) RETURNING id",
        )
        .bind(title)
        .bind(content)
        .fetch_one(&self.pool)
        .await
    }

    async fn update(&self, id: DbId, title: &str, content: &str) -> Result<u64, sqlx::Error> {
        // Rows already holding these values are excluded so an identical
        // write reports zero affected rows.
        let result = sqlx::query(
            "UPDATE memos SET title = $2, content = $3
             WHERE id = $1 AND (title, content) IS DISTINCT FROM ($2, $3)",
        )
        .bind(id)
        .bind(title)
        .bind(content)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected())
    }

    async fn delete(&self, id: DbId) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM memos WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}
