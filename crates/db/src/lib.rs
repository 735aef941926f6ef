//! Data access for the `memos` table.
//!
//! [`repositories::MemoRepo`] implements the memo operations on top of any
//! [`storage::MemoStorage`] backend. The PostgreSQL backend is the one used
//! in production; the in-memory backend stands in for it in tests.

use sqlx::postgres::PgPoolOptions;

pub mod config;
pub mod error;
pub mod models;
pub mod repositories;
pub mod storage;

pub use config::DbConfig;
pub use error::DbError;

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from the database configuration.
pub async fn create_pool(config: &DbConfig) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(config.connect_options()?)
        .await
}

/// Verify the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}
