//! Memo entity model and DTOs.

use memo_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::postgres::PgRow;
use sqlx::{FromRow, Row};
use utoipa::ToSchema;

/// A memo row from the `memos` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Memo {
    #[schema(value_type = i64, example = 1)]
    pub id: DbId,
    pub title: String,
    pub content: String,
    #[schema(value_type = String, format = DateTime)]
    pub created_at: Timestamp,
}

/// The single row-to-entity mapping used by every read path.
impl<'r> FromRow<'r, PgRow> for Memo {
    fn from_row(row: &'r PgRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            title: row.try_get("title")?,
            content: row.try_get("content")?,
            created_at: row.try_get("created_at")?,
        })
    }
}

/// DTO for creating or replacing a memo. Both fields are required.
///
/// `id` and `created_at` are server-owned; if a client sends them they are
/// ignored.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct MemoInput {
    #[schema(example = "Groceries")]
    pub title: String,
    #[schema(example = "Milk, eggs, coffee")]
    pub content: String,
}

impl MemoInput {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }
}
