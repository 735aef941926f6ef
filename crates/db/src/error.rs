use memo_core::types::DbId;

/// Failure of a data access operation.
///
/// Callers branch on the variant; `NotFound` is never inferred from the
/// text of a storage error.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Query failed: {0}")]
    Query(#[from] sqlx::Error),
}
