pub mod repositories;
pub mod schema;

use crate::domain::repositories::StoreError;

/// Map a sqlx error, keeping uniqueness violations distinguishable so
/// callers can retry their compare-and-swap inserts
pub(crate) fn map_sqlx_err(e: sqlx::Error) -> StoreError {
    match &e {
        sqlx::Error::Database(db)
            if matches!(db.kind(), sqlx::error::ErrorKind::UniqueViolation) =>
        {
            StoreError::UniqueViolation(db.message().to_string())
        }
        _ => StoreError::Database(e.to_string()),
    }
}
