use sqlx::{Error as SqlxError, error::DatabaseError};
use thiserror::Error;

// SQLITE_CONSTRAINT_TRIGGER: raised instead of SQLITE_CONSTRAINT_FOREIGNKEY
// when a RESTRICT action rejects the delete.
const SQLITE_CONSTRAINT_TRIGGER: &str = "1811";

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    Sqlx(SqlxError),

    #[error("Not found")]
    NotFound,

    #[error("Already exists: {0}")]
    AlreadyExists(String),

    #[error("Foreign key violation: {0}")]
    ForeignKey(String),
}

fn is_foreign_key_error(db_err: &dyn DatabaseError) -> bool {
    db_err.is_foreign_key_violation()
        || (db_err.code().as_deref() == Some(SQLITE_CONSTRAINT_TRIGGER)
            && db_err.message().contains("FOREIGN KEY constraint failed"))
}

impl From<SqlxError> for RepositoryError {
    fn from(err: SqlxError) -> Self {
        match err {
            SqlxError::RowNotFound => RepositoryError::NotFound,
            SqlxError::Database(ref db_err) if db_err.is_unique_violation() => {
                RepositoryError::AlreadyExists(db_err.message().to_string())
            }
            SqlxError::Database(ref db_err) if is_foreign_key_error(db_err.as_ref()) => {
                RepositoryError::ForeignKey(db_err.message().to_string())
            }
            other => RepositoryError::Sqlx(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ConnectionManager, ConnectionPool};

    async fn parent_child(on_delete: &str) -> ConnectionPool {
        let pool = ConnectionManager::in_memory().await.unwrap();
        sqlx::query("CREATE TABLE parent (id INTEGER PRIMARY KEY, code TEXT NOT NULL UNIQUE)")
            .execute(&pool)
            .await
            .unwrap();
        sqlx::query(&format!(
            "CREATE TABLE child (id INTEGER PRIMARY KEY, parent_id INTEGER NOT NULL REFERENCES parent(id) {on_delete})"
        ))
        .execute(&pool)
        .await
        .unwrap();
        sqlx::query("INSERT INTO parent (id, code) VALUES (1, 'a')")
            .execute(&pool)
            .await
            .unwrap();
        sqlx::query("INSERT INTO child (id, parent_id) VALUES (1, 1)")
            .execute(&pool)
            .await
            .unwrap();
        pool
    }

    async fn delete_parent(pool: &ConnectionPool) -> RepositoryError {
        let err = sqlx::query("DELETE FROM parent WHERE id = 1")
            .execute(pool)
            .await
            .unwrap_err();
        RepositoryError::from(err)
    }

    #[tokio::test]
    async fn referenced_delete_is_a_foreign_key_error() {
        let pool = parent_child("").await;
        assert!(matches!(delete_parent(&pool).await, RepositoryError::ForeignKey(_)));
    }

    #[tokio::test]
    async fn restrict_action_is_a_foreign_key_error_too() {
        let pool = parent_child("ON DELETE RESTRICT").await;
        assert!(matches!(delete_parent(&pool).await, RepositoryError::ForeignKey(_)));
    }

    #[tokio::test]
    async fn dangling_insert_is_a_foreign_key_error() {
        let pool = parent_child("").await;
        let err = sqlx::query("INSERT INTO child (id, parent_id) VALUES (2, 99)")
            .execute(&pool)
            .await
            .unwrap_err();
        assert!(matches!(RepositoryError::from(err), RepositoryError::ForeignKey(_)));
    }

    #[tokio::test]
    async fn duplicate_key_is_already_exists() {
        let pool = parent_child("").await;
        let err = sqlx::query("INSERT INTO parent (id, code) VALUES (2, 'a')")
            .execute(&pool)
            .await
            .unwrap_err();
        assert!(matches!(RepositoryError::from(err), RepositoryError::AlreadyExists(_)));
    }

    #[test]
    fn missing_row_is_not_found() {
        assert!(matches!(
            RepositoryError::from(SqlxError::RowNotFound),
            RepositoryError::NotFound
        ));
    }
}
