use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool};
use time::OffsetDateTime;

/// Uploaded file owned by a single user.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DataFile {
    pub id: i64,
    pub user_id: i64,
    pub filename: String,
    pub content: String,
    pub created_at: OffsetDateTime,
}

impl DataFile {
    /// Insert a new file for the given owner. Always creates a new row; there
    /// is no de-duplication or overwrite by filename.
    pub async fn create(
        db: &SqlitePool,
        owner_id: i64,
        filename: &str,
        content: &str,
    ) -> anyhow::Result<DataFile> {
        let file = sqlx::query_as::<_, DataFile>(
            r#"
            INSERT INTO data_files (user_id, filename, content, created_at)
            VALUES (?, ?, ?, ?)
            RETURNING id, user_id, filename, content, created_at
            "#,
        )
        .bind(owner_id)
        .bind(filename)
        .bind(content)
        .bind(OffsetDateTime::now_utc())
        .fetch_one(db)
        .await?;
        Ok(file)
    }

    /// List the owner's files in insertion order.
    pub async fn list_for_owner(db: &SqlitePool, owner_id: i64) -> anyhow::Result<Vec<DataFile>> {
        let rows = sqlx::query_as::<_, DataFile>(
            r#"
            SELECT id, user_id, filename, content, created_at
            FROM data_files
            WHERE user_id = ?
            ORDER BY id ASC
            "#,
        )
        .bind(owner_id)
        .fetch_all(db)
        .await?;
        Ok(rows)
    }

    /// Fetch a file by id, but only if it belongs to the given owner. A file
    /// owned by someone else and a nonexistent id are both `None`, so the
    /// response never leaks whether another user's file exists.
    pub async fn find_owned(
        db: &SqlitePool,
        owner_id: i64,
        file_id: i64,
    ) -> anyhow::Result<Option<DataFile>> {
        let file = sqlx::query_as::<_, DataFile>(
            r#"
            SELECT id, user_id, filename, content, created_at
            FROM data_files
            WHERE id = ? AND user_id = ?
            "#,
        )
        .bind(file_id)
        .bind(owner_id)
        .fetch_optional(db)
        .await?;
        Ok(file)
    }
}
