use std::sync::Arc;

use tracing::debug;

use crate::core::error::{AppError, AppResult};
use crate::core::types::Board;
use crate::storage::database::Database;

/// Data access for the `board` table.
///
/// Holds nothing but the database handle; every call is a single SQL
/// statement with no surrounding transaction.
pub struct BoardStore {
    db: Arc<Database>,
}

impl BoardStore {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// Insert a new board and return its generated id.
    pub async fn save(&self, title: &str, content: &str, username: &str) -> AppResult<i64> {
        debug!(title, content, username, "Saving board");

        let result = sqlx::query("INSERT INTO board (title, content, username) VALUES (?, ?, ?)")
            .bind(title)
            .bind(content)
            .bind(username)
            .execute(self.db.pool())
            .await?;

        Ok(result.last_insert_rowid())
    }

    /// All boards, newest first.
    pub async fn find_all(&self) -> AppResult<Vec<Board>> {
        let boards = sqlx::query_as::<_, Board>(
            "SELECT id, title, content, username, created_at, updated_at FROM board ORDER BY id DESC",
        )
        .fetch_all(self.db.pool())
        .await?;

        debug!(count = boards.len(), "Loaded boards");
        Ok(boards)
    }

    /// Fails with [`AppError::NotFound`] when no row has this id.
    pub async fn find_by_id(&self, id: i64) -> AppResult<Board> {
        sqlx::query_as::<_, Board>(
            "SELECT id, title, content, username, created_at, updated_at FROM board WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(self.db.pool())
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Board {} not found", id)))
    }

    /// Overwrite title, content and username of an existing board.
    ///
    /// Fails with [`AppError::NotFound`] when no row has this id.
    pub async fn update_by_id(
        &self,
        id: i64,
        title: &str,
        content: &str,
        username: &str,
    ) -> AppResult<()> {
        debug!(id, title, content, username, "Updating board");

        let result = sqlx::query(
            r#"
            UPDATE board
            SET title = ?, content = ?, username = ?, updated_at = CURRENT_TIMESTAMP
            WHERE id = ?
            "#,
        )
        .bind(title)
        .bind(content)
        .bind(username)
        .bind(id)
        .execute(self.db.pool())
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Board {} not found", id)));
        }

        Ok(())
    }

    /// Delete a board. Deleting a missing id is not an error.
    pub async fn delete_by_id(&self, id: i64) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM board WHERE id = ?")
            .bind(id)
            .execute(self.db.pool())
            .await?;

        debug!(id, deleted = result.rows_affected(), "Deleted board");
        Ok(())
    }
}
