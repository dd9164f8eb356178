use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::domain::entities::{Player, PlayerStatus};
use crate::domain::repositories::{PlayerRepository, PlayerWithScore, StoreError};
use crate::infrastructure::database::map_sqlx_err;

/// SQLite implementation of PlayerRepository
pub struct SqlitePlayerRepository {
    pool: SqlitePool,
}

impl SqlitePlayerRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn row_to_player(row: &sqlx::sqlite::SqliteRow) -> Player {
        use sqlx::Row;

        let status_str: String = row.get("status");

        Player {
            id: row.get("id"),
            room_id: row.get("room_id"),
            user_id: row.get("user_id"),
            player_name: row.get("player_name"),
            is_creator: row.get::<i64, _>("is_creator") != 0,
            status: PlayerStatus::from_str(&status_str).unwrap_or(PlayerStatus::Left),
            created_at: row.get("created_at"),
        }
    }
}

#[async_trait]
impl PlayerRepository for SqlitePlayerRepository {
    async fn list_active_with_scores(
        &self,
        room_id: &str,
    ) -> Result<Vec<PlayerWithScore>, StoreError> {
        use sqlx::Row;

        // Current balance is the latest snapshot, 0 before the first entry
        let rows = sqlx::query(
            r#"
            SELECT p.*,
                   COALESCE((
                       SELECT se.current_score
                       FROM score_entries se
                       WHERE se.player_id = p.id
                       ORDER BY se.id DESC
                       LIMIT 1
                   ), 0) AS score
            FROM players p
            WHERE p.room_id = ? AND p.status = 'active'
            ORDER BY p.id ASC
            "#,
        )
        .bind(room_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| StoreError::Database(e.to_string()))?;

        Ok(rows
            .iter()
            .map(|row| PlayerWithScore {
                player: Self::row_to_player(row),
                score: row.get("score"),
            })
            .collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Player>, StoreError> {
        let row = sqlx::query("SELECT * FROM players WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| StoreError::Database(e.to_string()))?;

        Ok(row.as_ref().map(Self::row_to_player))
    }

    async fn find_membership(
        &self,
        room_id: &str,
        user_id: &str,
    ) -> Result<Option<Player>, StoreError> {
        let row = sqlx::query("SELECT * FROM players WHERE room_id = ? AND user_id = ?")
            .bind(room_id)
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| StoreError::Database(e.to_string()))?;

        Ok(row.as_ref().map(Self::row_to_player))
    }

    async fn insert_member(&self, player: &Player) -> Result<Option<Player>, StoreError> {
        // Guarded insert: nothing lands once the room has ended, even if
        // the caller read the room a moment earlier
        let result = sqlx::query(
            r#"
            INSERT INTO players (room_id, user_id, player_name, is_creator, status, created_at)
            SELECT ?, ?, ?, ?, ?, ?
            WHERE EXISTS (SELECT 1 FROM rooms WHERE id = ? AND status = 'active')
            "#,
        )
        .bind(&player.room_id)
        .bind(&player.user_id)
        .bind(&player.player_name)
        .bind(player.is_creator)
        .bind(player.status.as_str())
        .bind(player.created_at)
        .bind(&player.room_id)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_err)?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }

        let mut stored = player.clone();
        stored.id = result.last_insert_rowid();
        Ok(Some(stored))
    }

    async fn reactivate(&self, player_id: i64) -> Result<Option<Player>, StoreError> {
        let result = sqlx::query(
            r#"
            UPDATE players
            SET status = 'active'
            WHERE id = ? AND status = 'left'
              AND EXISTS (SELECT 1 FROM rooms WHERE id = players.room_id AND status = 'active')
            "#,
        )
        .bind(player_id)
        .execute(&self.pool)
        .await
        .map_err(|e| StoreError::Database(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }

        self.find_by_id(player_id).await
    }

    async fn update_name(
        &self,
        player_id: i64,
        player_name: &str,
    ) -> Result<Option<Player>, StoreError> {
        let result = sqlx::query("UPDATE players SET player_name = ? WHERE id = ?")
            .bind(player_name)
            .bind(player_id)
            .execute(&self.pool)
            .await
            .map_err(|e| StoreError::Database(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }

        self.find_by_id(player_id).await
    }

    async fn mark_left(&self, player_id: i64) -> Result<bool, StoreError> {
        let result = sqlx::query("UPDATE players SET status = 'left' WHERE id = ? AND status = 'active'")
            .bind(player_id)
            .execute(&self.pool)
            .await
            .map_err(|e| StoreError::Database(e.to_string()))?;

        Ok(result.rows_affected() > 0)
    }
}
