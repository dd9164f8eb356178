use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::domain::entities::{Room, RoomStatus};
use crate::domain::repositories::{ActiveMembership, RoomPage, RoomRepository, StoreError};
use crate::infrastructure::database::map_sqlx_err;

/// SQLite implementation of RoomRepository
pub struct SqliteRoomRepository {
    pool: SqlitePool,
}

impl SqliteRoomRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn row_to_room(row: &sqlx::sqlite::SqliteRow) -> Room {
        use sqlx::Row;

        let status_str: String = row.get("status");

        Room {
            id: row.get("id"),
            room_code: row.get("room_code"),
            room_name: row.get("room_name"),
            creator_id: row.get("creator_id"),
            // Unknown status reads as ended, which keeps the room unjoinable
            status: RoomStatus::from_str(&status_str).unwrap_or(RoomStatus::Ended),
            created_at: row.get("created_at"),
            ended_at: row.get("ended_at"),
        }
    }
}

#[async_trait]
impl RoomRepository for SqliteRoomRepository {
    async fn create_with_creator(
        &self,
        room: &Room,
        creator_name: &str,
    ) -> Result<(), StoreError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| StoreError::Database(e.to_string()))?;

        // The partial unique index on active codes rejects a duplicate
        // here; callers regenerate and retry
        sqlx::query(
            r#"
            INSERT INTO rooms (id, room_code, room_name, creator_id, status, created_at, ended_at)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&room.id)
        .bind(&room.room_code)
        .bind(&room.room_name)
        .bind(&room.creator_id)
        .bind(room.status.as_str())
        .bind(room.created_at)
        .bind(room.ended_at)
        .execute(&mut *tx)
        .await
        .map_err(map_sqlx_err)?;

        sqlx::query(
            r#"
            INSERT INTO players (room_id, user_id, player_name, is_creator, status, created_at)
            VALUES (?, ?, ?, 1, 'active', ?)
            "#,
        )
        .bind(&room.id)
        .bind(&room.creator_id)
        .bind(creator_name)
        .bind(room.created_at)
        .execute(&mut *tx)
        .await
        .map_err(|e| StoreError::Database(e.to_string()))?;

        tx.commit()
            .await
            .map_err(|e| StoreError::Database(e.to_string()))?;

        Ok(())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Room>, StoreError> {
        let row = sqlx::query("SELECT * FROM rooms WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| StoreError::Database(e.to_string()))?;

        Ok(row.as_ref().map(Self::row_to_room))
    }

    async fn find_active_by_code(&self, code: &str) -> Result<Option<Room>, StoreError> {
        let row = sqlx::query("SELECT * FROM rooms WHERE room_code = ? AND status = 'active'")
            .bind(code)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| StoreError::Database(e.to_string()))?;

        Ok(row.as_ref().map(Self::row_to_room))
    }

    async fn end_room(&self, id: &str, ended_at: i64) -> Result<bool, StoreError> {
        // Conditional update: a room racing with a transfer or join either
        // ends after it or rejects it, never halfway
        let result = sqlx::query(
            "UPDATE rooms SET status = 'ended', ended_at = ? WHERE id = ? AND status = 'active'",
        )
        .bind(ended_at)
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| StoreError::Database(e.to_string()))?;

        Ok(result.rows_affected() > 0)
    }

    async fn find_user_rooms(
        &self,
        user_id: &str,
        limit: u32,
        offset: u64,
    ) -> Result<RoomPage, StoreError> {
        use sqlx::Row;

        // A negative LIMIT means unlimited to SQLite, so bind as i64;
        // an offset past i64 lands on an empty page either way
        let limit = i64::from(limit);
        let offset = i64::try_from(offset).unwrap_or(i64::MAX);

        // A user has at most one membership row per room, so the join
        // never multiplies rooms
        let rows = sqlx::query(
            r#"
            SELECT r.*
            FROM rooms r
            LEFT JOIN players p ON p.room_id = r.id AND p.user_id = ?
            WHERE r.creator_id = ? OR p.id IS NOT NULL
            ORDER BY CASE WHEN r.status = 'active' THEN 0 ELSE 1 END,
                     r.created_at DESC,
                     r.rowid DESC
            LIMIT ? OFFSET ?
            "#,
        )
        .bind(user_id)
        .bind(user_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| StoreError::Database(e.to_string()))?;

        let total_row = sqlx::query(
            r#"
            SELECT COUNT(*) AS total
            FROM rooms r
            LEFT JOIN players p ON p.room_id = r.id AND p.user_id = ?
            WHERE r.creator_id = ? OR p.id IS NOT NULL
            "#,
        )
        .bind(user_id)
        .bind(user_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| StoreError::Database(e.to_string()))?;

        let total: i64 = total_row.get("total");

        Ok(RoomPage {
            rooms: rows.iter().map(Self::row_to_room).collect(),
            total: total as usize,
        })
    }

    async fn find_active_membership(
        &self,
        user_id: &str,
    ) -> Result<Option<ActiveMembership>, StoreError> {
        use sqlx::Row;

        // Most recent join wins when a user somehow sits in several
        // active rooms
        let row = sqlx::query(
            r#"
            SELECT r.id AS room_id, r.room_code, r.room_name
            FROM players p
            JOIN rooms r ON r.id = p.room_id
            WHERE p.user_id = ? AND p.status = 'active' AND r.status = 'active'
            ORDER BY p.id DESC
            LIMIT 1
            "#,
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| StoreError::Database(e.to_string()))?;

        Ok(row.map(|row| ActiveMembership {
            room_id: row.get("room_id"),
            room_code: row.get("room_code"),
            room_name: row.get("room_name"),
        }))
    }
}
