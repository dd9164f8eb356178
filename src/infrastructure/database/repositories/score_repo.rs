use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use sqlx::SqlitePool;
use tokio::sync::Mutex;

use crate::domain::entities::ScoreEntry;
use crate::domain::repositories::{ScoreEntryDetail, ScoreRepository, StoreError, TransferError};

/// SQLite implementation of ScoreRepository.
///
/// Transfers within one room are serialized behind a per-room async
/// mutex held across the whole read-balances/write-pair transaction:
/// two transfers touching the same player must not interleave between
/// the balance read and the entry write. Different rooms proceed
/// concurrently.
pub struct SqliteScoreRepository {
    pool: SqlitePool,
    room_locks: Mutex<HashMap<String, Arc<Mutex<()>>>>,
}

impl SqliteScoreRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            pool,
            room_locks: Mutex::new(HashMap::new()),
        }
    }

    async fn room_lock(&self, room_id: &str) -> Arc<Mutex<()>> {
        let mut locks = self.room_locks.lock().await;
        // An entry only the map holds has no transfer behind it; sweep
        // those so ended rooms don't pin locks forever
        locks.retain(|_, lock| Arc::strong_count(lock) > 1);
        locks
            .entry(room_id.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }

    fn row_to_entry(row: &sqlx::sqlite::SqliteRow) -> ScoreEntry {
        use sqlx::Row;

        ScoreEntry {
            id: row.get("id"),
            room_id: row.get("room_id"),
            player_id: row.get("player_id"),
            score_change: row.get("score_change"),
            current_score: row.get("current_score"),
            giver_id: row.get("giver_id"),
            created_at: row.get("created_at"),
        }
    }

    async fn insert_entry(
        tx: &mut sqlx::Transaction<'_, sqlx::Sqlite>,
        entry: &ScoreEntry,
    ) -> Result<i64, StoreError> {
        let result = sqlx::query(
            r#"
            INSERT INTO score_entries (room_id, player_id, score_change, current_score, giver_id, created_at)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&entry.room_id)
        .bind(entry.player_id)
        .bind(entry.score_change)
        .bind(entry.current_score)
        .bind(entry.giver_id)
        .bind(entry.created_at)
        .execute(&mut **tx)
        .await
        .map_err(|e| StoreError::Database(e.to_string()))?;

        Ok(result.last_insert_rowid())
    }
}

#[async_trait]
impl ScoreRepository for SqliteScoreRepository {
    async fn record_transfer(
        &self,
        room_id: &str,
        recipient_player_id: i64,
        acting_user_id: &str,
        delta: i64,
    ) -> Result<(ScoreEntry, ScoreEntry), TransferError> {
        use sqlx::Row;

        // One transfer at a time per room
        let lock = self.room_lock(room_id).await;
        let _guard = lock.lock().await;

        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| StoreError::Database(e.to_string()))?;

        // The room must still be active; an end that raced us wins
        let room_status: Option<String> = sqlx::query_scalar("SELECT status FROM rooms WHERE id = ?")
            .bind(room_id)
            .fetch_optional(&mut *tx)
            .await
            .map_err(|e| StoreError::Database(e.to_string()))?;

        match room_status.as_deref() {
            None => return Err(TransferError::RoomNotFound),
            Some("active") => {}
            Some(_) => return Err(TransferError::RoomEnded),
        }

        // The acting user funds the transfer; they need an active player
        // row here to have any standing
        let actor_row = sqlx::query(
            r#"
            SELECT p.id,
                   COALESCE((
                       SELECT se.current_score
                       FROM score_entries se
                       WHERE se.player_id = p.id
                       ORDER BY se.id DESC
                       LIMIT 1
                   ), 0) AS balance
            FROM players p
            WHERE p.room_id = ? AND p.user_id = ? AND p.status = 'active'
            "#,
        )
        .bind(room_id)
        .bind(acting_user_id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| StoreError::Database(e.to_string()))?
        .ok_or(TransferError::ActorNotInRoom)?;

        let actor_id: i64 = actor_row.get("id");
        let actor_balance: i64 = actor_row.get("balance");

        if actor_id == recipient_player_id {
            return Err(TransferError::SelfTransfer);
        }

        let recipient_row = sqlx::query(
            r#"
            SELECT p.id,
                   COALESCE((
                       SELECT se.current_score
                       FROM score_entries se
                       WHERE se.player_id = p.id
                       ORDER BY se.id DESC
                       LIMIT 1
                   ), 0) AS balance
            FROM players p
            WHERE p.id = ? AND p.room_id = ? AND p.status = 'active'
            "#,
        )
        .bind(recipient_player_id)
        .bind(room_id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| StoreError::Database(e.to_string()))?
        .ok_or(TransferError::RecipientNotInRoom)?;

        let recipient_balance: i64 = recipient_row.get("balance");

        // A balance leaving i64 range rejects the whole transfer;
        // i64::MIN also has no negation for the giver's row
        let giver_change = delta
            .checked_neg()
            .ok_or(TransferError::BalanceOutOfRange)?;
        let recipient_score = recipient_balance
            .checked_add(delta)
            .ok_or(TransferError::BalanceOutOfRange)?;
        let actor_score = actor_balance
            .checked_sub(delta)
            .ok_or(TransferError::BalanceOutOfRange)?;

        // Both rows or neither: recipient +delta, giver -delta, each
        // snapshotting its own balance after the move
        let mut recipient_entry = ScoreEntry::new(
            room_id.to_string(),
            recipient_player_id,
            delta,
            recipient_score,
            Some(actor_id),
        );
        let mut giver_entry = ScoreEntry::new(
            room_id.to_string(),
            actor_id,
            giver_change,
            actor_score,
            Some(actor_id),
        );

        recipient_entry.id = Self::insert_entry(&mut tx, &recipient_entry).await?;
        giver_entry.id = Self::insert_entry(&mut tx, &giver_entry).await?;

        tx.commit()
            .await
            .map_err(|e| StoreError::Database(e.to_string()))?;

        Ok((recipient_entry, giver_entry))
    }

    async fn room_history(&self, room_id: &str) -> Result<Vec<ScoreEntryDetail>, StoreError> {
        use sqlx::Row;

        let rows = sqlx::query(
            r#"
            SELECT se.*,
                   p.player_name AS player_name,
                   g.player_name AS giver_name
            FROM score_entries se
            JOIN players p ON p.id = se.player_id
            LEFT JOIN players g ON g.id = se.giver_id
            WHERE se.room_id = ?
            ORDER BY se.id DESC
            "#,
        )
        .bind(room_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| StoreError::Database(e.to_string()))?;

        Ok(rows
            .iter()
            .map(|row| ScoreEntryDetail {
                entry: Self::row_to_entry(row),
                player_name: row.get("player_name"),
                giver_name: row.get("giver_name"),
            })
            .collect())
    }

    async fn player_history(&self, player_id: i64) -> Result<Vec<ScoreEntry>, StoreError> {
        let rows = sqlx::query("SELECT * FROM score_entries WHERE player_id = ? ORDER BY id DESC")
            .bind(player_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| StoreError::Database(e.to_string()))?;

        Ok(rows.iter().map(Self::row_to_entry).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn idle_room_locks_are_swept() {
        let pool = SqlitePool::connect_lazy("sqlite::memory:").expect("lazy pool");
        let repo = SqliteScoreRepository::new(pool);

        let held = repo.room_lock("room-a").await;
        let released = repo.room_lock("room-b").await;
        drop(released);

        // The next acquisition sweeps entries no caller holds anymore
        let _current = repo.room_lock("room-c").await;

        let locks = repo.room_locks.lock().await;
        assert!(locks.contains_key("room-a"));
        assert!(!locks.contains_key("room-b"));
        assert!(locks.contains_key("room-c"));
        drop(locks);
        drop(held);
    }
}
