use async_trait::async_trait;

use crate::domain::entities::Player;
use crate::domain::repositories::StoreError;

/// Player annotated with their current balance: the latest ledger
/// snapshot, 0 when the ledger holds no entries for them
#[derive(Debug, Clone)]
pub struct PlayerWithScore {
    pub player: Player,
    pub score: i64,
}

/// Player repository trait
#[async_trait]
pub trait PlayerRepository: Send + Sync {
    /// Active players in join order, each with their current balance
    async fn list_active_with_scores(
        &self,
        room_id: &str,
    ) -> Result<Vec<PlayerWithScore>, StoreError>;

    /// Find player by ID, any status
    async fn find_by_id(&self, id: i64) -> Result<Option<Player>, StoreError>;

    /// The user's membership row in this room, any status
    async fn find_membership(
        &self,
        room_id: &str,
        user_id: &str,
    ) -> Result<Option<Player>, StoreError>;

    /// Insert a membership row, conditioned on the room still being
    /// active. Returns the stored row, None when the room is not active.
    async fn insert_member(&self, player: &Player) -> Result<Option<Player>, StoreError>;

    /// Reactivate a left row in place (same id, same name), conditioned
    /// on the room still being active. None when the guard fails.
    async fn reactivate(&self, player_id: i64) -> Result<Option<Player>, StoreError>;

    /// Rename a player. Returns the updated row, None when absent.
    async fn update_name(
        &self,
        player_id: i64,
        player_name: &str,
    ) -> Result<Option<Player>, StoreError>;

    /// Soft delete: flip an active row to left. Ok(false) when the row
    /// was already left.
    async fn mark_left(&self, player_id: i64) -> Result<bool, StoreError>;
}
