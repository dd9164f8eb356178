use async_trait::async_trait;

use crate::domain::entities::ScoreEntry;
use crate::domain::repositories::StoreError;

/// Ledger entry joined with display names for history reads. Flattens
/// to one object, the shape clients of the embedding layer expect.
#[derive(Debug, Clone, serde::Serialize)]
pub struct ScoreEntryDetail {
    #[serde(flatten)]
    pub entry: ScoreEntry,
    pub player_name: String,
    pub giver_name: Option<String>,
}

/// Why a transfer could not be recorded. Everything but `Store` is
/// decided inside the transfer transaction, where the row states are
/// authoritative.
#[derive(Debug, thiserror::Error)]
pub enum TransferError {
    #[error("Room not found")]
    RoomNotFound,
    #[error("Room has ended")]
    RoomEnded,
    #[error("Acting user holds no active player in this room")]
    ActorNotInRoom,
    #[error("Recipient is not an active player in this room")]
    RecipientNotInRoom,
    #[error("Transfer recipient and giver are the same player")]
    SelfTransfer,
    #[error("Transfer would move a balance out of range")]
    BalanceOutOfRange,
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Score repository trait
#[async_trait]
pub trait ScoreRepository: Send + Sync {
    /// Record one zero-sum transfer as a recipient/giver entry pair,
    /// written in a single transaction and serialized per room. Returns
    /// the pair, recipient entry first.
    async fn record_transfer(
        &self,
        room_id: &str,
        recipient_player_id: i64,
        acting_user_id: &str,
        delta: i64,
    ) -> Result<(ScoreEntry, ScoreEntry), TransferError>;

    /// All entries in a room, newest first, with display names joined
    async fn room_history(&self, room_id: &str) -> Result<Vec<ScoreEntryDetail>, StoreError>;

    /// One player's entries, newest first
    async fn player_history(&self, player_id: i64) -> Result<Vec<ScoreEntry>, StoreError>;
}
