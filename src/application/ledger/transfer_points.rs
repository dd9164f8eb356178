use std::sync::Arc;

use crate::domain::broadcaster::EventBroadcaster;
use crate::domain::entities::ScoreEntry;
use crate::domain::events::SessionEvent;
use crate::domain::repositories::{ScoreRepository, StoreError, TransferError};

/// Transfer points input
pub struct TransferPointsInput {
    pub room_id: String,
    pub recipient_player_id: i64,
    pub acting_user_id: String,
    pub delta: i64,
}

/// Transfer points output: the committed entry pair, recipient first
pub struct TransferPointsOutput {
    pub recipient_entry: ScoreEntry,
    pub giver_entry: ScoreEntry,
}

/// Transfer points use case. One transfer moves `delta` points from the
/// acting user's player to the recipient: the recipient's entry gets
/// `+delta`, the giver's `-delta`, written atomically so room balances
/// always sum to the same total.
pub struct TransferPoints<S: ScoreRepository> {
    score_repo: Arc<S>,
    broadcaster: Arc<EventBroadcaster>,
}

impl<S: ScoreRepository> TransferPoints<S> {
    pub fn new(score_repo: Arc<S>, broadcaster: Arc<EventBroadcaster>) -> Self {
        Self {
            score_repo,
            broadcaster,
        }
    }

    pub async fn execute(
        &self,
        input: TransferPointsInput,
    ) -> Result<TransferPointsOutput, TransferPointsError> {
        // A zero transfer would record a pair of no-op entries
        if input.delta == 0 {
            return Err(TransferPointsError::Validation(
                "Transfer amount must be non-zero".into(),
            ));
        }

        let (recipient_entry, giver_entry) = self
            .score_repo
            .record_transfer(
                &input.room_id,
                input.recipient_player_id,
                &input.acting_user_id,
                input.delta,
            )
            .await?;

        self.broadcaster.publish(SessionEvent::score_updated(
            &input.room_id,
            &[recipient_entry.clone(), giver_entry.clone()],
        ));

        Ok(TransferPointsOutput {
            recipient_entry,
            giver_entry,
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TransferPointsError {
    #[error("Validation error: {0}")]
    Validation(String),
    #[error("Room not found")]
    RoomNotFound,
    #[error("Room has ended")]
    RoomEnded,
    #[error("Acting user is not a member of this room")]
    NotARoomMember,
    #[error("Recipient not found in this room")]
    RecipientNotFound,
    #[error("Storage error: {0}")]
    Storage(#[from] StoreError),
}

impl From<TransferError> for TransferPointsError {
    fn from(e: TransferError) -> Self {
        match e {
            TransferError::RoomNotFound => TransferPointsError::RoomNotFound,
            TransferError::RoomEnded => TransferPointsError::RoomEnded,
            TransferError::ActorNotInRoom => TransferPointsError::NotARoomMember,
            TransferError::RecipientNotInRoom => TransferPointsError::RecipientNotFound,
            TransferError::SelfTransfer => {
                TransferPointsError::Validation("Cannot transfer points to yourself".into())
            }
            TransferError::BalanceOutOfRange => {
                TransferPointsError::Validation("Transfer would move a balance out of range".into())
            }
            TransferError::Store(e) => TransferPointsError::Storage(e),
        }
    }
}
