use std::sync::Arc;

use crate::domain::broadcaster::EventBroadcaster;
use crate::domain::events::SessionEvent;
use crate::domain::repositories::{PlayerRepository, StoreError};

/// Remove player input
pub struct RemovePlayerInput {
    pub player_id: i64,
}

/// Remove player output. `removed` is false when the player had already
/// left; the end state is what the caller asked for either way.
pub struct RemovePlayerOutput {
    pub player_id: i64,
    pub removed: bool,
}

/// Remove player use case. Removal is a soft delete: the row flips to
/// `left` and stays put so ledger entries keep their attribution, and a
/// later rejoin picks the row back up.
pub struct RemovePlayer<P: PlayerRepository> {
    player_repo: Arc<P>,
    broadcaster: Arc<EventBroadcaster>,
}

impl<P: PlayerRepository> RemovePlayer<P> {
    pub fn new(player_repo: Arc<P>, broadcaster: Arc<EventBroadcaster>) -> Self {
        Self {
            player_repo,
            broadcaster,
        }
    }

    pub async fn execute(
        &self,
        input: RemovePlayerInput,
    ) -> Result<RemovePlayerOutput, RemovePlayerError> {
        let player = self
            .player_repo
            .find_by_id(input.player_id)
            .await?
            .ok_or(RemovePlayerError::PlayerNotFound)?;

        if !player.is_active() {
            return Ok(RemovePlayerOutput {
                player_id: player.id,
                removed: false,
            });
        }

        // A concurrent remove may have won; only the transition notifies
        let removed = self.player_repo.mark_left(player.id).await?;
        if removed {
            self.broadcaster.publish(SessionEvent::player_left(
                &player.room_id,
                player.id,
                &player.player_name,
            ));
        }

        Ok(RemovePlayerOutput {
            player_id: player.id,
            removed,
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RemovePlayerError {
    #[error("Player not found")]
    PlayerNotFound,
    #[error("Storage error: {0}")]
    Storage(#[from] StoreError),
}
