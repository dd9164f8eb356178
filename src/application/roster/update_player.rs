use std::sync::Arc;

use crate::domain::broadcaster::EventBroadcaster;
use crate::domain::entities::Player;
use crate::domain::events::SessionEvent;
use crate::domain::repositories::{PlayerRepository, StoreError};

/// Update player input
pub struct UpdatePlayerInput {
    pub player_id: i64,
    pub player_name: String,
}

/// Update player output
pub struct UpdatePlayerOutput {
    pub player: Player,
}

/// Update player use case: rename a player within their room
pub struct UpdatePlayer<P: PlayerRepository> {
    player_repo: Arc<P>,
    broadcaster: Arc<EventBroadcaster>,
}

impl<P: PlayerRepository> UpdatePlayer<P> {
    pub fn new(player_repo: Arc<P>, broadcaster: Arc<EventBroadcaster>) -> Self {
        Self {
            player_repo,
            broadcaster,
        }
    }

    pub async fn execute(
        &self,
        input: UpdatePlayerInput,
    ) -> Result<UpdatePlayerOutput, UpdatePlayerError> {
        // Validate name
        let player_name = input.player_name.trim();
        if player_name.is_empty() {
            return Err(UpdatePlayerError::Validation(
                "Player name is required".into(),
            ));
        }

        let player = self
            .player_repo
            .update_name(input.player_id, player_name)
            .await?
            .ok_or(UpdatePlayerError::PlayerNotFound)?;

        self.broadcaster
            .publish(SessionEvent::player_updated(&player.room_id, &player));

        Ok(UpdatePlayerOutput { player })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum UpdatePlayerError {
    #[error("Validation error: {0}")]
    Validation(String),
    #[error("Player not found")]
    PlayerNotFound,
    #[error("Storage error: {0}")]
    Storage(#[from] StoreError),
}
