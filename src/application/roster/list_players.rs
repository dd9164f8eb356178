use std::sync::Arc;

use crate::domain::repositories::{PlayerRepository, PlayerWithScore, StoreError};

/// List players input
pub struct ListPlayersInput {
    pub room_id: String,
}

/// List players output
pub struct ListPlayersOutput {
    pub players: Vec<PlayerWithScore>,
}

/// List players use case: active players in join order, each with their
/// current balance. Unknown rooms list as empty.
pub struct ListPlayers<P: PlayerRepository> {
    player_repo: Arc<P>,
}

impl<P: PlayerRepository> ListPlayers<P> {
    pub fn new(player_repo: Arc<P>) -> Self {
        Self { player_repo }
    }

    pub async fn execute(
        &self,
        input: ListPlayersInput,
    ) -> Result<ListPlayersOutput, ListPlayersError> {
        if input.room_id.trim().is_empty() {
            return Err(ListPlayersError::Validation("Room id is required".into()));
        }

        let players = self
            .player_repo
            .list_active_with_scores(input.room_id.trim())
            .await?;

        Ok(ListPlayersOutput { players })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ListPlayersError {
    #[error("Validation error: {0}")]
    Validation(String),
    #[error("Storage error: {0}")]
    Storage(#[from] StoreError),
}
