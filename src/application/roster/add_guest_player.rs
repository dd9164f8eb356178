use std::sync::Arc;

use crate::domain::broadcaster::EventBroadcaster;
use crate::domain::entities::Player;
use crate::domain::events::SessionEvent;
use crate::domain::repositories::{PlayerRepository, RoomRepository, StoreError};

/// Add guest player input
pub struct AddGuestPlayerInput {
    pub room_id: String,
    pub player_name: String,
}

/// Add guest player output
pub struct AddGuestPlayerOutput {
    pub player: Player,
}

/// Add guest player use case: a participant with no user account,
/// identified by name only. Guests never rejoin; each add is a new row.
pub struct AddGuestPlayer<R: RoomRepository, P: PlayerRepository> {
    room_repo: Arc<R>,
    player_repo: Arc<P>,
    broadcaster: Arc<EventBroadcaster>,
}

impl<R: RoomRepository, P: PlayerRepository> AddGuestPlayer<R, P> {
    pub fn new(
        room_repo: Arc<R>,
        player_repo: Arc<P>,
        broadcaster: Arc<EventBroadcaster>,
    ) -> Self {
        Self {
            room_repo,
            player_repo,
            broadcaster,
        }
    }

    pub async fn execute(
        &self,
        input: AddGuestPlayerInput,
    ) -> Result<AddGuestPlayerOutput, AddGuestPlayerError> {
        // Validate name
        let player_name = input.player_name.trim();
        if player_name.is_empty() {
            return Err(AddGuestPlayerError::Validation(
                "Player name is required".into(),
            ));
        }

        // Find room
        let room = self
            .room_repo
            .find_by_id(&input.room_id)
            .await?
            .ok_or(AddGuestPlayerError::RoomNotFound)?;

        if !room.is_active() {
            return Err(AddGuestPlayerError::RoomEnded);
        }

        // The insert re-checks room status; a room ending right now
        // turns into a rejection rather than a stray row
        let guest = Player::new_guest(room.id.clone(), player_name.to_string());
        let player = self
            .player_repo
            .insert_member(&guest)
            .await?
            .ok_or(AddGuestPlayerError::RoomEnded)?;

        self.broadcaster
            .publish(SessionEvent::player_added(&room.id, &player));

        Ok(AddGuestPlayerOutput { player })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AddGuestPlayerError {
    #[error("Validation error: {0}")]
    Validation(String),
    #[error("Room not found")]
    RoomNotFound,
    #[error("Room has ended")]
    RoomEnded,
    #[error("Storage error: {0}")]
    Storage(#[from] StoreError),
}
