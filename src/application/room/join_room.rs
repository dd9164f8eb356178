use std::sync::Arc;

use crate::domain::broadcaster::EventBroadcaster;
use crate::domain::entities::{Player, Room};
use crate::domain::events::SessionEvent;
use crate::domain::repositories::{PlayerRepository, RoomRepository, StoreError, UserDirectory};

/// Join room input
pub struct JoinRoomInput {
    pub room_code: String,
    pub user_id: String,
}

/// Join room output
pub struct JoinRoomOutput {
    pub room: Room,
    pub player: Player,
}

/// Join room use case
pub struct JoinRoom<R: RoomRepository, P: PlayerRepository, D: UserDirectory> {
    room_repo: Arc<R>,
    player_repo: Arc<P>,
    directory: Arc<D>,
    broadcaster: Arc<EventBroadcaster>,
}

impl<R: RoomRepository, P: PlayerRepository, D: UserDirectory> JoinRoom<R, P, D> {
    pub fn new(
        room_repo: Arc<R>,
        player_repo: Arc<P>,
        directory: Arc<D>,
        broadcaster: Arc<EventBroadcaster>,
    ) -> Self {
        Self {
            room_repo,
            player_repo,
            directory,
            broadcaster,
        }
    }

    pub async fn execute(&self, input: JoinRoomInput) -> Result<JoinRoomOutput, JoinRoomError> {
        // Validate code shape before touching storage
        let code = input.room_code.trim();
        if code.len() != 6 || !code.chars().all(|c| c.is_ascii_digit()) {
            return Err(JoinRoomError::Validation(
                "Room code must be 6 digits".into(),
            ));
        }

        // Find the active room holding the code
        let room = self
            .room_repo
            .find_active_by_code(code)
            .await?
            .ok_or(JoinRoomError::RoomNotFound)?;

        // A prior membership row decides between reactivate and insert.
        // Reactivation keeps the same player id and name, so the user's
        // ledger history survives leave/rejoin.
        let player = match self
            .player_repo
            .find_membership(&room.id, &input.user_id)
            .await?
        {
            Some(existing) if existing.is_active() => {
                return Err(JoinRoomError::AlreadyInRoom);
            }
            Some(existing) => self
                .player_repo
                .reactivate(existing.id)
                .await?
                .ok_or(JoinRoomError::RoomEnded)?,
            None => {
                let player_name = self
                    .directory
                    .display_name(&input.user_id)
                    .await?
                    .unwrap_or_else(|| format!("user {}", input.user_id));
                let is_creator = room.creator_id == input.user_id;
                let member = Player::new(
                    room.id.clone(),
                    input.user_id.clone(),
                    player_name,
                    is_creator,
                );

                match self.player_repo.insert_member(&member).await {
                    Ok(Some(player)) => player,
                    // The insert is conditioned on the room being active
                    Ok(None) => return Err(JoinRoomError::RoomEnded),
                    // Lost a race against a concurrent join by the same user
                    Err(StoreError::UniqueViolation(_)) => {
                        return Err(JoinRoomError::AlreadyInRoom)
                    }
                    Err(e) => return Err(e.into()),
                }
            }
        };

        self.broadcaster
            .publish(SessionEvent::player_added(&room.id, &player));

        Ok(JoinRoomOutput { room, player })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum JoinRoomError {
    #[error("Validation error: {0}")]
    Validation(String),
    #[error("Room not found")]
    RoomNotFound,
    #[error("Already in room")]
    AlreadyInRoom,
    #[error("Room has ended")]
    RoomEnded,
    #[error("Storage error: {0}")]
    Storage(#[from] StoreError),
}
