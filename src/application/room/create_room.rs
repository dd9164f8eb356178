use std::sync::Arc;

use uuid::Uuid;

use crate::domain::entities::{generate_room_code, Room};
use crate::domain::repositories::{RoomRepository, StoreError, UserDirectory};

/// Bounded retries for the generate-then-insert code allocation
const CODE_ATTEMPTS: u32 = 8;

/// Create room input
pub struct CreateRoomInput {
    pub creator_id: String,
    pub room_name: String,
}

/// Create room output
pub struct CreateRoomOutput {
    pub room: Room,
}

/// Create room use case
pub struct CreateRoom<R: RoomRepository, D: UserDirectory> {
    room_repo: Arc<R>,
    directory: Arc<D>,
}

impl<R: RoomRepository, D: UserDirectory> CreateRoom<R, D> {
    pub fn new(room_repo: Arc<R>, directory: Arc<D>) -> Self {
        Self {
            room_repo,
            directory,
        }
    }

    pub async fn execute(
        &self,
        input: CreateRoomInput,
    ) -> Result<CreateRoomOutput, CreateRoomError> {
        // Validate name
        if input.room_name.trim().is_empty() {
            return Err(CreateRoomError::Validation("Room name is required".into()));
        }

        // The creator joins under their directory name
        let creator_name = self
            .directory
            .display_name(&input.creator_id)
            .await?
            .unwrap_or_else(|| format!("user {}", input.creator_id));

        // Allocate the code by insert-and-retry: the unique index on active
        // room codes is the authority, not a prior read. Codes held by
        // ended rooms may be reused.
        for _ in 0..CODE_ATTEMPTS {
            let room = Room::new(
                Uuid::new_v4().to_string(),
                input.room_name.clone(),
                input.creator_id.clone(),
                generate_room_code(),
            );

            match self
                .room_repo
                .create_with_creator(&room, &creator_name)
                .await
            {
                Ok(()) => {
                    tracing::info!("Room {} created with code {}", room.id, room.room_code);
                    return Ok(CreateRoomOutput { room });
                }
                Err(StoreError::UniqueViolation(_)) => {
                    tracing::warn!("Room code {} already active, regenerating", room.room_code);
                    continue;
                }
                Err(e) => return Err(e.into()),
            }
        }

        Err(CreateRoomError::CodesExhausted)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CreateRoomError {
    #[error("Validation error: {0}")]
    Validation(String),
    #[error("Could not allocate an unused room code")]
    CodesExhausted,
    #[error("Storage error: {0}")]
    Storage(#[from] StoreError),
}
