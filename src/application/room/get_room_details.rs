use std::sync::Arc;

use crate::domain::entities::Room;
use crate::domain::repositories::{RoomRepository, StoreError};

/// Get room details input
pub struct GetRoomDetailsInput {
    pub room_id: String,
}

/// Get room details output
pub struct GetRoomDetailsOutput {
    pub room: Room,
}

/// Get room details use case
pub struct GetRoomDetails<R: RoomRepository> {
    room_repo: Arc<R>,
}

impl<R: RoomRepository> GetRoomDetails<R> {
    pub fn new(room_repo: Arc<R>) -> Self {
        Self { room_repo }
    }

    pub async fn execute(
        &self,
        input: GetRoomDetailsInput,
    ) -> Result<GetRoomDetailsOutput, GetRoomDetailsError> {
        let room = self
            .room_repo
            .find_by_id(&input.room_id)
            .await?
            .ok_or(GetRoomDetailsError::RoomNotFound)?;

        Ok(GetRoomDetailsOutput { room })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum GetRoomDetailsError {
    #[error("Room not found")]
    RoomNotFound,
    #[error("Storage error: {0}")]
    Storage(#[from] StoreError),
}
