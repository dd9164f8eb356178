use std::sync::Arc;

use crate::domain::entities::Room;
use crate::domain::repositories::{RoomRepository, StoreError};

/// Get room by code input
pub struct GetRoomByCodeInput {
    pub room_code: String,
}

/// Get room by code output
pub struct GetRoomByCodeOutput {
    pub room: Room,
}

/// Get room by code use case. Codes resolve against active rooms only;
/// an ended room's code is free for reuse and no longer looks anything up.
pub struct GetRoomByCode<R: RoomRepository> {
    room_repo: Arc<R>,
}

impl<R: RoomRepository> GetRoomByCode<R> {
    pub fn new(room_repo: Arc<R>) -> Self {
        Self { room_repo }
    }

    pub async fn execute(
        &self,
        input: GetRoomByCodeInput,
    ) -> Result<GetRoomByCodeOutput, GetRoomByCodeError> {
        let room = self
            .room_repo
            .find_active_by_code(input.room_code.trim())
            .await?
            .ok_or(GetRoomByCodeError::RoomNotFound)?;

        Ok(GetRoomByCodeOutput { room })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum GetRoomByCodeError {
    #[error("Room not found")]
    RoomNotFound,
    #[error("Storage error: {0}")]
    Storage(#[from] StoreError),
}
