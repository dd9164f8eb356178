use std::sync::Arc;

use crate::domain::repositories::{RoomRepository, StoreError};

/// Check user room status input
pub struct CheckUserRoomStatusInput {
    pub user_id: String,
}

/// Check user room status output. `in_room` is true only when the user
/// holds an active player row in a room that is itself still active.
pub struct CheckUserRoomStatusOutput {
    pub in_room: bool,
    pub room_id: Option<String>,
    pub room_code: Option<String>,
    pub room_name: Option<String>,
}

/// Check user room status use case
pub struct CheckUserRoomStatus<R: RoomRepository> {
    room_repo: Arc<R>,
}

impl<R: RoomRepository> CheckUserRoomStatus<R> {
    pub fn new(room_repo: Arc<R>) -> Self {
        Self { room_repo }
    }

    pub async fn execute(
        &self,
        input: CheckUserRoomStatusInput,
    ) -> Result<CheckUserRoomStatusOutput, CheckUserRoomStatusError> {
        let output = match self
            .room_repo
            .find_active_membership(&input.user_id)
            .await?
        {
            Some(membership) => CheckUserRoomStatusOutput {
                in_room: true,
                room_id: Some(membership.room_id),
                room_code: Some(membership.room_code),
                room_name: Some(membership.room_name),
            },
            None => CheckUserRoomStatusOutput {
                in_room: false,
                room_id: None,
                room_code: None,
                room_name: None,
            },
        };

        Ok(output)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CheckUserRoomStatusError {
    #[error("Storage error: {0}")]
    Storage(#[from] StoreError),
}
