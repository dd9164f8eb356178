use std::sync::Arc;

use crate::domain::entities::Room;
use crate::domain::repositories::{RoomRepository, StoreError};

/// List user rooms input
pub struct ListUserRoomsInput {
    pub user_id: String,
    pub page: u32,
    pub page_size: u32,
}

/// List user rooms output
pub struct ListUserRoomsOutput {
    pub rooms: Vec<Room>,
    pub total: usize,
    pub page: u32,
    pub page_size: u32,
}

/// List user rooms use case: rooms the user created or played in (any
/// status), active rooms first, then newest first.
pub struct ListUserRooms<R: RoomRepository> {
    room_repo: Arc<R>,
}

impl<R: RoomRepository> ListUserRooms<R> {
    pub fn new(room_repo: Arc<R>) -> Self {
        Self { room_repo }
    }

    pub async fn execute(
        &self,
        input: ListUserRoomsInput,
    ) -> Result<ListUserRoomsOutput, ListUserRoomsError> {
        let page = input.page.max(1);
        let page_size = input.page_size.max(1);
        // Wide multiply: page and size are each u32, so the product
        // always fits a u64
        let offset = u64::from(page - 1) * u64::from(page_size);

        let result = self
            .room_repo
            .find_user_rooms(&input.user_id, page_size, offset)
            .await?;

        Ok(ListUserRoomsOutput {
            rooms: result.rooms,
            total: result.total,
            page,
            page_size,
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ListUserRoomsError {
    #[error("Storage error: {0}")]
    Storage(#[from] StoreError),
}
