use std::sync::Arc;

use crate::domain::broadcaster::EventBroadcaster;
use crate::domain::entities::Room;
use crate::domain::events::SessionEvent;
use crate::domain::repositories::{RoomRepository, StoreError};

/// End room input
pub struct EndRoomInput {
    pub room_id: String,
}

/// End room output
pub struct EndRoomOutput {
    pub room: Room,
}

/// End room use case. The transition is terminal: once ended, joins and
/// transfers against the room are rejected. Ending an already-ended room
/// is a no-op that returns the room as stored.
pub struct EndRoom<R: RoomRepository> {
    room_repo: Arc<R>,
    broadcaster: Arc<EventBroadcaster>,
}

impl<R: RoomRepository> EndRoom<R> {
    pub fn new(room_repo: Arc<R>, broadcaster: Arc<EventBroadcaster>) -> Self {
        Self {
            room_repo,
            broadcaster,
        }
    }

    pub async fn execute(&self, input: EndRoomInput) -> Result<EndRoomOutput, EndRoomError> {
        let room = self
            .room_repo
            .find_by_id(&input.room_id)
            .await?
            .ok_or(EndRoomError::RoomNotFound)?;

        // Already ended: the first transition notified observers
        if !room.is_active() {
            return Ok(EndRoomOutput { room });
        }

        let ended_at = chrono::Utc::now().timestamp();
        let ended = self.room_repo.end_room(&room.id, ended_at).await?;

        // Re-read for the stamped row; a lost race against another end
        // call lands on the same final state
        let room = self
            .room_repo
            .find_by_id(&input.room_id)
            .await?
            .ok_or(EndRoomError::RoomNotFound)?;

        if ended {
            tracing::info!("Room {} ended", room.id);
            self.broadcaster
                .publish(SessionEvent::room_ended(&room.id, "This room has been closed"));
        }

        Ok(EndRoomOutput { room })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum EndRoomError {
    #[error("Room not found")]
    RoomNotFound,
    #[error("Storage error: {0}")]
    Storage(#[from] StoreError),
}
