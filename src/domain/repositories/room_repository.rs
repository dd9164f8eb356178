use async_trait::async_trait;

use crate::domain::entities::Room;

/// Error type for storage operations
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A uniqueness constraint rejected the write, e.g. an active room
    /// already holds the candidate code
    #[error("Unique constraint violated: {0}")]
    UniqueViolation(String),
    #[error("Database error: {0}")]
    Database(String),
}

/// One page of a user's rooms plus the size of the whole set
#[derive(Debug, Clone)]
pub struct RoomPage {
    pub rooms: Vec<Room>,
    pub total: usize,
}

/// A user's active membership in an active room
#[derive(Debug, Clone)]
pub struct ActiveMembership {
    pub room_id: String,
    pub room_code: String,
    pub room_name: String,
}

/// Room repository trait
#[async_trait]
pub trait RoomRepository: Send + Sync {
    /// Insert the room and its creator's player row in one transaction.
    /// Fails with `UniqueViolation` when an active room holds the code.
    async fn create_with_creator(&self, room: &Room, creator_name: &str)
        -> Result<(), StoreError>;

    /// Find room by ID
    async fn find_by_id(&self, id: &str) -> Result<Option<Room>, StoreError>;

    /// Find the active room holding this code
    async fn find_active_by_code(&self, code: &str) -> Result<Option<Room>, StoreError>;

    /// Transition active -> ended, stamping `ended_at`. Returns false
    /// when no active row matched (unknown id or already ended).
    async fn end_room(&self, id: &str, ended_at: i64) -> Result<bool, StoreError>;

    /// Rooms the user created or holds any player row in (active or
    /// left), de-duplicated, active first then newest first; paginated
    /// after sorting.
    async fn find_user_rooms(
        &self,
        user_id: &str,
        limit: u32,
        offset: u64,
    ) -> Result<RoomPage, StoreError>;

    /// The user's active membership in an active room, if any
    async fn find_active_membership(
        &self,
        user_id: &str,
    ) -> Result<Option<ActiveMembership>, StoreError>;
}
