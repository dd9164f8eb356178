use serde::{Deserialize, Serialize};

/// Player membership status within a room
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerStatus {
    Active,
    Left,
}

impl PlayerStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlayerStatus::Active => "active",
            PlayerStatus::Left => "left",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "active" => Some(PlayerStatus::Active),
            "left" => Some(PlayerStatus::Left),
            _ => None,
        }
    }
}

/// Player entity - one participant's membership record within one room.
/// Rows are never deleted; leaving flips the status to `left` so ledger
/// entries stay attributable, and rejoining reactivates the same row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub id: i64,
    pub room_id: String,
    /// None for guests with no backing user account
    pub user_id: Option<String>,
    pub player_name: String,
    pub is_creator: bool,
    pub status: PlayerStatus,
    pub created_at: i64,
}

impl Player {
    /// Create a membership row for a registered user
    pub fn new(room_id: String, user_id: String, player_name: String, is_creator: bool) -> Self {
        Self {
            id: 0, // Set by database
            room_id,
            user_id: Some(user_id),
            player_name,
            is_creator,
            status: PlayerStatus::Active,
            created_at: chrono::Utc::now().timestamp(),
        }
    }

    /// Create a membership row for a guest identified by name only
    pub fn new_guest(room_id: String, player_name: String) -> Self {
        Self {
            id: 0, // Set by database
            room_id,
            user_id: None,
            player_name,
            is_creator: false,
            status: PlayerStatus::Active,
            created_at: chrono::Utc::now().timestamp(),
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == PlayerStatus::Active
    }
}
