use serde::{Deserialize, Serialize};

/// Room lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoomStatus {
    Active,
    Ended,
}

impl RoomStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RoomStatus::Active => "active",
            RoomStatus::Ended => "ended",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "active" => Some(RoomStatus::Active),
            "ended" => Some(RoomStatus::Ended),
            _ => None,
        }
    }
}

/// Room entity - one scoring session, joinable by code while active
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    pub id: String,
    pub room_code: String,
    pub room_name: String,
    pub creator_id: String,
    pub status: RoomStatus,
    pub created_at: i64,
    /// Set once, on the active -> ended transition
    pub ended_at: Option<i64>,
}

impl Room {
    /// Create a new active room
    pub fn new(id: String, room_name: String, creator_id: String, room_code: String) -> Self {
        Self {
            id,
            room_code,
            room_name,
            creator_id,
            status: RoomStatus::Active,
            created_at: chrono::Utc::now().timestamp(),
            ended_at: None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == RoomStatus::Active
    }
}

/// Generate a random 6-digit room code
pub fn generate_room_code() -> String {
    use rand::Rng;
    let mut rng = rand::thread_rng();
    rng.gen_range(100_000..=999_999).to_string()
}
