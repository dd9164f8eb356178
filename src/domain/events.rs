use serde::Serialize;

use crate::domain::entities::{Player, ScoreEntry};

/// Session event for observer fan-out
#[derive(Debug, Clone, Serialize)]
pub struct SessionEvent {
    #[serde(rename = "type")]
    pub event_type: String,
    /// None marks a global event delivered to every observer
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room_id: Option<String>,
    /// Event payload fields (flattened into root)
    #[serde(flatten)]
    pub data: serde_json::Value,
    pub timestamp: i64,
}

impl SessionEvent {
    fn new(event_type: &str, room_id: Option<String>, data: serde_json::Value) -> Self {
        Self {
            event_type: event_type.to_string(),
            room_id,
            data,
            timestamp: chrono::Utc::now().timestamp_millis(),
        }
    }

    /// A player joined the room, by code or as a guest
    pub fn player_added(room_id: &str, player: &Player) -> Self {
        Self::new(
            "playerAdded",
            Some(room_id.to_string()),
            serde_json::json!({ "player": player }),
        )
    }

    /// A player was renamed
    pub fn player_updated(room_id: &str, player: &Player) -> Self {
        Self::new(
            "playerUpdated",
            Some(room_id.to_string()),
            serde_json::json!({ "player": player }),
        )
    }

    /// A player left the room
    pub fn player_left(room_id: &str, player_id: i64, player_name: &str) -> Self {
        Self::new(
            "playerLeft",
            Some(room_id.to_string()),
            serde_json::json!({ "player_id": player_id, "player_name": player_name }),
        )
    }

    /// A transfer committed; carries both ledger entries, recipient first
    pub fn score_updated(room_id: &str, entries: &[ScoreEntry]) -> Self {
        Self::new(
            "scoreUpdated",
            Some(room_id.to_string()),
            serde_json::json!({ "scoreEntries": entries }),
        )
    }

    /// The room was ended
    pub fn room_ended(room_id: &str, message: &str) -> Self {
        Self::new(
            "roomEnded",
            Some(room_id.to_string()),
            serde_json::json!({ "message": message }),
        )
    }

    /// A user profile changed; global, profile changes are not room-scoped
    pub fn user_updated(user_id: &str, username: &str, avatar: Option<&str>) -> Self {
        Self::new(
            "userUpdated",
            None,
            serde_json::json!({ "user_id": user_id, "username": username, "avatar": avatar }),
        )
    }

    pub fn is_global(&self) -> bool {
        self.room_id.is_none()
    }
}
