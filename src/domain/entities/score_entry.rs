use serde::{Deserialize, Serialize};

/// ScoreEntry entity - one immutable signed balance change for a player,
/// plus the balance snapshot after applying it. A transfer always writes
/// two entries (recipient +d, giver -d) in the same transaction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreEntry {
    pub id: i64,
    pub room_id: String,
    /// The player whose balance this entry moves
    pub player_id: i64,
    pub score_change: i64,
    /// Balance after applying `score_change`
    pub current_score: i64,
    /// The player who authorized the transfer; None for seeded entries
    pub giver_id: Option<i64>,
    pub created_at: i64,
}

impl ScoreEntry {
    /// Create a new ledger entry
    pub fn new(
        room_id: String,
        player_id: i64,
        score_change: i64,
        current_score: i64,
        giver_id: Option<i64>,
    ) -> Self {
        Self {
            id: 0, // Set by database
            room_id,
            player_id,
            score_change,
            current_score,
            giver_id,
            created_at: chrono::Utc::now().timestamp(),
        }
    }
}
