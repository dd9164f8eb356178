use std::sync::Arc;

use crate::domain::entities::ScoreEntry;
use crate::domain::repositories::{ScoreRepository, StoreError};

/// Get player history input
pub struct GetPlayerHistoryInput {
    pub player_id: i64,
}

/// Get player history output: one player's entries, newest first
pub struct GetPlayerHistoryOutput {
    pub entries: Vec<ScoreEntry>,
}

/// Get player history use case. Unknown players read as an empty
/// history, like any player the ledger has not touched yet.
pub struct GetPlayerHistory<S: ScoreRepository> {
    score_repo: Arc<S>,
}

impl<S: ScoreRepository> GetPlayerHistory<S> {
    pub fn new(score_repo: Arc<S>) -> Self {
        Self { score_repo }
    }

    pub async fn execute(
        &self,
        input: GetPlayerHistoryInput,
    ) -> Result<GetPlayerHistoryOutput, GetPlayerHistoryError> {
        let entries = self.score_repo.player_history(input.player_id).await?;

        Ok(GetPlayerHistoryOutput { entries })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum GetPlayerHistoryError {
    #[error("Storage error: {0}")]
    Storage(#[from] StoreError),
}
