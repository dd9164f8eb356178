use std::sync::Arc;

use crate::domain::repositories::{ScoreEntryDetail, ScoreRepository, StoreError};

/// Get score history input
pub struct GetScoreHistoryInput {
    pub room_id: String,
}

/// Get score history output: newest first, display names joined
pub struct GetScoreHistoryOutput {
    pub entries: Vec<ScoreEntryDetail>,
}

/// Get score history use case
pub struct GetScoreHistory<S: ScoreRepository> {
    score_repo: Arc<S>,
}

impl<S: ScoreRepository> GetScoreHistory<S> {
    pub fn new(score_repo: Arc<S>) -> Self {
        Self { score_repo }
    }

    pub async fn execute(
        &self,
        input: GetScoreHistoryInput,
    ) -> Result<GetScoreHistoryOutput, GetScoreHistoryError> {
        if input.room_id.trim().is_empty() {
            return Err(GetScoreHistoryError::Validation(
                "Room id is required".into(),
            ));
        }

        let entries = self.score_repo.room_history(input.room_id.trim()).await?;

        Ok(GetScoreHistoryOutput { entries })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum GetScoreHistoryError {
    #[error("Validation error: {0}")]
    Validation(String),
    #[error("Storage error: {0}")]
    Storage(#[from] StoreError),
}
