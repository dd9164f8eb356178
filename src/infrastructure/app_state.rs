use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

use crate::config::SessionConfig;
use crate::domain::broadcaster::EventBroadcaster;
use crate::infrastructure::database::repositories::{
    SqlitePlayerRepository, SqliteRoomRepository, SqliteScoreRepository,
};
use crate::infrastructure::database::schema;
use crate::infrastructure::services::StaticUserDirectory;

/// Application state shared across all use cases
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: SqlitePool,

    /// Room repository
    pub room_repo: Arc<SqliteRoomRepository>,

    /// Player repository
    pub player_repo: Arc<SqlitePlayerRepository>,

    /// Score repository
    pub score_repo: Arc<SqliteScoreRepository>,

    /// Display-name lookup for joining users
    pub directory: Arc<StaticUserDirectory>,

    /// Event broadcaster for room feeds
    pub broadcaster: Arc<EventBroadcaster>,
}

impl AppState {
    pub async fn new() -> anyhow::Result<Self> {
        let config = SessionConfig::from_env();
        Self::from_config(config, Arc::new(StaticUserDirectory::new())).await
    }

    pub async fn from_config(
        config: SessionConfig,
        directory: Arc<StaticUserDirectory>,
    ) -> anyhow::Result<Self> {
        tracing::info!("Connecting to database: {}", config.database_url);

        let options = SqliteConnectOptions::from_str(&config.database_url)?
            .create_if_missing(true)
            .foreign_keys(true)
            .busy_timeout(Duration::from_secs(5));

        // A pooled :memory: database is a different database per
        // connection; cap the pool at one so every query sees the
        // same tables
        let max_connections = if config.database_url.contains(":memory:") {
            1
        } else {
            config.max_connections
        };

        let db = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
            .connect_with(options)
            .await?;

        schema::init_schema(&db).await?;

        let room_repo = Arc::new(SqliteRoomRepository::new(db.clone()));
        let player_repo = Arc::new(SqlitePlayerRepository::new(db.clone()));
        let score_repo = Arc::new(SqliteScoreRepository::new(db.clone()));

        let broadcaster = Arc::new(EventBroadcaster::new(config.event_capacity));

        Ok(Self {
            db,
            room_repo,
            player_repo,
            score_repo,
            directory,
            broadcaster,
        })
    }
}
