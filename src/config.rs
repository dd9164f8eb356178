/// Scoring session configuration loaded from environment variables.
///
/// All settings fall back to defaults when unset; a `.env` file is
/// picked up via `dotenvy` if present.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// SQLite connection string (e.g. `sqlite:./data/tallyroom.db`).
    pub database_url: String,

    /// Maximum number of database connections in the pool.
    pub max_connections: u32,

    /// Timeout in seconds for acquiring a database connection.
    pub acquire_timeout_secs: u64,

    /// Capacity of the event broadcast channel.
    pub event_capacity: usize,
}

impl SessionConfig {
    /// Loads configuration from environment variables.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let db_path = std::env::var("DATABASE_URL")
            .or_else(|_| std::env::var("DB_PATH"))
            .unwrap_or_else(|_| "sqlite:./data/tallyroom.db".to_string());

        Self {
            database_url: normalize_sqlite_url(db_path),
            max_connections: parse_env("DATABASE_MAX_CONNECTIONS", 5),
            acquire_timeout_secs: parse_env("DATABASE_ACQUIRE_TIMEOUT_SECS", 5),
            event_capacity: parse_env("EVENT_CAPACITY", 1000),
        }
    }

    /// Configuration pointing at a specific database, defaults elsewhere.
    pub fn for_database(url: &str) -> Self {
        Self {
            database_url: normalize_sqlite_url(url.to_string()),
            max_connections: 5,
            acquire_timeout_secs: 5,
            event_capacity: 1000,
        }
    }
}

/// Ensures the connection string carries the `sqlite:` scheme.
fn normalize_sqlite_url(path: String) -> String {
    if path.starts_with("sqlite:") {
        path
    } else {
        format!("sqlite:{}", path)
    }
}

/// Parses an environment variable as `T`, returning `default` on missing
/// or invalid values.
fn parse_env<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
