use sqlx::SqlitePool;

/// Create the session tables if they do not exist. Statements run one at
/// a time; sqlite executes a single statement per query call.
pub async fn init_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS rooms (
            id TEXT PRIMARY KEY,
            room_code TEXT NOT NULL,
            room_name TEXT NOT NULL,
            creator_id TEXT NOT NULL,
            status TEXT NOT NULL DEFAULT 'active',
            created_at INTEGER NOT NULL,
            ended_at INTEGER
        )
        "#,
    )
    .execute(pool)
    .await?;

    // Codes are unique among active rooms only; an ended room frees its
    // code for reuse
    sqlx::query(
        "CREATE UNIQUE INDEX IF NOT EXISTS idx_rooms_active_code \
         ON rooms(room_code) WHERE status = 'active'",
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS players (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            room_id TEXT NOT NULL REFERENCES rooms(id),
            user_id TEXT,
            player_name TEXT NOT NULL,
            is_creator INTEGER NOT NULL DEFAULT 0,
            status TEXT NOT NULL DEFAULT 'active',
            created_at INTEGER NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    // One membership row per user per room; guest rows have no user_id
    // and never collide
    sqlx::query(
        "CREATE UNIQUE INDEX IF NOT EXISTS idx_players_room_user \
         ON players(room_id, user_id) WHERE user_id IS NOT NULL",
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_players_room ON players(room_id)")
        .execute(pool)
        .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS score_entries (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            room_id TEXT NOT NULL REFERENCES rooms(id),
            player_id INTEGER NOT NULL REFERENCES players(id),
            score_change INTEGER NOT NULL,
            current_score INTEGER NOT NULL,
            giver_id INTEGER REFERENCES players(id),
            created_at INTEGER NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_score_entries_room ON score_entries(room_id)")
        .execute(pool)
        .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_score_entries_player ON score_entries(player_id)")
        .execute(pool)
        .await?;

    Ok(())
}
