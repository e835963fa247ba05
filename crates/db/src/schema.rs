use eyre::Result;
use sqlx::{Pool, Postgres};
use tracing::info;

pub async fn initialize_database(pool: &Pool<Postgres>) -> Result<()> {
    info!("Initializing database schema...");

    // Legacy per-interval submissions, kept for the older form-based page
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS time_slots (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            room_code VARCHAR(64) NOT NULL,
            nickname VARCHAR(255) NOT NULL,
            date DATE NOT NULL,
            start_time TIME NOT NULL,
            end_time TIME NOT NULL,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            CONSTRAINT valid_time_range CHECK (end_time > start_time)
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Per-cell availability grid: one row per (room, player, date, segment).
    // Batched writes upsert against the unique key, last write wins.
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS availability (
            id BIGSERIAL PRIMARY KEY,
            room_code VARCHAR(64) NOT NULL,
            nickname VARCHAR(255) NOT NULL,
            date DATE NOT NULL,
            segment VARCHAR(16) NOT NULL,
            available BOOLEAN NOT NULL DEFAULT FALSE,
            updated_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            CONSTRAINT availability_cell_key UNIQUE (room_code, nickname, date, segment)
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create indexes
    sqlx::query(
        r#"
        CREATE INDEX IF NOT EXISTS idx_time_slots_room_code ON time_slots(room_code);
        CREATE INDEX IF NOT EXISTS idx_time_slots_date ON time_slots(date);
        CREATE INDEX IF NOT EXISTS idx_availability_room_date ON availability(room_code, date);
        "#,
    )
    .execute(pool)
    .await?;

    info!("Database schema initialized successfully.");
    Ok(())
}
