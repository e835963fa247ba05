use crate::models::DbAvailability;
use chrono::Utc;
use eyre::Result;
use sqlx::{Pool, Postgres};
use tabletime_core::calendar::MonthRef;
use tabletime_core::models::availability::CellChange;
use tabletime_core::models::player::Player;

/// Upserts one player's cell changes against the unique
/// (room, nickname, date, segment) key. Later writes overwrite earlier ones.
/// The whole batch commits as one transaction: a failure part-way through
/// leaves no prefix of the changes behind.
pub async fn upsert_cells(
    pool: &Pool<Postgres>,
    room_code: &str,
    player: Player,
    changes: &[CellChange],
) -> Result<()> {
    let now = Utc::now();

    tracing::debug!(
        "Upserting availability: room={}, player={}, cells={}",
        room_code,
        player,
        changes.len()
    );

    let mut tx = pool.begin().await?;

    for change in changes {
        sqlx::query(
            r#"
            INSERT INTO availability (room_code, nickname, date, segment, available, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT ON CONSTRAINT availability_cell_key
            DO UPDATE SET available = EXCLUDED.available, updated_at = EXCLUDED.updated_at
            "#,
        )
        .bind(room_code)
        .bind(player.nickname())
        .bind(change.date)
        .bind(change.segment.id())
        .bind(change.available)
        .bind(now)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;

    Ok(())
}

/// All availability rows for one room and month, every player included.
pub async fn month_entries(
    pool: &Pool<Postgres>,
    room_code: &str,
    scope: MonthRef,
) -> Result<Vec<DbAvailability>> {
    let (start, end) = scope.span();

    tracing::debug!(
        "Fetching month availability: room={}, {}-{:02}",
        room_code,
        scope.year(),
        scope.month()
    );

    let rows = sqlx::query_as::<_, DbAvailability>(
        r#"
        SELECT room_code, nickname, date, segment, available, updated_at
        FROM availability
        WHERE room_code = $1
          AND date >= $2
          AND date < $3
        ORDER BY date ASC, segment ASC, nickname ASC
        "#,
    )
    .bind(room_code)
    .bind(start)
    .bind(end)
    .fetch_all(pool)
    .await?;

    Ok(rows)
}
