use crate::models::DbTimeSlot;
use chrono::{NaiveDate, NaiveTime, Utc};
use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

pub async fn create_time_slot(
    pool: &Pool<Postgres>,
    room_code: &str,
    nickname: &str,
    date: NaiveDate,
    start_time: NaiveTime,
    end_time: NaiveTime,
) -> Result<DbTimeSlot> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    tracing::debug!(
        "Creating time slot: room={}, nickname={}, date={}",
        room_code,
        nickname,
        date
    );

    let time_slot = sqlx::query_as::<_, DbTimeSlot>(
        r#"
        INSERT INTO time_slots (id, room_code, nickname, date, start_time, end_time, created_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING id, room_code, nickname, date, start_time, end_time, created_at
        "#,
    )
    .bind(id)
    .bind(room_code)
    .bind(nickname)
    .bind(date)
    .bind(start_time)
    .bind(end_time)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(time_slot)
}

pub async fn get_time_slots_by_room(
    pool: &Pool<Postgres>,
    room_code: &str,
) -> Result<Vec<DbTimeSlot>> {
    let time_slots = sqlx::query_as::<_, DbTimeSlot>(
        r#"
        SELECT id, room_code, nickname, date, start_time, end_time, created_at
        FROM time_slots
        WHERE room_code = $1
        ORDER BY date ASC, start_time ASC
        "#,
    )
    .bind(room_code)
    .fetch_all(pool)
    .await?;

    Ok(time_slots)
}
