//! # Availability Grid Handlers
//!
//! Handlers for the month-scoped availability grid: fetching every player's
//! per-cell availability together with the derived common set, and applying
//! one player's batched cell changes.
//!
//! ## Common Set Reduction
//!
//! A cell is "common" when every *active* player marked it available. Active
//! players are those with at least one availability row in the requested
//! month, so a group where only two players have painted anything still sees
//! their shared cells highlighted instead of waiting on the absent two.
//! The reduction works by:
//!
//! 1. Collecting the set of active players for the month
//! 2. Grouping available=true rows into per-cell player sets
//! 3. Keeping the cells whose player set covers every active player

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use std::collections::{BTreeMap, BTreeSet};
use std::str::FromStr;
use std::sync::Arc;
use tabletime_core::{
    calendar::MonthRef,
    errors::TimeError,
    models::availability::{Ack, AvailabilityEntry, BatchRequest, CommonCell, MonthResponse},
    models::player::Player,
    models::segment::Segment,
    DEFAULT_ROOM_CODE,
};

use crate::{middleware::error_handling::AppError, ApiState};

/// Query parameters for the month availability endpoint
#[derive(Debug, Deserialize)]
pub struct MonthQuery {
    pub year: i32,

    /// 1-based calendar month
    pub month: u32,

    /// Room to scope to; the fixed group code when absent
    pub room_code: Option<String>,
}

/// Derives the common-availability set from one month of entries.
///
/// Returns the (date, segment) cells where every active player reported
/// available=true. With no active players the set is empty. Duplicate keys in
/// the input are harmless: a single available=true row for a key is enough to
/// count that player, which matches last-write-wins storage where duplicates
/// never actually occur.
pub fn common_cells(entries: &[AvailabilityEntry]) -> Vec<CommonCell> {
    let active: BTreeSet<Player> = entries.iter().map(|e| e.nickname).collect();
    if active.is_empty() {
        return Vec::new();
    }

    let mut by_cell: BTreeMap<(chrono::NaiveDate, Segment), BTreeSet<Player>> = BTreeMap::new();
    for entry in entries.iter().filter(|e| e.available) {
        by_cell
            .entry((entry.date, entry.segment))
            .or_default()
            .insert(entry.nickname);
    }

    by_cell
        .into_iter()
        .filter(|(_, players)| active.iter().all(|p| players.contains(p)))
        .map(|((date, segment), _)| CommonCell { date, segment })
        .collect()
}

/// Returns the full availability grid for one (year, month) scope
///
/// # Endpoint
///
/// ```text
/// GET /api/availability/month?year=2026&month=1&room_code=MAJIANG
/// ```
///
/// The response carries every player's entries for the month plus the
/// recomputed common set; the client replaces its cache wholesale with it.
#[axum::debug_handler]
pub async fn get_month_availability(
    State(state): State<Arc<ApiState>>,
    Query(query): Query<MonthQuery>,
) -> Result<Json<MonthResponse>, AppError> {
    let scope = MonthRef::new(query.year, query.month)?;
    let room_code = query.room_code.as_deref().unwrap_or(DEFAULT_ROOM_CODE);

    let rows = tabletime_db::repositories::availability::month_entries(
        &state.db_pool,
        room_code,
        scope,
    )
    .await
    .map_err(TimeError::Database)?;

    let mut entries = Vec::with_capacity(rows.len());
    for row in rows {
        // Rows are validated on write; anything unparsable got there by hand.
        let (nickname, segment) =
            match (Player::from_str(&row.nickname), Segment::from_str(&row.segment)) {
                (Ok(nickname), Ok(segment)) => (nickname, segment),
                _ => {
                    tracing::warn!(
                        "Skipping unparsable availability row: nickname={}, segment={}",
                        row.nickname,
                        row.segment
                    );
                    continue;
                }
            };
        entries.push(AvailabilityEntry {
            nickname,
            date: row.date,
            segment,
            available: row.available,
        });
    }

    let common = common_cells(&entries);

    Ok(Json(MonthResponse {
        success: true,
        entries,
        common,
        error: None,
    }))
}

/// Applies one player's batched cell changes
///
/// # Endpoint
///
/// ```text
/// POST /api/availability/batch
/// {"room_code": "MAJIANG", "nickname": "Player 1",
///  "changes": [{"date": "2026-01-24", "segment": "evening", "available": true}]}
/// ```
///
/// Writes upsert against the (room, player, date, segment) key, so replaying
/// a batch or re-toggling a cell simply overwrites the stored value.
#[axum::debug_handler]
pub async fn set_availability_batch(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<BatchRequest>,
) -> Result<Json<Ack>, AppError> {
    let player = validate_batch(&payload)?;
    let room_code = payload.room_code.as_deref().unwrap_or(DEFAULT_ROOM_CODE);

    tabletime_db::repositories::availability::upsert_cells(
        &state.db_pool,
        room_code,
        player,
        &payload.changes,
    )
    .await
    .map_err(TimeError::Database)?;

    Ok(Json(Ack::ok()))
}

/// Checks a batch request: the nickname must name one of the four fixed
/// players and the change list must be non-empty.
pub fn validate_batch(payload: &BatchRequest) -> Result<Player, TimeError> {
    let player = Player::from_str(&payload.nickname)
        .map_err(|_| TimeError::Validation("nickname must be one of Player 1-4".to_string()))?;

    if payload.changes.is_empty() {
        return Err(TimeError::Validation(
            "changes must be a non-empty array".to_string(),
        ));
    }

    Ok(player)
}
