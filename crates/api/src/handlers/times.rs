//! # Legacy Interval Handlers
//!
//! The original coordination page collected free time as arbitrary
//! (date, start, end) intervals per player. The segment grid superseded that
//! input, but the endpoints stay wire-compatible: submission, listing, and
//! the per-date interval intersection that finds when everyone overlaps.

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::{NaiveDate, NaiveTime};
use std::collections::BTreeMap;
use std::sync::Arc;
use tabletime_core::{
    errors::TimeError,
    models::availability::Ack,
    models::time_slot::{
        CommonTime, CommonTimesResponse, GetTimesResponse, SubmitTimeRequest, TimeSlotEntry,
    },
    DEFAULT_ROOM_CODE,
};

use crate::{middleware::error_handling::AppError, ApiState};

/// Records one free interval for a player
///
/// # Endpoint
///
/// ```text
/// POST /api/submit-time
/// {"room_code": "MAJIANG", "nickname": "Player 1", "date": "2024-05-10",
///  "start_time": "10:00:00", "end_time": "12:00:00"}
/// ```
#[axum::debug_handler]
pub async fn submit_time(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<SubmitTimeRequest>,
) -> Result<Json<Ack>, AppError> {
    validate_submission(&payload)?;
    let room_code = payload.room_code.as_deref().unwrap_or(DEFAULT_ROOM_CODE);

    tabletime_db::repositories::time_slot::create_time_slot(
        &state.db_pool,
        room_code,
        &payload.nickname,
        payload.date,
        payload.start_time,
        payload.end_time,
    )
    .await
    .map_err(TimeError::Database)?;

    Ok(Json(Ack::ok()))
}

/// Checks an interval submission: a nickname is required and the interval
/// must run forward.
pub fn validate_submission(payload: &SubmitTimeRequest) -> Result<(), TimeError> {
    if payload.nickname.trim().is_empty() {
        return Err(TimeError::Validation("nickname is required".to_string()));
    }
    if payload.start_time >= payload.end_time {
        return Err(TimeError::Validation(
            "end_time must be after start_time".to_string(),
        ));
    }
    Ok(())
}

/// Lists every submitted interval for a room, ordered by date and start time
#[axum::debug_handler]
pub async fn get_times(
    State(state): State<Arc<ApiState>>,
    Path(room_code): Path<String>,
) -> Result<Json<GetTimesResponse>, AppError> {
    let rows = tabletime_db::repositories::time_slot::get_time_slots_by_room(
        &state.db_pool,
        &room_code,
    )
    .await
    .map_err(TimeError::Database)?;

    let times = rows
        .into_iter()
        .map(|row| TimeSlotEntry {
            nickname: row.nickname,
            date: row.date,
            start_time: row.start_time,
            end_time: row.end_time,
        })
        .collect();

    Ok(Json(GetTimesResponse { success: true, times }))
}

/// Computes the intervals where every submitting player overlaps
///
/// # Endpoint
///
/// ```text
/// GET /api/get-common-times/{room_code}
/// ```
#[axum::debug_handler]
pub async fn get_common_times(
    State(state): State<Arc<ApiState>>,
    Path(room_code): Path<String>,
) -> Result<Json<CommonTimesResponse>, AppError> {
    let rows = tabletime_db::repositories::time_slot::get_time_slots_by_room(
        &state.db_pool,
        &room_code,
    )
    .await
    .map_err(TimeError::Database)?;

    let times: Vec<TimeSlotEntry> = rows
        .into_iter()
        .map(|row| TimeSlotEntry {
            nickname: row.nickname,
            date: row.date,
            start_time: row.start_time,
            end_time: row.end_time,
        })
        .collect();

    Ok(Json(CommonTimesResponse {
        success: true,
        common_times: common_intervals(&times),
    }))
}

/// Per-date intersection of every submitting player's intervals.
///
/// For each date: fold the first player's intervals against each further
/// player's by pairwise intersection, then merge overlapping survivors.
/// Dates where some player submitted nothing produce no common time (the
/// intersection with an absent player's empty set is empty only if that
/// player submitted for the date at all — players are scoped per date, as in
/// the original page).
pub fn common_intervals(times: &[TimeSlotEntry]) -> Vec<CommonTime> {
    let mut by_date: BTreeMap<NaiveDate, Vec<&TimeSlotEntry>> = BTreeMap::new();
    for entry in times {
        by_date.entry(entry.date).or_default().push(entry);
    }

    let mut common_times = Vec::new();
    for (date, slots) in by_date {
        // Per-player interval lists for this date
        let mut user_intervals: BTreeMap<&str, Vec<(NaiveTime, NaiveTime)>> = BTreeMap::new();
        for slot in &slots {
            user_intervals
                .entry(slot.nickname.as_str())
                .or_default()
                .push((slot.start_time, slot.end_time));
        }

        let mut users = user_intervals.values();
        let Some(first) = users.next() else { continue };

        // Fold pairwise intersections across the remaining players
        let mut common: Vec<(NaiveTime, NaiveTime)> = first.clone();
        for intervals in users {
            let mut next_common = Vec::new();
            for &(c_start, c_end) in &common {
                for &(u_start, u_end) in intervals {
                    let start = c_start.max(u_start);
                    let end = c_end.min(u_end);
                    if start < end {
                        next_common.push((start, end));
                    }
                }
            }
            common = next_common;
            if common.is_empty() {
                break;
            }
        }

        if common.is_empty() {
            continue;
        }

        // Merge overlapping or touching survivors
        common.sort();
        let mut merged: Vec<(NaiveTime, NaiveTime)> = vec![common[0]];
        for &(start, end) in &common[1..] {
            let last = merged
                .last_mut()
                .expect("merged starts non-empty");
            if start <= last.1 {
                last.1 = last.1.max(end);
            } else {
                merged.push((start, end));
            }
        }

        for (start_time, end_time) in merged {
            common_times.push(CommonTime { date, start_time, end_time });
        }
    }

    common_times
}
