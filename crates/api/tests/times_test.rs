use axum::http::StatusCode;
use axum::response::IntoResponse;
use chrono::{NaiveDate, NaiveTime};
use pretty_assertions::assert_eq;
use tabletime_api::handlers::times::{common_intervals, validate_submission};
use tabletime_api::middleware::error_handling::AppError;
use tabletime_core::errors::TimeError;
use tabletime_core::models::time_slot::{CommonTime, SubmitTimeRequest, TimeSlotEntry};

fn date(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 5, d).unwrap()
}

fn time(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

fn slot(nickname: &str, day: u32, start: (u32, u32), end: (u32, u32)) -> TimeSlotEntry {
    TimeSlotEntry {
        nickname: nickname.to_string(),
        date: date(day),
        start_time: time(start.0, start.1),
        end_time: time(end.0, end.1),
    }
}

#[test]
fn test_common_intervals_empty() {
    assert_eq!(common_intervals(&[]), vec![]);
}

#[test]
fn test_common_intervals_single_player_passes_through() {
    let times = vec![slot("Player 1", 10, (9, 0), (11, 0))];

    assert_eq!(
        common_intervals(&times),
        vec![CommonTime { date: date(10), start_time: time(9, 0), end_time: time(11, 0) }]
    );
}

#[test]
fn test_common_intervals_two_player_overlap() {
    let times = vec![
        slot("Player 1", 10, (9, 0), (12, 0)),
        slot("Player 2", 10, (10, 30), (14, 0)),
    ];

    assert_eq!(
        common_intervals(&times),
        vec![CommonTime { date: date(10), start_time: time(10, 30), end_time: time(12, 0) }]
    );
}

#[test]
fn test_common_intervals_disjoint_players() {
    let times = vec![
        slot("Player 1", 10, (9, 0), (10, 0)),
        slot("Player 2", 10, (11, 0), (12, 0)),
    ];

    assert_eq!(common_intervals(&times), vec![]);
}

#[test]
fn test_common_intervals_merges_overlapping_pieces() {
    // Player 1 split their morning in two touching intervals; the overlap
    // with player 2 comes out as one merged interval.
    let times = vec![
        slot("Player 1", 10, (9, 0), (10, 30)),
        slot("Player 1", 10, (10, 30), (12, 0)),
        slot("Player 2", 10, (9, 30), (11, 30)),
    ];

    assert_eq!(
        common_intervals(&times),
        vec![CommonTime { date: date(10), start_time: time(9, 30), end_time: time(11, 30) }]
    );
}

#[test]
fn test_common_intervals_scoped_per_date() {
    // Player 2 never submitted for day 11, so only day 10 intersects; day 11
    // has a single submitting player and passes through.
    let times = vec![
        slot("Player 1", 10, (9, 0), (12, 0)),
        slot("Player 2", 10, (11, 0), (13, 0)),
        slot("Player 1", 11, (15, 0), (18, 0)),
    ];

    assert_eq!(
        common_intervals(&times),
        vec![
            CommonTime { date: date(10), start_time: time(11, 0), end_time: time(12, 0) },
            CommonTime { date: date(11), start_time: time(15, 0), end_time: time(18, 0) },
        ]
    );
}

#[test]
fn test_common_intervals_three_players() {
    let times = vec![
        slot("Player 1", 10, (9, 0), (18, 0)),
        slot("Player 2", 10, (10, 0), (15, 0)),
        slot("Player 3", 10, (14, 0), (20, 0)),
    ];

    assert_eq!(
        common_intervals(&times),
        vec![CommonTime { date: date(10), start_time: time(14, 0), end_time: time(15, 0) }]
    );
}

#[test]
fn test_validate_submission() {
    let mut request = SubmitTimeRequest {
        room_code: None,
        nickname: "Player 1".to_string(),
        date: date(10),
        start_time: time(10, 0),
        end_time: time(12, 0),
    };
    assert!(validate_submission(&request).is_ok());

    request.nickname = "  ".to_string();
    assert!(validate_submission(&request).is_err());

    request.nickname = "Player 1".to_string();
    request.end_time = time(10, 0);
    assert!(validate_submission(&request).is_err());
}

#[test]
fn test_error_status_mapping() {
    let response = AppError(TimeError::Validation("bad".to_string())).into_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = AppError(TimeError::NotFound("missing".to_string())).into_response();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = AppError(TimeError::Database(eyre::eyre!("down"))).into_response();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}
