use std::time::{Duration, Instant};

use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use tabletime_client::api::{MockAvailabilityApi, MonthSnapshot};
use tabletime_client::cache::Cell;
use tabletime_client::error::ClientError;
use tabletime_client::paint::PaintController;
use tabletime_client::state::AppState;
use tabletime_client::sync::{apply_snapshot, Synchronizer};
use tabletime_core::calendar::MonthRef;
use tabletime_core::models::{
    availability::{AvailabilityEntry, CommonCell},
    player::Player,
    segment::Segment,
};

fn scope() -> MonthRef {
    MonthRef::new(2024, 5).unwrap()
}

fn date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 5, day).unwrap()
}

fn app() -> AppState {
    let mut app = AppState::with_debounce(scope(), Duration::from_millis(400));
    app.select_identity(Player::One);
    app
}

fn rejected() -> ClientError {
    ClientError::Rejected("nope".to_string())
}

#[tokio::test]
async fn test_flush_without_pending_changes_is_noop() {
    let api = MockAvailabilityApi::new();
    let sync = Synchronizer::new(api);
    let mut app = app();

    // No expectations set: any call would panic the mock.
    assert!(!sync.flush(&mut app).await.unwrap());
}

#[tokio::test]
async fn test_flush_without_identity_is_noop() {
    let api = MockAvailabilityApi::new();
    let sync = Synchronizer::new(api);
    let mut app = AppState::new(scope());

    assert!(!sync.flush(&mut app).await.unwrap());
}

#[tokio::test]
async fn test_toggle_flush_refetch_round_trip() {
    // Player One paints one cell; the flush must carry exactly that one
    // change and the follow-up fetch replaces the cache with server truth.
    let mut api = MockAvailabilityApi::new();
    api.expect_send_batch()
        .times(1)
        .withf(|player, changes| {
            *player == Player::One
                && changes.len() == 1
                && changes[0].date == date(10)
                && changes[0].segment == Segment::Morning
                && changes[0].available
        })
        .returning(|_, _| Ok(()));
    api.expect_fetch_month().times(1).returning(|scope| {
        Ok(MonthSnapshot {
            scope,
            entries: vec![
                AvailabilityEntry {
                    nickname: Player::One,
                    date: date(10),
                    segment: Segment::Morning,
                    available: true,
                },
                AvailabilityEntry {
                    nickname: Player::Two,
                    date: date(10),
                    segment: Segment::Morning,
                    available: true,
                },
            ],
            common: vec![CommonCell { date: date(10), segment: Segment::Morning }],
        })
    });

    let sync = Synchronizer::new(api);
    let mut app = app();
    let mut paint = PaintController::new();
    let now = Instant::now();

    // Toggle the same cell three times within the debounce window; only the
    // final value goes out.
    let target = Cell::new(date(10), Segment::Morning);
    for _ in 0..3 {
        paint.pointer_down(&mut app, target, now);
        paint.pointer_up();
    }
    assert!(app.pending.is_due(now + Duration::from_millis(400)));

    assert!(sync.flush(&mut app).await.unwrap());

    // Authoritative state landed: both players available, cell is common.
    assert!(app.pending.is_empty());
    assert!(app.cache.is_available(Player::One, target));
    assert!(app.cache.is_available(Player::Two, target));
    assert!(app.cache.is_common(target));
}

#[tokio::test]
async fn test_failed_flush_keeps_local_state_and_drops_snapshot() {
    let mut api = MockAvailabilityApi::new();
    api.expect_send_batch().times(1).returning(|_, _| Err(rejected()));

    let sync = Synchronizer::new(api);
    let mut app = app();
    let mut paint = PaintController::new();
    let target = Cell::new(date(10), Segment::Morning);

    paint.pointer_down(&mut app, target, Instant::now());
    paint.pointer_up();

    let result = sync.flush(&mut app).await;
    assert!(matches!(result, Err(ClientError::Rejected(_))));

    // The snapshot is not restored into the queue; the optimistic cache
    // value stays visible until the next successful refresh.
    assert!(app.pending.is_empty());
    assert!(app.cache.is_available(Player::One, target));
}

#[tokio::test]
async fn test_refresh_replaces_cache_for_current_scope() {
    let mut api = MockAvailabilityApi::new();
    api.expect_fetch_month().times(1).returning(|scope| {
        Ok(MonthSnapshot {
            scope,
            entries: vec![AvailabilityEntry {
                nickname: Player::Four,
                date: date(20),
                segment: Segment::Evening,
                available: true,
            }],
            common: vec![],
        })
    });

    let sync = Synchronizer::new(api);
    let mut app = app();
    app.cache.set_local(Player::One, Cell::new(date(10), Segment::Noon), true);

    assert!(sync.refresh(&mut app).await.unwrap());

    // replace is wholesale: the optimistic write is discarded.
    assert!(!app.cache.is_available(Player::One, Cell::new(date(10), Segment::Noon)));
    assert!(app.cache.is_available(Player::Four, Cell::new(date(20), Segment::Evening)));
}

#[tokio::test]
async fn test_stale_month_snapshot_is_discarded() {
    let mut app = app();

    // A May response arrives after the user navigated to June.
    let stale = MonthSnapshot {
        scope: scope(),
        entries: vec![AvailabilityEntry {
            nickname: Player::One,
            date: date(10),
            segment: Segment::Morning,
            available: true,
        }],
        common: vec![],
    };
    let june = MonthRef::new(2024, 6).unwrap();
    app.cache.navigate(june);

    assert!(!apply_snapshot(&mut app, stale));
    assert_eq!(app.scope(), june);
    assert!(!app.cache.is_available(Player::One, Cell::new(date(10), Segment::Morning)));
}

#[tokio::test]
async fn test_navigate_fetches_new_scope() {
    let june = MonthRef::new(2024, 6).unwrap();
    let mut api = MockAvailabilityApi::new();
    api.expect_fetch_month()
        .times(1)
        .withf(move |scope| *scope == june)
        .returning(|scope| Ok(MonthSnapshot { scope, entries: vec![], common: vec![] }));

    let sync = Synchronizer::new(api);
    let mut app = app();

    assert!(sync.navigate(&mut app, june).await.unwrap());
    assert_eq!(app.scope(), june);
}

#[tokio::test]
async fn test_refresh_network_error_is_surfaced() {
    let mut api = MockAvailabilityApi::new();
    api.expect_fetch_month()
        .times(1)
        .returning(|_| Err(ClientError::Rejected("backend down".to_string())));

    let sync = Synchronizer::new(api);
    let mut app = app();
    app.cache.set_local(Player::One, Cell::new(date(10), Segment::Noon), true);

    assert!(sync.refresh(&mut app).await.is_err());
    // The cache keeps showing what it had; the periodic tick retries later.
    assert!(app.cache.is_available(Player::One, Cell::new(date(10), Segment::Noon)));
}
