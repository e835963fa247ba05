//! Derives the renderable month grid from the cache. Pure state-to-view
//! mapping; no markup, no side effects.

use chrono::NaiveDate;
use tabletime_core::calendar::MonthRef;
use tabletime_core::models::player::Player;
use tabletime_core::models::segment::Segment;

use crate::cache::{AvailabilityCache, Cell};

/// What one grid cell shows: the local player's mark, the other players'
/// dots, and the common highlight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellView {
    pub segment: Segment,
    /// Whether the current player marked this cell available.
    pub mine: bool,
    /// Other players who marked it available, in seat order.
    pub others: Vec<Player>,
    /// Whether the cell is in the common-availability set.
    pub common: bool,
}

/// One calendar day: a row of four segment cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayRow {
    pub date: NaiveDate,
    pub cells: Vec<CellView>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    pub scope: MonthRef,
    pub rows: Vec<DayRow>,
}

/// Builds the grid for the cache's month: one row per day 1..=days_in_month,
/// one column per segment. Month length comes from calendar arithmetic, so
/// leap February and 30/31-day months come out right.
pub fn month_grid(cache: &AvailabilityCache, current: Option<Player>) -> MonthGrid {
    let scope = cache.scope();
    let first = scope.first_day();

    let rows = (0..scope.days())
        .filter_map(|offset| first.checked_add_days(chrono::Days::new(offset as u64)))
        .map(|date| DayRow {
            date,
            cells: Segment::ALL
                .into_iter()
                .map(|segment| {
                    let cell = Cell::new(date, segment);
                    CellView {
                        segment,
                        mine: current.is_some_and(|p| cache.is_available(p, cell)),
                        others: Player::ALL
                            .into_iter()
                            .filter(|&p| current != Some(p) && cache.is_available(p, cell))
                            .collect(),
                        common: cache.is_common(cell),
                    }
                })
                .collect(),
        })
        .collect();

    MonthGrid { scope, rows }
}
