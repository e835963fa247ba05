use std::collections::{HashMap, HashSet};

use chrono::NaiveDate;
use tabletime_core::calendar::MonthRef;
use tabletime_core::models::availability::{AvailabilityEntry, CommonCell};
use tabletime_core::models::player::Player;
use tabletime_core::models::segment::Segment;

/// Identity of one grid cell, passed explicitly through the controller
/// boundary rather than re-derived from display state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub date: NaiveDate,
    pub segment: Segment,
}

impl Cell {
    pub fn new(date: NaiveDate, segment: Segment) -> Self {
        Cell { date, segment }
    }
}

/// In-memory reduction of all players' availability for exactly one
/// (year, month) scope, plus the server-computed common set.
///
/// The local player's optimistic writes land here immediately via
/// [`AvailabilityCache::set_local`]; everything else only changes through
/// [`AvailabilityCache::replace`], which installs a full server snapshot and
/// is the sole source of truth for other players and the common set.
#[derive(Debug)]
pub struct AvailabilityCache {
    scope: MonthRef,
    grid: HashMap<(Player, Cell), bool>,
    common: HashSet<Cell>,
}

impl AvailabilityCache {
    pub fn new(scope: MonthRef) -> Self {
        AvailabilityCache {
            scope,
            grid: HashMap::new(),
            common: HashSet::new(),
        }
    }

    /// The month this cache currently describes.
    pub fn scope(&self) -> MonthRef {
        self.scope
    }

    /// Switches to a new month, dropping all cached state. The view stays
    /// empty until the next [`AvailabilityCache::replace`] lands.
    pub fn navigate(&mut self, scope: MonthRef) {
        self.scope = scope;
        self.grid.clear();
        self.common.clear();
    }

    /// Atomically discards prior state and installs a full server snapshot.
    ///
    /// Entry order is irrelevant except for duplicate keys, where the last
    /// one wins (the server's unique key means duplicates do not occur in
    /// practice).
    pub fn replace(&mut self, scope: MonthRef, entries: &[AvailabilityEntry], common: &[CommonCell]) {
        self.scope = scope;
        self.grid.clear();
        self.common.clear();

        for entry in entries {
            self.grid
                .insert((entry.nickname, Cell::new(entry.date, entry.segment)), entry.available);
        }
        for cell in common {
            self.common.insert(Cell::new(cell.date, cell.segment));
        }
    }

    /// Optimistic single-cell write for the local player. Never touches the
    /// common set; that is only recomputed server-side and arrives via
    /// [`AvailabilityCache::replace`].
    pub fn set_local(&mut self, player: Player, cell: Cell, available: bool) {
        self.grid.insert((player, cell), available);
    }

    /// A player's recorded availability for a cell; absent means false.
    pub fn is_available(&self, player: Player, cell: Cell) -> bool {
        self.grid.get(&(player, cell)).copied().unwrap_or(false)
    }

    /// Whether every active player marked this cell available, per the last
    /// server snapshot.
    pub fn is_common(&self, cell: Cell) -> bool {
        self.common.contains(&cell)
    }
}
