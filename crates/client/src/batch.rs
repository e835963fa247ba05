use std::collections::HashMap;
use std::time::{Duration, Instant};

use tabletime_core::models::availability::CellChange;

use crate::cache::Cell;

/// Default pause after the last toggle before a flush fires.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(400);

/// Queue of cell mutations not yet confirmed persisted.
///
/// Changes are keyed by cell, so repeated toggles of the same cell before a
/// flush collapse into the latest value. Every recorded change pushes the
/// flush deadline out by the debounce delay; the deadline only expires after
/// interaction pauses.
#[derive(Debug)]
pub struct PendingBatch {
    changes: HashMap<Cell, bool>,
    deadline: Option<Instant>,
    debounce: Duration,
}

impl PendingBatch {
    pub fn new(debounce: Duration) -> Self {
        PendingBatch {
            changes: HashMap::new(),
            deadline: None,
            debounce,
        }
    }

    /// Records one cell mutation, overwriting any queued value for the same
    /// cell, and resets the debounce timer.
    pub fn record(&mut self, cell: Cell, available: bool, now: Instant) {
        self.changes.insert(cell, available);
        self.deadline = Some(now + self.debounce);
    }

    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.changes.len()
    }

    /// When the next flush should fire, if anything is queued.
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Whether the debounce window has elapsed since the last change.
    pub fn is_due(&self, now: Instant) -> bool {
        self.deadline.is_some_and(|deadline| now >= deadline)
    }

    /// Snapshots and clears the queue. Called synchronously before the
    /// network send starts, so toggles arriving during the round-trip open a
    /// fresh batch instead of racing the in-flight one.
    pub fn take(&mut self) -> Vec<CellChange> {
        self.deadline = None;
        let mut changes: Vec<CellChange> = self
            .changes
            .drain()
            .map(|(cell, available)| CellChange {
                date: cell.date,
                segment: cell.segment,
                available,
            })
            .collect();
        // Deterministic wire order; the server upserts per cell either way.
        changes.sort_by_key(|c| (c.date, c.segment));
        changes
    }
}

impl Default for PendingBatch {
    fn default() -> Self {
        PendingBatch::new(DEFAULT_DEBOUNCE)
    }
}
