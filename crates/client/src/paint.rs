use std::time::Instant;

use crate::cache::Cell;
use crate::state::AppState;

/// Paint gesture state. One continuous pointer interaction applies a single
/// boolean value to every cell it passes over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaintState {
    Idle,
    /// A drag in progress, carrying the value being painted.
    Painting(bool),
}

/// Interprets pointer events over the month grid as availability toggles.
///
/// Pointer-down on a cell inverts that cell's current value and starts a
/// drag; every cell entered while the drag holds receives the same value;
/// pointer-up (or cancel, from a capture-all listener) ends the gesture.
/// Without a selected identity every event is a no-op.
///
/// Each applied cell mutates the cache optimistically and enqueues into the
/// pending batch, rescheduling the debounced flush.
#[derive(Debug)]
pub struct PaintController {
    state: PaintState,
}

impl PaintController {
    pub fn new() -> Self {
        PaintController { state: PaintState::Idle }
    }

    pub fn state(&self) -> PaintState {
        self.state
    }

    /// Starts a paint gesture on a cell. Returns the value painted, or
    /// `None` when nothing happened (no identity, or a drag already active).
    pub fn pointer_down(&mut self, app: &mut AppState, cell: Cell, now: Instant) -> Option<bool> {
        let player = app.identity?;
        if self.state != PaintState::Idle {
            return None;
        }

        let value = !app.cache.is_available(player, cell);
        self.state = PaintState::Painting(value);
        apply(app, cell, value, now);
        Some(value)
    }

    /// Extends an active gesture onto a newly entered cell. Idempotent when
    /// the cell already holds the painted value; a no-op while idle.
    pub fn pointer_enter(&mut self, app: &mut AppState, cell: Cell, now: Instant) -> Option<bool> {
        let PaintState::Painting(value) = self.state else {
            return None;
        };
        if app.identity.is_none() {
            return None;
        }

        apply(app, cell, value, now);
        Some(value)
    }

    /// Ends the gesture. Fired on pointer-up or pointer-cancel anywhere,
    /// including outside the grid; no further cells are touched after this.
    pub fn pointer_up(&mut self) {
        self.state = PaintState::Idle;
    }
}

impl Default for PaintController {
    fn default() -> Self {
        PaintController::new()
    }
}

fn apply(app: &mut AppState, cell: Cell, value: bool, now: Instant) {
    // identity checked by the callers
    if let Some(player) = app.identity {
        app.cache.set_local(player, cell, value);
        app.pending.record(cell, value, now);
    }
}
