use std::time::Duration;

use tabletime_core::calendar::MonthRef;
use tabletime_core::models::player::Player;

use crate::batch::{PendingBatch, DEFAULT_DEBOUNCE};
use crate::cache::AvailabilityCache;

/// The mutable application state shared by the controller components: the
/// chosen identity, the viewed month (owned by the cache), the availability
/// cache, and the pending-change queue. Owned explicitly and passed to the
/// controllers; there is no ambient global.
#[derive(Debug)]
pub struct AppState {
    pub identity: Option<Player>,
    pub cache: AvailabilityCache,
    pub pending: PendingBatch,
}

impl AppState {
    pub fn new(scope: MonthRef) -> Self {
        AppState::with_debounce(scope, DEFAULT_DEBOUNCE)
    }

    pub fn with_debounce(scope: MonthRef, debounce: Duration) -> Self {
        AppState {
            identity: None,
            cache: AvailabilityCache::new(scope),
            pending: PendingBatch::new(debounce),
        }
    }

    /// Binds the local actor to one of the four player slots.
    pub fn select_identity(&mut self, player: Player) {
        self.identity = Some(player);
    }

    /// The month currently on screen.
    pub fn scope(&self) -> MonthRef {
        self.cache.scope()
    }
}
