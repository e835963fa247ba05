use std::time::Duration;

use tabletime_core::calendar::MonthRef;

use crate::api::{AvailabilityApi, MonthSnapshot};
use crate::error::ClientResult;
use crate::state::AppState;

/// How often the embedding UI should trigger a background refresh.
pub const REFRESH_INTERVAL: Duration = Duration::from_secs(5);

/// Sends coalesced pending changes and re-fetches authoritative month state.
///
/// The synchronizer never runs its own event loop: the embedding UI calls
/// [`Synchronizer::flush`] when the pending batch comes due, and
/// [`Synchronizer::refresh`] on navigation and the periodic tick. All
/// suspension happens at the network boundary; the pending map is cleared
/// synchronously before the send starts, so a new drag during an in-flight
/// flush opens an independent batch.
pub struct Synchronizer<A: AvailabilityApi> {
    api: A,
}

impl<A: AvailabilityApi> Synchronizer<A> {
    pub fn new(api: A) -> Self {
        Synchronizer { api }
    }

    /// Flushes the pending batch, if any, then re-fetches the month.
    ///
    /// Returns whether a batch was sent. On failure the snapshot is *not*
    /// restored into the pending queue: the optimistic local state stays
    /// visible until the next successful refresh overwrites it, and the
    /// error is returned for the caller to surface.
    pub async fn flush(&self, app: &mut AppState) -> ClientResult<bool> {
        let Some(player) = app.identity else {
            return Ok(false);
        };

        // Snapshot and clear before the first await.
        let changes = app.pending.take();
        if changes.is_empty() {
            return Ok(false);
        }

        tracing::debug!("Flushing {} cell change(s) for {}", changes.len(), player);
        self.api.send_batch(player, changes).await?;

        // Absorb other players' concurrent edits and the recomputed common
        // set.
        self.refresh(app).await?;
        Ok(true)
    }

    /// Fetches the currently viewed month and installs it in the cache.
    ///
    /// Returns whether the snapshot was applied (a response for a month the
    /// user has navigated away from is discarded).
    pub async fn refresh(&self, app: &mut AppState) -> ClientResult<bool> {
        let scope = app.scope();
        let snapshot = self.api.fetch_month(scope).await?;
        Ok(apply_snapshot(app, snapshot))
    }

    /// Switches the viewed month and fetches it. The cache empties
    /// immediately so the grid never shows another month's cells under the
    /// new header.
    pub async fn navigate(&self, app: &mut AppState, scope: MonthRef) -> ClientResult<bool> {
        app.cache.navigate(scope);
        self.refresh(app).await
    }
}

/// Installs a fetched snapshot unless the app has moved to a different month
/// since the request was issued. `replace` is idempotent and
/// order-independent for same-scope responses, so late same-month replies
/// are always safe to apply.
pub fn apply_snapshot(app: &mut AppState, snapshot: MonthSnapshot) -> bool {
    if snapshot.scope != app.scope() {
        tracing::debug!(
            "Discarding stale month response for {}-{:02}",
            snapshot.scope.year(),
            snapshot.scope.month()
        );
        return false;
    }
    app.cache.replace(snapshot.scope, &snapshot.entries, &snapshot.common);
    true
}
