//! # Tabletime Client
//!
//! The client-side availability state machine: everything between pointer
//! events on the month grid and the persistence API. The embedding UI owns
//! the event loop and the markup; this crate owns the state.
//!
//! ## Data flow
//!
//! Pointer events feed the [`paint::PaintController`], which optimistically
//! mutates the [`cache::AvailabilityCache`] and records each toggle in the
//! [`batch::PendingBatch`]. Once interaction pauses past the debounce delay,
//! the [`sync::Synchronizer`] flushes the coalesced batch through the
//! [`api::AvailabilityApi`] transport and re-fetches the authoritative month,
//! replacing the cache wholesale so other players' concurrent edits and the
//! recomputed common set are absorbed.

/// HTTP transport trait and reqwest implementation
pub mod api;
/// Pending-change queue with debounced flush scheduling
pub mod batch;
/// Month-scoped availability cache and the derived common set
pub mod cache;
/// Configuration module for client settings
pub mod config;
/// Client-side error types
pub mod error;
/// Month grid derivation for rendering
pub mod grid;
/// Persisted player identity
pub mod identity;
/// Drag-to-toggle paint state machine
pub mod paint;
/// Application state owned by the controller components
pub mod state;
/// Batch flush and authoritative re-fetch
pub mod sync;

pub use api::{AvailabilityApi, HttpApi, MonthSnapshot};
pub use batch::PendingBatch;
pub use cache::{AvailabilityCache, Cell};
pub use error::ClientError;
pub use paint::{PaintController, PaintState};
pub use state::AppState;
pub use sync::Synchronizer;
