//! # Tabletime Core
//!
//! Shared domain types for the tabletime availability coordinator: the fixed
//! player and segment catalogs, the wire models exchanged between the client
//! and the API server, calendar arithmetic for month-scoped views, and the
//! common error type.

/// Calendar arithmetic for month-scoped availability views
pub mod calendar;
/// Domain and API error types
pub mod errors;
/// Wire models shared between client and server
pub mod models;

/// Group identifier sent on every API call. Multi-room support was dropped;
/// the code remains as a data-partitioning key.
pub const DEFAULT_ROOM_CODE: &str = "MAJIANG";
