/// Availability grid wire types (entries, batches, month views)
pub mod availability;
/// Fixed four-player catalog
pub mod player;
/// Fixed daily segment catalog
pub mod segment;
/// Legacy per-interval submission types
pub mod time_slot;
