//! Database model type aliases.
//!
//! Convenient aliases for SeaORM models used outside the data layer, so services don't
//! import from the generated `entity` crate directly.

/// Type alias for one entry of the replication log.
///
/// # Fields (from `entity::db_updates::Model`)
/// - `id` - Primary key
/// - `db_name` - `APPLICATION` or `LICENSE`
/// - `update_type` - `COMPLETE` or `INCREMENTAL`
/// - `incremental_day` - Day label of a differential file, NULL for full loads
/// - `ts` - When the load was applied
pub type DbUpdateModel = entity::db_updates::Model;
