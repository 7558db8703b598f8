//! Test fixture modules for database record creation.
//!
//! - `uls` - ULS license rows and replication log entries

pub mod uls;
