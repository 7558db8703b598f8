//! SeaORM entities for the replicated FCC ULS tables.
//!
//! The `l_hd`, `l_en` and `l_am` tables mirror the ULS license header, entity and
//! amateur record files, joined on `unique_system_identifier`. The `db_updates` table is
//! the append-only log written by the replication pipeline after each full or
//! incremental load.

pub mod prelude;

pub mod db_updates;
pub mod l_am;
pub mod l_en;
pub mod l_hd;
