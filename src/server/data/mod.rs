//! Data access layer repositories.
//!
//! Repositories provide an abstraction layer over the replicated ULS tables. Each takes
//! the database connection it should use, so callers decide which pool (or test
//! database) a query runs against.

pub mod uls;
