//! Test utilities for the ULS bot backend.
//!
//! Tests are set up in two phases: a declarative [`TestBuilder`] queues tables and
//! fixtures, and `build()` returns a [`TestContext`] backed by an in-memory SQLite
//! database that the test then exercises.

pub mod builder;
pub mod constant;
pub mod context;
pub mod error;
pub mod fixtures;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{
        constant::{APPLICATION_DB, LICENSE_DB, PROBE_CALLSIGN},
        fixtures::uls::factory,
        TestBuilder, TestContext, TestError,
    };
}
