//! Utility functions and helpers for server operations.
//!
//! Date parsing and formatting shared by the license view and the command presenter.

pub mod time;
