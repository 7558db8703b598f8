//! Server application models and type definitions.
//!
//! This module contains the domain models of the bot: application state, database model
//! type aliases, the FCC code tables, license records with their display view, and the
//! replica status report.

pub mod app;
pub mod db;
pub mod fcc;
pub mod license;
pub mod status;
