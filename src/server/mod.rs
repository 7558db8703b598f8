//! Server application core modules.
//!
//! This module contains the backend of the ULS bot: configuration, database startup,
//! repositories over the replicated FCC ULS tables, the lookup and status services, and
//! the command handlers that turn their results into chat replies.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod service;
pub mod startup;
pub mod util;
