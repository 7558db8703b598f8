//! Reply models shared between the command handlers and whatever renders them.

pub mod api;
pub mod embed;
