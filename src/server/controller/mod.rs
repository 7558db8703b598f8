//! Chat command handlers.
//!
//! Each handler takes the shared [`AppState`](crate::server::model::app::AppState), runs
//! the matching service and always answers with a [`ReplyDto`](crate::model::api::ReplyDto):
//! failures are logged and turned into a user-facing message rather than returned.

pub mod fcc;
