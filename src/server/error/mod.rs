//! Error types for the ULS bot backend.
//!
//! This module provides the crate-wide [`Error`] enum aggregating domain-specific errors
//! (configuration, replica invariants) and database failures. All errors use `thiserror`
//! for their `Display` and `Error` implementations and implement [`IntoReply`] so the
//! command layer can turn any failure into a user-facing message.
//!
//! A callsign with no license record is not an error; lookups return `Ok(None)` for it.

pub mod config;
pub mod uls;

use thiserror::Error;

use crate::{
    model::api::ReplyDto,
    server::error::{config::ConfigError, uls::UlsError},
};

/// Generic reply sent to the user for failures that aren't their fault.
pub static LOOKUP_FAILED_MESSAGE: &str = "Sorry, an error occurred and the lookup failed.";

/// Main error type for the ULS bot backend.
///
/// It uses `thiserror`'s `#[from]` attribute to enable automatic conversion from the
/// underlying error types via the `?` operator.
///
/// # Error Categories
/// - Configuration errors (missing/invalid environment variables)
/// - Replica invariant violations (missing baseline full load)
/// - Database errors (unreachable store, timeouts, malformed results)
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Replica data violates an invariant the bot depends on.
    #[error(transparent)]
    UlsError(#[from] UlsError),
    /// Database error (query failures, connection issues, pool timeouts).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
}

/// Conversion of a command outcome into the reply shown to the user.
///
/// Mirrors what a web handler's response conversion does, for chat commands.
pub trait IntoReply {
    fn into_reply(self) -> ReplyDto;
}

/// Converts application errors into user-facing replies.
///
/// Every failure is logged and answered with [`LOOKUP_FAILED_MESSAGE`]; replica
/// invariant violations are logged by their own conversion so operators can tell a
/// bootstrap problem apart from a transient outage.
impl IntoReply for Error {
    fn into_reply(self) -> ReplyDto {
        match self {
            Self::ConfigError(err) => err.into_reply(),
            Self::UlsError(err) => err.into_reply(),
            err => InternalError(err).into_reply(),
        }
    }
}

/// Wrapper converting any displayable error into the generic failure reply.
///
/// The full error is logged, while the user only sees [`LOOKUP_FAILED_MESSAGE`] to
/// avoid leaking connection details.
pub struct InternalError<E>(pub E);

impl<E: std::fmt::Display> IntoReply for InternalError<E> {
    fn into_reply(self) -> ReplyDto {
        tracing::error!("{}", self.0);

        ReplyDto::text(LOOKUP_FAILED_MESSAGE)
    }
}
