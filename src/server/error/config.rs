use thiserror::Error;

use crate::{
    model::api::ReplyDto,
    server::error::{InternalError, IntoReply},
};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid value for environment variable {var}: {reason}")]
    InvalidEnvValue { var: String, reason: String },
}

impl IntoReply for ConfigError {
    fn into_reply(self) -> ReplyDto {
        InternalError(self).into_reply()
    }
}
