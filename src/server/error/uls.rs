use thiserror::Error;

use crate::{
    model::api::ReplyDto,
    server::{
        error::{InternalError, IntoReply},
        model::status::UlsDatabase,
    },
};

#[derive(Error, Debug)]
pub enum UlsError {
    // Every logical database must have at least one full load recorded before
    // incremental updates mean anything. If this occurs the replica was never
    // bootstrapped, or the update log was truncated.
    #[error(
        "No COMPLETE load recorded for the {} ULS database ({}).\n\
        \n\
        The replica must be bootstrapped with a full load before its status can be reported.",
        .0,
        .0.db_name()
    )]
    MissingFullUpdate(UlsDatabase),
}

impl IntoReply for UlsError {
    fn into_reply(self) -> ReplyDto {
        InternalError(self).into_reply()
    }
}
