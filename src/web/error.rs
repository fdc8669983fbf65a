use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use strum_macros::AsRefStr;

use crate::model::RosterError;

pub type WebResult<T> = core::result::Result<T, Error>;

#[derive(Debug, AsRefStr, thiserror::Error)]
pub enum Error {
    #[error("required query parameter is missing: {0}")]
    MissingQueryParam(&'static str),
    #[error("query string rejected: {0}")]
    QueryRejection(String),
    #[error("path rejected: {0}")]
    PathRejection(String),

    #[error("roster error: {0}")]
    Roster(#[from] RosterError),
}

impl Error {
    pub fn status_code_and_client_error(&self) -> (StatusCode, ClientError) {
        use ClientError::*;

        match self {
            Error::MissingQueryParam(param) => {
                (StatusCode::UNPROCESSABLE_ENTITY, MissingQueryParam(*param))
            }
            Error::QueryRejection(_) => (StatusCode::BAD_REQUEST, InvalidQuery),
            Error::PathRejection(_) => (StatusCode::BAD_REQUEST, InvalidActivityName),
            Error::Roster(roster_er) => match roster_er {
                RosterError::ActivityNotFound { .. } => (StatusCode::NOT_FOUND, ActivityNotFound),
                RosterError::AlreadyRegistered { .. } => (StatusCode::BAD_REQUEST, AlreadySignedUp),
                RosterError::NotRegistered { .. } => (StatusCode::BAD_REQUEST, NotRegistered),
                RosterError::ActivityFull { .. } => (StatusCode::BAD_REQUEST, ActivityFull),
            },
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        tracing::debug!("{:<12} - into_response(Error: {self:?})", "INTO_RESP");

        // Construct a response
        let mut res = StatusCode::INTERNAL_SERVER_ERROR.into_response();

        // Insert the Error into response so that it can be retrieved later.
        res.extensions_mut().insert(Arc::new(self));

        res
    }
}

/// The error text the client sees in the `detail` field.
#[derive(Debug, AsRefStr, derive_more::Display)]
pub enum ClientError {
    #[display("Activity not found")]
    ActivityNotFound,
    #[display("Student is already signed up")]
    AlreadySignedUp,
    #[display("Student is not registered for this activity")]
    NotRegistered,
    #[display("Activity is full")]
    ActivityFull,
    #[display("Missing required query parameter: {_0}")]
    MissingQueryParam(&'static str),
    #[display("Invalid query string")]
    InvalidQuery,
    #[display("Invalid activity name in path")]
    InvalidActivityName,
}
