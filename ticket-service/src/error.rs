use crate::repository;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("ticket not exist")]
    TicketNotExist,

    #[error("ticket detail not exist")]
    TicketDetailNotExist,

    #[error("profile not exist")]
    ProfileNotExist,

    #[error("stock not enough")]
    StockNotEnough,

    #[error("validation error: {0}")]
    Validation(&'static str),

    #[error("no business rule matched")]
    RulesNotMatched,

    #[error("database error: {0}")]
    Database(#[from] repository::Error),

    #[error("publisher error: {0}")]
    Publisher(#[from] amqprs::error::Error),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        tracing::warn!(err = %self);

        match self {
            Error::TicketNotExist | Error::TicketDetailNotExist | Error::ProfileNotExist => {
                StatusCode::NOT_FOUND
            }
            Error::StockNotEnough => StatusCode::CONFLICT,
            Error::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Error::RulesNotMatched | Error::Database(_) | Error::Publisher(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
        .into_response()
    }
}
