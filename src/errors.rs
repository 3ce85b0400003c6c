// errors.rs
use thiserror::Error;

/// Errors raised while handling a request: routing, bad input, or a data
/// source that could not answer.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Not Found")]
    NotFound,

    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Couldn't load PGs: {0}")]
    Upstream(String),

    #[error("Internal Server Error")]
    InternalError,
}
