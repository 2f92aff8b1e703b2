use thiserror::Error;

/// Failure of a call against the location API.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ServiceError {
    #[error("network error: {0}")]
    Network(String),
    #[error("server responded with status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("could not decode response: {0}")]
    Decode(String),
    #[error("could not encode request: {0}")]
    Serialize(String),
    #[error("user is not logged in")]
    NotLoggedIn,
}
