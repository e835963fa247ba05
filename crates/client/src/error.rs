use thiserror::Error;

/// Failures the client surfaces to the user. None are fatal: the UI stays
/// interactive and the periodic refresh retries loads implicitly.
#[derive(Error, Debug)]
pub enum ClientError {
    /// The request never completed (connection refused, timeout, DNS).
    #[error("Network unavailable: {0}")]
    Network(#[from] reqwest::Error),

    /// The server answered with `success: false`.
    #[error("Server rejected request: {0}")]
    Rejected(String),

    /// Client-side validation failed before any network call.
    #[error("Invalid input: {0}")]
    Input(String),
}

pub type ClientResult<T> = Result<T, ClientError>;
