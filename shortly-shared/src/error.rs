use thiserror::Error;

/// Failure taxonomy shared by every client frontend.
///
/// Validation failures never reach the network; auth failures on background
/// refresh are swallowed by callers; everything else carries the backend's
/// message when one was provided.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The input did not parse as an absolute URL. No network call was made.
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The backend refused the supplied credentials.
    #[error("invalid username or password")]
    AuthRejected,

    /// The action needs a signed-in session and none is present.
    #[error("you must be signed in to do that")]
    AuthRequired,

    #[error("failed to shorten URL: {0}")]
    Shorten(String),

    #[error("failed to load statistics: {0}")]
    Stats(String),

    #[error("failed to delete URL: {0}")]
    Delete(String),

    /// Transport-level failure, before any backend verdict.
    #[error("network error: {0}")]
    Network(String),
}
