use std::fmt;

pub type Result<T> = std::result::Result<T, Error>;

/// Coarse cause of a failed lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Transport,
    UpstreamStatus,
    ShapeMismatch,
    NotFound,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            ErrorKind::Transport => "transport",
            ErrorKind::UpstreamStatus => "upstream-status",
            ErrorKind::ShapeMismatch => "shape-mismatch",
            ErrorKind::NotFound => "not-found",
        };
        f.write_str(tag)
    }
}

/// Failure of a single outbound lookup. Services return this; the HTTP layer
/// turns it into an `AppError`.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Upstream request failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("Upstream returned {status}: {body}")]
    UpstreamStatus {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("Unexpected upstream response: {0}")]
    ShapeMismatch(String),

    #[error("{0}")]
    NotFound(String),
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Transport(_) => ErrorKind::Transport,
            Error::UpstreamStatus { .. } => ErrorKind::UpstreamStatus,
            Error::ShapeMismatch(_) => ErrorKind::ShapeMismatch,
            Error::NotFound(_) => ErrorKind::NotFound,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        // The request URL carries the api_key query parameter and must never
        // reach a response body or a log line.
        let err = err.without_url();
        // A body that arrived but failed to decode is a shape problem, not a
        // connectivity one.
        if err.is_decode() {
            Error::ShapeMismatch(err.to_string())
        } else {
            Error::Transport(err)
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::ShapeMismatch(err.to_string())
    }
}
