use thiserror::Error;

/// Failures while talking to the tutor backend.
///
/// The client does not classify beyond status vs transport/decode failure;
/// there is no retry or backoff, a failed call surfaces to the view as-is.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ApiError {
    #[error("backend request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error("backend unavailable: {0}")]
    Unavailable(String),
}
