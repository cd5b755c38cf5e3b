//! Error type for prediction requests

use thiserror::Error;

/// Failure modes of a prediction request.
#[derive(Debug, Error)]
pub enum PredictionError {
    /// The prediction service answered with a non-success HTTP status.
    ///
    /// The status and response body are not carried; callers only learn
    /// that the prediction failed.
    #[error("prediction failed")]
    RequestFailed,

    /// The exchange never completed: connection, DNS, or body decode
    /// failure from the underlying HTTP client, passed through unchanged.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, PredictionError>;
