use reqwest::StatusCode;
use thiserror::Error;

/// Failures talking to the floor-plan detector. A failed analysis aborts
/// the whole request; the caller returns to its pre-analysis state.
#[derive(Debug, Error)]
pub enum DetectorError {
    #[error("detector returned HTTP {0}")]
    Http(StatusCode),

    #[error("detector request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Failures fetching one generated drawing. Scoped to a single job; the
/// batch always continues.
#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("generator returned HTTP {0}")]
    Http(StatusCode),

    #[error("generator returned an empty payload")]
    EmptyPayload,

    #[error("generator request failed: {0}")]
    Transport(#[from] reqwest::Error),
}
