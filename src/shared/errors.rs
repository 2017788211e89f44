//! Error handling for the application

use thiserror::Error;

/// Errors surfaced by the upstream data and wallet providers
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API returned status {0}")]
    Status(u16),

    #[error("Malformed upstream payload: {0}")]
    MalformedResponse(String),

    #[error("Record not found: {0}")]
    NotFound(String),

    #[error("Invalid address in upstream payload: {0}")]
    InvalidAddress(String),
}

/// Engine-level errors returned from the advisory surface.
///
/// Recoverable per-item failures (a single pool listing branch, a single
/// liquidity fetch) are absorbed inside their component and never reach the
/// caller; only the variants below cross the boundary.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Upstream unavailable: {0}")]
    UpstreamUnavailable(String),

    #[error("Enrichment failed: {0}")]
    EnrichmentFailure(String),

    #[error("Computation error: {0}")]
    ComputationError(String),
}

impl From<ProviderError> for EngineError {
    fn from(err: ProviderError) -> Self {
        EngineError::UpstreamUnavailable(err.to_string())
    }
}
