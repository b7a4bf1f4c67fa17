use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::NormalizationResult;

/// Errors raised by an address normalizer
#[derive(Debug, Error)]
pub enum NormalizerError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("normalizer returned HTTP {0}")]
    ApiError(u16),

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    #[error("normalizer timed out after {0:?}")]
    Timeout(Duration),

    #[error("{0}")]
    Internal(String),
}

/// External capability that turns a free-form Japanese address into
/// administrative components and coordinates.
#[async_trait]
pub trait AddressNormalizer: Send + Sync {
    async fn normalize(&self, address: &str) -> Result<NormalizationResult, NormalizerError>;
}
