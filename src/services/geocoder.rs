use std::sync::Arc;
use std::time::Duration;

use crate::error::GeocodeError;
use crate::models::{AddressQuery, NormalizationResult};
use crate::services::normalizer::{AddressNormalizer, NormalizerError};

/// Adapter between the request handler and the external normalizer
///
/// Translates normalizer faults and "no match" results into
/// [`GeocodeError`]s. No retries and no caching.
#[derive(Clone)]
pub struct Geocoder {
    normalizer: Arc<dyn AddressNormalizer>,
    timeout: Option<Duration>,
}

impl Geocoder {
    pub fn new(normalizer: Arc<dyn AddressNormalizer>) -> Self {
        Self {
            normalizer,
            timeout: None,
        }
    }

    /// Bound every normalizer call by `timeout`
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub async fn geocode(&self, query: &AddressQuery) -> Result<NormalizationResult, GeocodeError> {
        let call = self.normalizer.normalize(query.as_str());

        let outcome = match self.timeout {
            Some(timeout) => tokio::time::timeout(timeout, call)
                .await
                .unwrap_or(Err(NormalizerError::Timeout(timeout))),
            None => call.await,
        };

        let result = outcome.map_err(|e| {
            tracing::error!("Normalizer failed for {:?}: {}", query.as_str(), e);
            GeocodeError::NormalizerFault(e.to_string())
        })?;

        if !result.is_match() {
            tracing::info!("No match for {:?} (level {})", query.as_str(), result.level);
            return Err(GeocodeError::AddressNotFound);
        }

        Ok(result)
    }
}
