use crate::models::NormalizationResult;
use crate::services::normalizer::{AddressNormalizer, NormalizerError};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;

/// HTTP client for a Japanese address normalization service
///
/// Sends `GET {endpoint}?address=...` and expects the normalizer's JSON
/// result (`level`, `pref`, `city`, `town`, `lat`, `lng`, ...).
pub struct NormalizerClient {
    endpoint: String,
    api_key: Option<String>,
    client: Client,
}

impl NormalizerClient {
    /// Create a new normalizer client
    pub fn new(
        endpoint: String,
        api_key: Option<String>,
        timeout: Duration,
    ) -> Result<Self, NormalizerError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            endpoint,
            api_key,
            client,
        })
    }

    fn request_url(&self, address: &str) -> String {
        let separator = if self.endpoint.contains('?') { '&' } else { '?' };
        format!(
            "{}{}address={}",
            self.endpoint,
            separator,
            urlencoding::encode(address)
        )
    }
}

#[async_trait]
impl AddressNormalizer for NormalizerClient {
    async fn normalize(&self, address: &str) -> Result<NormalizationResult, NormalizerError> {
        let url = self.request_url(address);

        tracing::debug!("Normalizing address via: {}", url);

        let mut request = self.client.get(&url);
        if let Some(key) = &self.api_key {
            request = request.header("X-Api-Key", key);
        }

        let response = request.send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read body".to_string());
            tracing::error!("Normalizer rejected {:?}: {} - {}", address, status, body);
            return Err(NormalizerError::ApiError(status.as_u16()));
        }

        let json: Value = response.json().await?;

        let wire: NormalizeResponse = serde_json::from_value(json).map_err(|e| {
            NormalizerError::InvalidResponse(format!("Failed to parse normalizer result: {}", e))
        })?;

        let result = wire.into_result();
        tracing::debug!(
            "Normalized {:?} to level {} ({})",
            address,
            result.level,
            result.address_path()
        );

        Ok(result)
    }
}

/// Normalizer reply as it appears on the wire
///
/// Older normalizer releases put `lat`/`lng` at the top level, newer ones
/// nest them under `point`. Both are accepted.
#[derive(Debug, Deserialize)]
struct NormalizeResponse {
    #[serde(default)]
    level: Option<i64>,
    #[serde(default)]
    pref: Option<String>,
    #[serde(default)]
    city: Option<String>,
    #[serde(default)]
    town: Option<String>,
    #[serde(default)]
    chome: Option<Value>,
    #[serde(default)]
    banchi: Option<Value>,
    #[serde(default)]
    lat: Option<f64>,
    #[serde(default, alias = "lon")]
    lng: Option<f64>,
    #[serde(default)]
    point: Option<Point>,
}

#[derive(Debug, Deserialize)]
struct Point {
    #[serde(default)]
    lat: Option<f64>,
    #[serde(default, alias = "lon")]
    lng: Option<f64>,
    #[serde(default)]
    level: Option<i64>,
}

impl NormalizeResponse {
    fn into_result(self) -> NormalizationResult {
        let point = self.point.as_ref();
        let level = self
            .level
            .or_else(|| point.and_then(|p| p.level))
            .unwrap_or(0);

        NormalizationResult {
            level: u32::try_from(level.max(0)).unwrap_or(u32::MAX),
            pref: self.pref.unwrap_or_default(),
            city: self.city.unwrap_or_default(),
            town: self.town.unwrap_or_default(),
            chome: text_field(self.chome),
            banchi: text_field(self.banchi),
            lat: self.lat.or_else(|| point.and_then(|p| p.lat)),
            lng: self.lng.or_else(|| point.and_then(|p| p.lng)),
        }
    }
}

/// Chome and banchi arrive as either strings or numbers
fn text_field(value: Option<Value>) -> Option<String> {
    match value? {
        Value::String(s) if !s.is_empty() => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(value: Value) -> NormalizationResult {
        serde_json::from_value::<NormalizeResponse>(value)
            .unwrap()
            .into_result()
    }

    #[test]
    fn test_normalizer_client_creation() {
        let client = NormalizerClient::new(
            "http://normalizer.test/normalize".to_string(),
            Some("test_key".to_string()),
            Duration::from_secs(5),
        )
        .unwrap();

        assert_eq!(client.endpoint, "http://normalizer.test/normalize");
        assert_eq!(client.api_key.as_deref(), Some("test_key"));
    }

    #[test]
    fn test_request_url_encodes_address() {
        let client = NormalizerClient::new(
            "http://normalizer.test/normalize".to_string(),
            None,
            Duration::from_secs(5),
        )
        .unwrap();

        assert_eq!(
            client.request_url("東京都 1"),
            "http://normalizer.test/normalize?address=%E6%9D%B1%E4%BA%AC%E9%83%BD%201"
        );
    }

    #[test]
    fn test_request_url_keeps_existing_query() {
        let client = NormalizerClient::new(
            "http://normalizer.test/normalize?v=2".to_string(),
            None,
            Duration::from_secs(5),
        )
        .unwrap();

        assert_eq!(client.request_url("a"), "http://normalizer.test/normalize?v=2&address=a");
    }

    #[test]
    fn test_parse_flat_result() {
        let result = parse(json!({
            "pref": "東京都",
            "city": "新宿区",
            "town": "西新宿二丁目",
            "addr": "8-1",
            "lat": 35.68945,
            "lng": 139.691774,
            "level": 3
        }));

        assert_eq!(result.level, 3);
        assert_eq!(result.lat, Some(35.68945));
        assert_eq!(result.lng, Some(139.691774));
        assert_eq!(result.chome, None);
    }

    #[test]
    fn test_parse_nested_point_and_numeric_parts() {
        let result = parse(json!({
            "pref": "京都府",
            "city": "京都市中京区",
            "town": "寺町通",
            "chome": 2,
            "banchi": "15",
            "level": 8,
            "point": { "lat": 35.0, "lng": 135.7, "level": 3 }
        }));

        assert_eq!(result.level, 8);
        assert_eq!(result.lat, Some(35.0));
        assert_eq!(result.lng, Some(135.7));
        assert_eq!(result.address_path(), "京都府/京都市中京区/寺町通/2/15");
    }

    #[test]
    fn test_parse_no_match() {
        let result = parse(json!({
            "pref": "",
            "city": "",
            "town": "",
            "lat": null,
            "lng": null,
            "level": 0
        }));

        assert!(!result.is_match());
        assert_eq!(result.lat, None);
    }
}
