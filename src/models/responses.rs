use crate::models::domain::{AddressQuery, NormalizationResult};

/// Geodetic datum label of the legacy interface
pub const GEODETIC_DATUM: &str = "wgs1984";

/// Placeholder emitted as `<iConf>`; the legacy interface always reports 4
pub const LEGACY_CONFIDENCE: u8 = 4;

/// Successful geocoding document
#[derive(Debug, Clone, PartialEq)]
pub struct GeocodeResponse {
    pub query: String,
    pub geodetic: &'static str,
    pub confidence: u8,
    pub converted: String,
    pub candidate: Candidate,
}

impl GeocodeResponse {
    /// Builds the success document, or `None` when the result is not a match.
    pub fn new(query: &AddressQuery, result: &NormalizationResult) -> Option<Self> {
        let candidate = Candidate::from_result(result)?;

        Some(Self {
            query: query.as_str().to_string(),
            geodetic: GEODETIC_DATUM,
            confidence: LEGACY_CONFIDENCE,
            converted: query.converted().to_string(),
            candidate,
        })
    }
}

/// `<candidate>` block of a successful response
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub address: String,
    pub longitude: Option<f64>,
    pub latitude: Option<f64>,
    pub level: u32,
}

impl Candidate {
    pub fn from_result(result: &NormalizationResult) -> Option<Self> {
        if !result.is_match() {
            return None;
        }

        Some(Self {
            address: result.address_path(),
            longitude: result.lng,
            latitude: result.lat,
            level: result.level,
        })
    }
}

/// Document carrying a single `<error>` message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorResponse {
    pub message: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Any document the service can answer with
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseDocument {
    Geocode(GeocodeResponse),
    Error(ErrorResponse),
}

impl From<GeocodeResponse> for ResponseDocument {
    fn from(response: GeocodeResponse) -> Self {
        ResponseDocument::Geocode(response)
    }
}

impl From<ErrorResponse> for ResponseDocument {
    fn from(response: ErrorResponse) -> Self {
        ResponseDocument::Error(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(level: u32) -> NormalizationResult {
        NormalizationResult {
            level,
            pref: "東京都".to_string(),
            city: "新宿区".to_string(),
            town: "西新宿二丁目".to_string(),
            chome: None,
            banchi: Some("8".to_string()),
            lng: Some(139.691774),
            lat: Some(35.68945),
        }
    }

    #[test]
    fn test_no_candidate_without_match() {
        let query = AddressQuery::new("どこか");
        assert!(GeocodeResponse::new(&query, &result(0)).is_none());
    }

    #[test]
    fn test_geocode_response_fields() {
        let query = AddressQuery::new("東京都新宿区西新宿２丁目８−１");
        let response = GeocodeResponse::new(&query, &result(3)).unwrap();

        assert_eq!(response.geodetic, "wgs1984");
        assert_eq!(response.confidence, 4);
        assert_eq!(response.converted, "東京都新宿区西新宿２丁目８−");
        assert_eq!(response.candidate.level, 3);
        assert_eq!(response.candidate.address, "東京都/新宿区/西新宿二丁目//8");
    }
}
