use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use thiserror::Error;

use crate::core::render;
use crate::models::ErrorResponse;

/// Message the legacy interface reports when the normalizer finds no match
pub const ADDRESS_NOT_FOUND_MESSAGE: &str =
    "Address not found. Please correct the address and try again.";

/// Errors surfaced to geocoding clients as an XML `<error>` document
#[derive(Debug, Error)]
pub enum GeocodeError {
    #[error("Missing 'addr' query parameter.")]
    MissingAddress,

    #[error("Malformed 'addr' query parameter.")]
    MalformedAddress,

    // The legacy service raises "not found" inside the scope that prefixes
    // normalizer failures, so clients see both parts.
    #[error("Geocoding failed: {}", ADDRESS_NOT_FOUND_MESSAGE)]
    AddressNotFound,

    #[error("Geocoding failed: {0}")]
    NormalizerFault(String),

    #[error("Not Found")]
    NotFound,
}

/// How adapter failures map onto HTTP status codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorMode {
    /// No-match and normalizer faults are both 500
    #[default]
    Legacy,
    /// No-match is 404, normalizer faults are 502
    Split,
}

impl ErrorMode {
    pub fn from_legacy_flag(legacy_errors: bool) -> Self {
        if legacy_errors {
            ErrorMode::Legacy
        } else {
            ErrorMode::Split
        }
    }
}

impl GeocodeError {
    pub fn status_for(&self, mode: ErrorMode) -> StatusCode {
        match (self, mode) {
            (GeocodeError::MissingAddress | GeocodeError::MalformedAddress, _) => {
                StatusCode::BAD_REQUEST
            }
            (GeocodeError::NotFound, _) => StatusCode::NOT_FOUND,
            (GeocodeError::AddressNotFound | GeocodeError::NormalizerFault(_), ErrorMode::Legacy) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            (GeocodeError::AddressNotFound, ErrorMode::Split) => StatusCode::NOT_FOUND,
            (GeocodeError::NormalizerFault(_), ErrorMode::Split) => StatusCode::BAD_GATEWAY,
        }
    }

    /// XML error document for this error under the given mode
    pub fn to_response(&self, mode: ErrorMode) -> HttpResponse {
        HttpResponse::build(self.status_for(mode))
            .content_type("application/xml")
            .body(render(&ErrorResponse::new(self.to_string()).into()))
    }
}

impl ResponseError for GeocodeError {
    fn status_code(&self) -> StatusCode {
        self.status_for(ErrorMode::Legacy)
    }

    fn error_response(&self) -> HttpResponse {
        self.to_response(ErrorMode::Legacy)
    }
}
