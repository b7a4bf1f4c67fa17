//! Simple Geocode Compat - CSIS simple geocoding compatible interface
//!
//! Serves `GET /cgi-bin/simple_geocode.cgi?addr=...` in the legacy XML
//! format, delegating address normalization to an external service.

pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod routes;
pub mod server;
pub mod services;

// Re-export commonly used types
pub use config::Settings;
pub use core::escape_xml;
pub use error::{ErrorMode, GeocodeError};
pub use models::{AddressQuery, NormalizationResult};
pub use services::{AddressNormalizer, Geocoder, NormalizerClient, NormalizerError};
