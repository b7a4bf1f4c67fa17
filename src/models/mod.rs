// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{AddressQuery, NormalizationResult};
pub use requests::GeocodeParams;
pub use responses::{Candidate, ErrorResponse, GeocodeResponse, ResponseDocument, GEODETIC_DATUM, LEGACY_CONFIDENCE};
