use serde::Deserialize;

use crate::error::GeocodeError;
use crate::models::domain::AddressQuery;

/// Query parameters of the legacy geocoding endpoint
///
/// Unknown parameters (`charset`, `geosys`, ...) are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct GeocodeParams {
    pub addr: Option<String>,
}

impl GeocodeParams {
    /// The address to geocode; absent or empty `addr` is a missing parameter
    pub fn into_query(self) -> Result<AddressQuery, GeocodeError> {
        match self.addr {
            Some(addr) if !addr.is_empty() => Ok(AddressQuery::new(addr)),
            _ => Err(GeocodeError::MissingAddress),
        }
    }
}
