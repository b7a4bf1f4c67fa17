// Route exports
pub mod geocode;

use actix_web::{error, web, HttpRequest};

use crate::error::GeocodeError;

pub use geocode::{AppState, GEOCODE_PATH};

/// Query strings the extractor cannot deserialize (e.g. a repeated `addr`)
pub fn handle_query_payload_error(err: error::QueryPayloadError, req: &HttpRequest) -> actix_web::Error {
    tracing::warn!("Invalid query on {}: {}", req.path(), err);
    GeocodeError::MalformedAddress.into()
}

/// Register the legacy endpoint; every other path answers with an XML 404
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::QueryConfig::default().error_handler(handle_query_payload_error));
    geocode::configure(cfg);
    cfg.default_service(web::to(geocode::not_found));
}
