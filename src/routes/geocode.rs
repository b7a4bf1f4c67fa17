use actix_web::{web, HttpRequest, HttpResponse};

use crate::core::render;
use crate::error::{ErrorMode, GeocodeError};
use crate::models::{GeocodeParams, GeocodeResponse};
use crate::services::Geocoder;

/// Path of the legacy CGI endpoint
pub const GEOCODE_PATH: &str = "/cgi-bin/simple_geocode.cgi";

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub geocoder: Geocoder,
    pub error_mode: ErrorMode,
}

/// Configure the geocoding route
///
/// Methods other than GET on the endpoint fall through to the XML 404.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource(GEOCODE_PATH)
            .route(web::get().to(simple_geocode))
            .default_service(web::to(not_found)),
    );
}

/// Legacy geocoding endpoint
///
/// GET /cgi-bin/simple_geocode.cgi?addr={url-encoded address}
async fn simple_geocode(
    state: web::Data<AppState>,
    params: web::Query<GeocodeParams>,
) -> HttpResponse {
    let query = match params.into_inner().into_query() {
        Ok(query) => query,
        Err(e) => {
            tracing::warn!("Rejected geocode request: {}", e);
            return e.to_response(state.error_mode);
        }
    };

    tracing::info!("Geocoding address: {}", query.as_str());

    let result = match state.geocoder.geocode(&query).await {
        Ok(result) => result,
        Err(e) => return e.to_response(state.error_mode),
    };

    match GeocodeResponse::new(&query, &result) {
        Some(response) => {
            tracing::debug!(
                "Geocoded {} at level {}",
                query.as_str(),
                response.candidate.level
            );
            HttpResponse::Ok()
                .content_type("application/xml")
                .body(render(&response.into()))
        }
        None => GeocodeError::AddressNotFound.to_response(state.error_mode),
    }
}

/// XML "Not Found" document for unknown paths and methods
pub async fn not_found(req: HttpRequest) -> Result<HttpResponse, GeocodeError> {
    tracing::debug!("No route for {} {}", req.method(), req.path());
    Err(GeocodeError::NotFound)
}
