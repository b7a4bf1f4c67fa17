use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{middleware, web, App, HttpServer};
use std::io;
use std::sync::Arc;
use tracing::info;

use crate::config::Settings;
use crate::routes::{self, AppState};
use crate::services::{Geocoder, NormalizerClient};

/// Application with state, access logging and routes, as served in production
pub fn build_app(
    app_state: AppState,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(app_state))
        .wrap(middleware::Logger::default())
        .configure(routes::configure_routes)
}

/// Build the normalizer client from `settings` and serve until shutdown.
pub async fn run(settings: Settings) -> io::Result<()> {
    let timeout = settings.normalizer.timeout();

    let client = NormalizerClient::new(
        settings.normalizer.endpoint.clone(),
        settings.normalizer.api_key.clone(),
        timeout,
    )
    .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;

    info!(
        "Normalizer client initialized ({}, timeout {:?})",
        settings.normalizer.endpoint, timeout
    );

    let app_state = AppState {
        geocoder: Geocoder::new(Arc::new(client)).with_timeout(timeout),
        error_mode: settings.response.error_mode(),
    };

    info!("Error mode: {:?}", app_state.error_mode);

    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || build_app(app_state.clone()))
        .workers(workers)
        .bind((host, port))?
        .run()
        .await
}
