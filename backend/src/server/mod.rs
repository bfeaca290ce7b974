//! Server construction and wiring.

mod config;

pub use config::AppSettings;

use std::sync::Arc;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use mockable::{Clock, DefaultClock};
use tracing::info;

use poi_finder::domain::{PoiCommandService, PoiSearchService};
use poi_finder::inbound::http::api_scope;
use poi_finder::inbound::http::health::{HealthState, live, ready};
use poi_finder::inbound::http::state::HttpState;
use poi_finder::outbound::memory::{InMemoryPoiStore, SeedFileError, load_seed_file};

/// Build the POI store, loading the configured seed file when present.
///
/// # Errors
/// Returns [`SeedFileError`] when the seed file cannot be read or holds an
/// invalid record.
pub fn build_store(
    settings: &AppSettings,
    clock: &dyn Clock,
) -> Result<Arc<InMemoryPoiStore>, SeedFileError> {
    match settings.seed_path() {
        Some(path) => load_seed_file(path, clock).map(Arc::new),
        None => {
            info!("no seed file configured; starting with an empty poi store");
            Ok(Arc::new(InMemoryPoiStore::default()))
        }
    }
}

fn build_http_state(store: Arc<InMemoryPoiStore>) -> HttpState {
    HttpState::new(
        Arc::new(PoiSearchService::new(store.clone())),
        Arc::new(PoiCommandService::new(store, Arc::new(DefaultClock))),
    )
}

fn build_app(
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(health_state)
        .app_data(http_state)
        .service(api_scope())
        .service(ready)
        .service(live)
}

/// Construct an Actix HTTP server over `store`.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    settings: &AppSettings,
    store: Arc<InMemoryPoiStore>,
) -> std::io::Result<Server> {
    let http_state = web::Data::new(build_http_state(store));
    let server_health_state = health_state.clone();
    let bind_addr = settings.bind_addr();

    let server = HttpServer::new(move || {
        build_app(server_health_state.clone(), http_state.clone())
    })
    .bind(bind_addr)?
    .run();

    info!(%bind_addr, "poi finder listening");
    health_state.mark_ready();
    Ok(server)
}
