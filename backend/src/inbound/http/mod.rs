//! HTTP inbound adapter exposing REST endpoints.

use actix_web::{Scope, web};

pub mod error;
pub mod extractors;
pub mod health;
pub mod pois;
pub mod state;

pub use error::ApiResult;

/// Versioned API scope with every POI route and extractor setting attached.
///
/// Handler state is not included; register a `web::Data<HttpState>` on the
/// enclosing app.
pub fn api_scope() -> Scope {
    web::scope("/api/v1")
        .app_data(extractors::query_config())
        .app_data(extractors::path_config())
        .app_data(extractors::json_config())
        .configure(pois::configure)
}
