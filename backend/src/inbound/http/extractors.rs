//! Extractor configuration for POI endpoints.
//!
//! Actix answers malformed query strings, paths, and JSON bodies with plain
//! text by default. These handlers render them through the domain error
//! envelope so every 400 has the same shape.

use actix_web::error::{JsonPayloadError, PathError, QueryPayloadError};
use actix_web::{HttpRequest, web};
use tracing::debug;

use crate::domain::Error;

/// Query string extractor settings.
pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err: QueryPayloadError, _req: &HttpRequest| {
        debug!(error = %err, "query string rejected");
        Error::invalid_request(format!("invalid query string: {err}")).into()
    })
}

/// Path segment extractor settings.
pub fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(|err: PathError, _req: &HttpRequest| {
        debug!(error = %err, "path rejected");
        Error::invalid_request(format!("invalid path: {err}")).into()
    })
}

/// JSON body extractor settings.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err: JsonPayloadError, _req: &HttpRequest| {
        debug!(error = %err, "json body rejected");
        Error::invalid_request(format!("invalid request body: {err}")).into()
    })
}
