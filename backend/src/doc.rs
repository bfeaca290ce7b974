//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every POI endpoint, the health probes, and the
//! request and response bodies they exchange. The document is exported via
//! `cargo run --bin openapi-dump` for external tooling.

use utoipa::OpenApi;

use crate::domain::{Error, ErrorCode, PoiCategory};
use crate::inbound::http::pois::{
    CreatePoiRequestBody, NearbyPoiBody, PoiBody, PoiPageBody, UpdatePoiRequestBody,
};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "POI finder API",
        description = "Nearby point-of-interest search with category filters and POI management.",
        license(name = "MIT")
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::pois::nearby_pois,
        crate::inbound::http::pois::pois_by_category,
        crate::inbound::http::pois::list_pois,
        crate::inbound::http::pois::create_poi,
        crate::inbound::http::pois::update_poi,
        crate::inbound::http::pois::delete_poi,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        PoiBody,
        NearbyPoiBody,
        PoiPageBody,
        CreatePoiRequestBody,
        UpdatePoiRequestBody,
        PoiCategory,
        Error,
        ErrorCode
    )),
    tags(
        (name = "pois", description = "Points of interest"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
