//! POI HTTP handlers.
//!
//! ```text
//! GET    /api/v1/pois/nearby
//! GET    /api/v1/pois/category/{category}
//! GET    /api/v1/pois
//! POST   /api/v1/pois
//! PATCH  /api/v1/pois/{id}
//! DELETE /api/v1/pois/{id}
//! ```

use std::str::FromStr;

use actix_web::{HttpResponse, delete, get, patch, post, web};
use pagination::Page;
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::{
    CategoryListingRequest, Error, NearbyPoi, NearbySearchRequest, Poi, PoiCategory, PoiDraft,
    PoiId, PoiPatch, SearchValidationError, parse_category,
};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

fn invalid_search(err: SearchValidationError) -> Error {
    Error::invalid_field(err.field(), err.to_string())
}

fn required<T>(value: Option<T>, field: &str) -> Result<T, Error> {
    value.ok_or_else(|| Error::invalid_field(field, format!("{field} is required")))
}

// Numeric query values arrive as text so a malformed one is reported against
// its own field rather than as a generic query-string failure.
fn parse_query_value<T: FromStr>(
    raw: Option<&str>,
    field: &str,
    expected: &str,
) -> Result<Option<T>, Error> {
    raw.map(|text| {
        text.trim().parse::<T>().map_err(|_| {
            Error::invalid_field(field, format!("{field} must be {expected}, got \"{text}\""))
        })
    })
    .transpose()
}

fn parse_query_number(raw: Option<&str>, field: &str) -> Result<Option<f64>, Error> {
    parse_query_value(raw, field, "a number")
}

fn parse_query_integer(raw: Option<&str>, field: &str) -> Result<Option<i64>, Error> {
    parse_query_value(raw, field, "an integer")
}

fn parse_id(raw: i64) -> Result<PoiId, Error> {
    PoiId::new(raw).map_err(|err| Error::invalid_field(err.field(), err.to_string()))
}

fn parse_required_category(label: &str) -> Result<PoiCategory, Error> {
    parse_category(Some(label))
        .map_err(invalid_search)?
        .ok_or_else(|| Error::invalid_field("category", "category is required"))
}

// Distinguishes an absent key from an explicit `null`.
fn double_option<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Query parameters for a nearby search.
#[derive(Debug, Default, Deserialize, Serialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct NearbyQuery {
    /// Origin latitude in decimal degrees.
    #[param(required = true, value_type = f64)]
    pub latitude: Option<String>,
    /// Origin longitude in decimal degrees.
    #[param(required = true, value_type = f64)]
    pub longitude: Option<String>,
    /// Search radius in metres. Defaults to 5000.
    #[param(value_type = Option<f64>)]
    pub radius: Option<String>,
    /// Restrict results to one category.
    pub category: Option<String>,
    /// Maximum number of results. Defaults to 20, at most 100.
    #[param(value_type = Option<u32>)]
    pub limit: Option<String>,
    /// Number of ranked results to skip.
    #[param(value_type = Option<u32>)]
    pub offset: Option<String>,
}

/// Paging parameters for listings.
#[derive(Debug, Default, Deserialize, Serialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PageQuery {
    /// Maximum number of results. Defaults to 20, at most 100.
    #[param(value_type = Option<u32>)]
    pub limit: Option<String>,
    /// Number of results to skip.
    #[param(value_type = Option<u32>)]
    pub offset: Option<String>,
}

/// POI representation returned by every read endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PoiBody {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub category: PoiCategory,
    pub latitude: f64,
    pub longitude: f64,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub rating: Option<f64>,
    pub image_url: Option<String>,
    pub is_active: bool,
    #[schema(format = "date-time")]
    pub created_at: String,
    #[schema(format = "date-time")]
    pub updated_at: String,
}

impl From<&Poi> for PoiBody {
    fn from(poi: &Poi) -> Self {
        Self {
            id: poi.id().get(),
            name: poi.name().to_owned(),
            description: poi.description().map(str::to_owned),
            category: poi.category(),
            latitude: poi.coordinate().latitude(),
            longitude: poi.coordinate().longitude(),
            address: poi.address().map(str::to_owned),
            phone: poi.phone().map(str::to_owned),
            website: poi.website().map(str::to_owned),
            rating: poi.rating(),
            image_url: poi.image_url().map(str::to_owned),
            is_active: poi.is_active(),
            created_at: poi.created_at().to_rfc3339(),
            updated_at: poi.updated_at().to_rfc3339(),
        }
    }
}

/// Nearby search hit: the POI plus its distance from the origin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct NearbyPoiBody {
    #[serde(flatten)]
    pub poi: PoiBody,
    /// Great-circle distance from the origin in metres.
    pub distance: f64,
}

impl From<NearbyPoi> for NearbyPoiBody {
    fn from(entry: NearbyPoi) -> Self {
        let (poi, distance) = entry.into_parts();
        Self {
            poi: PoiBody::from(&poi),
            distance,
        }
    }
}

/// One page of a category listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PoiPageBody {
    pub items: Vec<PoiBody>,
    pub offset: u32,
    pub limit: u32,
    pub has_more: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_offset: Option<u32>,
}

impl From<Page<Poi>> for PoiPageBody {
    fn from(page: Page<Poi>) -> Self {
        let page = page.map(|poi| PoiBody::from(&poi));
        Self {
            items: page.items,
            offset: page.offset,
            limit: page.limit,
            has_more: page.has_more,
            next_offset: page.next_offset,
        }
    }
}

/// Request payload for creating a POI.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePoiRequestBody {
    pub name: String,
    pub description: Option<String>,
    #[schema(example = "Kuliner")]
    pub category: String,
    pub latitude: f64,
    pub longitude: f64,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub rating: Option<f64>,
    pub image_url: Option<String>,
    pub is_active: Option<bool>,
}

impl TryFrom<CreatePoiRequestBody> for PoiDraft {
    type Error = Error;

    fn try_from(body: CreatePoiRequestBody) -> Result<Self, Self::Error> {
        Ok(Self {
            category: parse_required_category(&body.category)?,
            name: body.name,
            description: body.description,
            latitude: body.latitude,
            longitude: body.longitude,
            address: body.address,
            phone: body.phone,
            website: body.website,
            rating: body.rating,
            image_url: body.image_url,
            is_active: body.is_active.unwrap_or(true),
        })
    }
}

/// Request payload for a partial update. Omitted keys are left untouched;
/// `null` clears a nullable field.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePoiRequestBody {
    pub name: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub description: Option<Option<String>>,
    pub category: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub address: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub phone: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub website: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<f64>)]
    pub rating: Option<Option<f64>>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub image_url: Option<Option<String>>,
    pub is_active: Option<bool>,
}

impl TryFrom<UpdatePoiRequestBody> for PoiPatch {
    type Error = Error;

    fn try_from(body: UpdatePoiRequestBody) -> Result<Self, Self::Error> {
        let category = body
            .category
            .as_deref()
            .map(parse_required_category)
            .transpose()?;
        Ok(Self {
            name: body.name,
            description: body.description,
            category,
            latitude: body.latitude,
            longitude: body.longitude,
            address: body.address,
            phone: body.phone,
            website: body.website,
            rating: body.rating,
            image_url: body.image_url,
            is_active: body.is_active,
        })
    }
}

/// Active POIs within a radius of the origin, nearest first.
#[utoipa::path(
    get,
    path = "/api/v1/pois/nearby",
    params(NearbyQuery),
    responses(
        (status = 200, description = "POIs within the radius, nearest first", body = [NearbyPoiBody]),
        (status = 400, description = "Invalid request", body = Error),
        (status = 503, description = "POI store unavailable", body = Error)
    ),
    tags = ["pois"],
    operation_id = "getNearbyPois"
)]
#[get("/pois/nearby")]
pub async fn nearby_pois(
    state: web::Data<HttpState>,
    query: web::Query<NearbyQuery>,
) -> ApiResult<web::Json<Vec<NearbyPoiBody>>> {
    let query = query.into_inner();
    let latitude = required(
        parse_query_number(query.latitude.as_deref(), "latitude")?,
        "latitude",
    )?;
    let longitude = required(
        parse_query_number(query.longitude.as_deref(), "longitude")?,
        "longitude",
    )?;
    let radius = parse_query_number(query.radius.as_deref(), "radius")?;
    let limit = parse_query_integer(query.limit.as_deref(), "limit")?;
    let offset = parse_query_integer(query.offset.as_deref(), "offset")?;
    let category = parse_category(query.category.as_deref()).map_err(invalid_search)?;
    let request = NearbySearchRequest::new(latitude, longitude, radius, category, limit, offset)
        .map_err(invalid_search)?;

    let results = state.search.nearby(request).await?;
    Ok(web::Json(
        results.into_iter().map(NearbyPoiBody::from).collect(),
    ))
}

/// Active POIs in one category, ordered by id.
#[utoipa::path(
    get,
    path = "/api/v1/pois/category/{category}",
    params(
        ("category" = String, Path, description = "Layanan, Kuliner, Belanja, or Wisata"),
        PageQuery
    ),
    responses(
        (status = 200, description = "Page of POIs in the category", body = PoiPageBody),
        (status = 400, description = "Invalid request", body = Error),
        (status = 503, description = "POI store unavailable", body = Error)
    ),
    tags = ["pois"],
    operation_id = "getPoisByCategory"
)]
#[get("/pois/category/{category}")]
pub async fn pois_by_category(
    state: web::Data<HttpState>,
    category: web::Path<String>,
    query: web::Query<PageQuery>,
) -> ApiResult<web::Json<PoiPageBody>> {
    let category = parse_required_category(&category)?;
    let limit = parse_query_integer(query.limit.as_deref(), "limit")?;
    let offset = parse_query_integer(query.offset.as_deref(), "offset")?;
    let request = CategoryListingRequest::new(category, limit, offset).map_err(invalid_search)?;

    let page = state.search.by_category(request).await?;
    Ok(web::Json(PoiPageBody::from(page)))
}

/// Every active POI, ordered by id.
#[utoipa::path(
    get,
    path = "/api/v1/pois",
    responses(
        (status = 200, description = "All active POIs", body = [PoiBody]),
        (status = 503, description = "POI store unavailable", body = Error)
    ),
    tags = ["pois"],
    operation_id = "getAllPois"
)]
#[get("/pois")]
pub async fn list_pois(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<PoiBody>>> {
    let pois = state.search.all_active().await?;
    Ok(web::Json(pois.iter().map(PoiBody::from).collect()))
}

/// Create a POI.
#[utoipa::path(
    post,
    path = "/api/v1/pois",
    request_body = CreatePoiRequestBody,
    responses(
        (status = 201, description = "POI created", body = PoiBody),
        (status = 400, description = "Invalid request", body = Error),
        (status = 503, description = "POI store unavailable", body = Error)
    ),
    tags = ["pois"],
    operation_id = "createPoi"
)]
#[post("/pois")]
pub async fn create_poi(
    state: web::Data<HttpState>,
    payload: web::Json<CreatePoiRequestBody>,
) -> ApiResult<HttpResponse> {
    let draft = PoiDraft::try_from(payload.into_inner())?;
    let poi = state.commands.create(draft).await?;
    Ok(HttpResponse::Created().json(PoiBody::from(&poi)))
}

/// Apply a partial update to a POI.
#[utoipa::path(
    patch,
    path = "/api/v1/pois/{id}",
    params(("id" = i64, Path, description = "POI identifier")),
    request_body = UpdatePoiRequestBody,
    responses(
        (status = 200, description = "POI updated", body = PoiBody),
        (status = 400, description = "Invalid request", body = Error),
        (status = 404, description = "POI not found", body = Error),
        (status = 503, description = "POI store unavailable", body = Error)
    ),
    tags = ["pois"],
    operation_id = "updatePoi"
)]
#[patch("/pois/{id}")]
pub async fn update_poi(
    state: web::Data<HttpState>,
    id: web::Path<i64>,
    payload: web::Json<UpdatePoiRequestBody>,
) -> ApiResult<web::Json<PoiBody>> {
    let id = parse_id(id.into_inner())?;
    let patch = PoiPatch::try_from(payload.into_inner())?;
    let poi = state.commands.update(id, patch).await?;
    Ok(web::Json(PoiBody::from(&poi)))
}

/// Soft-delete a POI. Deleting an already inactive POI succeeds.
#[utoipa::path(
    delete,
    path = "/api/v1/pois/{id}",
    params(("id" = i64, Path, description = "POI identifier")),
    responses(
        (status = 204, description = "POI deactivated"),
        (status = 400, description = "Invalid request", body = Error),
        (status = 404, description = "POI not found", body = Error),
        (status = 503, description = "POI store unavailable", body = Error)
    ),
    tags = ["pois"],
    operation_id = "deletePoi"
)]
#[delete("/pois/{id}")]
pub async fn delete_poi(
    state: web::Data<HttpState>,
    id: web::Path<i64>,
) -> ApiResult<HttpResponse> {
    let id = parse_id(id.into_inner())?;
    state.commands.delete(id).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// Register the POI handlers on a service config.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(nearby_pois)
        .service(pois_by_category)
        .service(list_pois)
        .service(create_poi)
        .service(update_poi)
        .service(delete_poi);
}

#[cfg(test)]
#[path = "pois_tests.rs"]
mod tests;
