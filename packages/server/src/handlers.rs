//! HTTP handler functions for the subdivision map API.

use actix_web::{HttpResponse, web};
use subdivision_map_server_models::{
    ApiError, ApiHealth, ApiIncidentCategory, ApiStatusLegendEntry, ApiZoneSummary,
    LocateQueryParams,
};
use subdivision_map_spatial::{zone_centroid, zones_to_geojson};
use subdivision_map_status_models::{HouseStatus, IncidentCategory};
use subdivision_map_zone::{LookupError, dashboard, select};

use crate::AppState;

/// `GET /api/health`
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(ApiHealth {
        healthy: true,
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// `GET /api/statuses`
///
/// Returns the status legend: every house status with its map color and
/// badge variant.
pub async fn statuses() -> HttpResponse {
    let legend: Vec<ApiStatusLegendEntry> = HouseStatus::all()
        .iter()
        .map(|status| ApiStatusLegendEntry::from(*status))
        .collect();

    HttpResponse::Ok().json(legend)
}

/// `GET /api/incident-categories`
pub async fn incident_categories() -> HttpResponse {
    let categories: Vec<ApiIncidentCategory> = IncidentCategory::all()
        .iter()
        .map(|category| ApiIncidentCategory {
            category: *category,
            name: category.to_string(),
        })
        .collect();

    HttpResponse::Ok().json(categories)
}

/// `GET /api/zones`
pub async fn zones(state: web::Data<AppState>) -> HttpResponse {
    let summaries: Vec<ApiZoneSummary> = state
        .store
        .zones()
        .iter()
        .map(|zone| ApiZoneSummary::new(zone, zone_centroid(zone)))
        .collect();

    HttpResponse::Ok().json(summaries)
}

/// `GET /api/zones/geojson`
///
/// Returns the zone layer as a `GeoJSON` `FeatureCollection`.
pub async fn zones_geojson(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(zones_to_geojson(state.store.zones()))
}

/// `GET /api/zones/{zone_id}`
pub async fn zone(state: web::Data<AppState>, path: web::Path<String>) -> HttpResponse {
    match select::select_zone(&state.store, &path) {
        Ok(detail) => HttpResponse::Ok().json(detail),
        Err(e) => lookup_error(&e),
    }
}

/// `GET /api/zones/{zone_id}/houses/{house_id}`
pub async fn house(
    state: web::Data<AppState>,
    path: web::Path<(String, String)>,
) -> HttpResponse {
    let (zone_id, house_id) = path.into_inner();
    match select::select_house(&state.store, &zone_id, &house_id) {
        Ok(detail) => HttpResponse::Ok().json(detail),
        Err(e) => lookup_error(&e),
    }
}

/// `GET /api/locate?lat=&lng=`
///
/// Resolves a map click to the zone containing the point.
pub async fn locate(
    state: web::Data<AppState>,
    params: web::Query<LocateQueryParams>,
) -> HttpResponse {
    let Some(zone_id) = state.index.locate(params.lat, params.lng) else {
        log::debug!("No zone at ({}, {})", params.lat, params.lng);
        return HttpResponse::NotFound().json(ApiError::new("No zone at this location"));
    };

    match select::select_zone(&state.store, zone_id) {
        Ok(detail) => HttpResponse::Ok().json(detail),
        Err(e) => {
            // Index and store are built from the same zones.
            log::error!("Indexed zone missing from store: {e}");
            HttpResponse::InternalServerError().json(ApiError::new("Internal server error"))
        }
    }
}

/// `GET /api/guards`
///
/// Returns the security entrances with their guard rosters.
pub async fn guards(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(state.store.entrances())
}

/// `GET /api/dashboard/admin`
pub async fn admin_dashboard(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(dashboard::admin_dashboard(&state.store))
}

/// `GET /api/dashboard/owner/{zone_id}/{house_id}`
pub async fn owner_dashboard(
    state: web::Data<AppState>,
    path: web::Path<(String, String)>,
) -> HttpResponse {
    let (zone_id, house_id) = path.into_inner();
    match dashboard::owner_dashboard(&state.store, &zone_id, &house_id) {
        Ok(dashboard) => HttpResponse::Ok().json(dashboard),
        Err(e) => lookup_error(&e),
    }
}

fn lookup_error(e: &LookupError) -> HttpResponse {
    log::debug!("Lookup failed: {e}");
    let message = match e {
        LookupError::ZoneNotFound { .. } => "Zone not found",
        LookupError::HouseNotFound { .. } => "House not found",
        LookupError::NoZoneSelected => "No zone selected",
    };
    HttpResponse::NotFound().json(ApiError::new(message))
}
