#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! API request and response types for the subdivision map server.
//!
//! Zone/house details and dashboards are serialized straight from the
//! store projections in `subdivision_map_zone`; the types here cover the
//! remaining API-only shapes (legend, zone list, query parameters, errors).

use serde::{Deserialize, Serialize};
use subdivision_map_status_models::{
    BadgeVariant, ColorToken, HouseStatus, IncidentCategory, classify,
};
use subdivision_map_zone_models::{LatLng, Zone};

/// Health check response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiHealth {
    /// Whether the service is healthy.
    pub healthy: bool,
    /// Service version.
    pub version: String,
}

/// Error response body. Carries a client-facing message only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Human-readable error message.
    pub error: String,
}

impl ApiError {
    /// Creates an error body.
    #[must_use]
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// One entry of the house status legend.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiStatusLegendEntry {
    /// Status identifier.
    pub status: HouseStatus,
    /// Human-readable label.
    pub label: String,
    /// Color token.
    pub color: ColorToken,
    /// CSS hex color of the token.
    pub hex: String,
    /// Badge variant.
    pub badge: BadgeVariant,
}

impl From<HouseStatus> for ApiStatusLegendEntry {
    fn from(status: HouseStatus) -> Self {
        let style = classify(status);
        Self {
            status,
            label: status.label().to_string(),
            color: style.color,
            hex: style.color.hex().to_string(),
            badge: style.badge,
        }
    }
}

/// An incident category as listed by the API.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiIncidentCategory {
    /// Category identifier.
    pub category: IncidentCategory,
    /// Display name.
    pub name: String,
}

/// A zone as listed by the zone index endpoint.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiZoneSummary {
    /// Zone identifier.
    pub id: String,
    /// Zone name.
    pub name: String,
    /// Zone category.
    pub category: String,
    /// Polygon fill color.
    pub color: String,
    /// Number of houses.
    pub household_count: usize,
    /// Sum of occupant counts.
    pub resident_count: u64,
    /// Total incidents.
    pub incident_count: usize,
    /// Label position.
    pub centroid: Option<LatLng>,
}

impl ApiZoneSummary {
    /// Summarizes a zone, with the label position computed by the caller.
    #[must_use]
    pub fn new(zone: &Zone, centroid: Option<LatLng>) -> Self {
        Self {
            id: zone.id.clone(),
            name: zone.name.clone(),
            category: zone.category.clone(),
            color: zone.color.clone(),
            household_count: zone.houses.len(),
            resident_count: zone.houses.iter().map(|h| u64::from(h.occupant_count)).sum(),
            incident_count: zone.houses.iter().map(|h| h.incidents.len()).sum(),
            centroid,
        }
    }
}

/// Query parameters for the map click endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocateQueryParams {
    /// Latitude of the clicked point.
    pub lat: f64,
    /// Longitude of the clicked point.
    pub lng: f64,
}
