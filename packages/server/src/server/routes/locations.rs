use axum::{extract::Query, Extension, Json};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::domains::locations::{LocationRecord, ResolvedLocation, DEFAULT_LIMIT};
use crate::server::app::AppState;
use crate::server::ApiError;

const MAX_LIMIT: usize = 50;

#[derive(Deserialize)]
pub struct LocationQuery {
    #[serde(default)]
    q: String,
    limit: Option<usize>,
}

#[derive(Serialize)]
pub struct LocationMatch {
    #[serde(flatten)]
    record: LocationRecord,
    label: String,
}

#[derive(Serialize)]
pub struct LocationsResponse {
    results: Vec<LocationMatch>,
    /// Shown in place of the dropdown when nothing matched.
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<&'static str>,
}

/// GET /api/locations?q=&limit=
pub async fn locations_handler(
    Extension(state): Extension<AppState>,
    Query(query): Query<LocationQuery>,
) -> Result<Json<LocationsResponse>, ApiError> {
    let index = (*state.postcodes).as_ref().map_err(|e| {
        warn!(error = %e, "Location search requested without postcode data");
        ApiError::Internal(e.display_message().to_string())
    })?;

    let limit = query.limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT);
    let results: Vec<LocationMatch> = index
        .search(&query.q, limit)
        .into_iter()
        .map(|record| LocationMatch {
            label: record.display_label(),
            record: record.clone(),
        })
        .collect();

    let message = (results.is_empty() && !query.q.trim().is_empty()).then_some("No results found");

    Ok(Json(LocationsResponse { results, message }))
}

#[derive(Deserialize)]
pub struct CurrentLocationQuery {
    lat: Option<f64>,
    lng: Option<f64>,
}

#[derive(Serialize)]
pub struct CurrentLocationResponse {
    #[serde(flatten)]
    location: ResolvedLocation,
    label: String,
}

/// GET /api/locations/current?lat=&lng=
///
/// Reverse geocodes device coordinates, falling back to IP geolocation.
pub async fn current_location_handler(
    Extension(state): Extension<AppState>,
    Query(query): Query<CurrentLocationQuery>,
) -> Result<Json<CurrentLocationResponse>, ApiError> {
    let location = state
        .geocoder
        .current_location(query.lat.zip(query.lng))
        .await
        .map_err(|e| {
            warn!(error = %e, "Could not determine current location");
            ApiError::Unavailable("Unable to determine your location".to_string())
        })?;

    Ok(Json(CurrentLocationResponse {
        label: location.label(),
        location,
    }))
}
