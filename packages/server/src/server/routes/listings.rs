use axum::{
    extract::{Path, RawQuery},
    Extension, Json,
};

use crate::domains::listings::{ListingsOptions, ListingsView};
use crate::domains::search::{param_keys, QueryParams, SearchForm};
use crate::server::app::AppState;
use crate::server::ApiError;

/// GET /api/listings/:form?category=&query=&distance=&filters=&propertyTypes=
pub async fn listings_handler(
    Extension(state): Extension<AppState>,
    Path(form): Path<String>,
    RawQuery(query): RawQuery,
) -> Result<Json<ListingsView>, ApiError> {
    let form: SearchForm = form.parse()?;
    let query = query.unwrap_or_default();

    let origin = if state.listings_apply_filters {
        resolve_origin(&state, &query)
    } else {
        None
    };

    let options = ListingsOptions {
        apply_filters: state.listings_apply_filters,
        origin,
    };

    Ok(Json(ListingsView::from_query_string(form, &query, options)))
}

/// Coordinates of the first postcode match for the `query` parameter.
fn resolve_origin(state: &AppState, query: &str) -> Option<(f64, f64)> {
    let params = QueryParams::parse(query);
    let place = params.get(param_keys::QUERY)?;
    let index = (*state.postcodes).as_ref().ok()?;
    index
        .search(place, 1)
        .first()
        .and_then(|record| record.coordinates())
}
