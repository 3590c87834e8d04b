use axum::{
    extract::{rejection::JsonRejection, Path},
    Json,
};
use serde::Serialize;
use tracing::info;

use crate::domains::search::{destination, QueryParams, SearchFilters, SearchForm};
use crate::server::ApiError;

#[derive(Serialize)]
pub struct SearchResponse {
    pub destination: String,
    pub params: QueryParams,
}

/// POST /api/search/:form
///
/// Takes the form's filter state and answers with the listings URL to
/// navigate to.
pub async fn search_handler(
    Path(form): Path<String>,
    payload: Result<Json<SearchFilters>, JsonRejection>,
) -> Result<Json<SearchResponse>, ApiError> {
    let form: SearchForm = form.parse()?;
    let Json(filters) = payload?;
    let filters = filters.normalized(form);

    let response = SearchResponse {
        destination: destination(form, &filters),
        params: filters.to_query_params(),
    };

    info!(form = %form, destination = %response.destination, "Search serialized");
    Ok(Json(response))
}
