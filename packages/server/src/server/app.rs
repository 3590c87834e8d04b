//! Application setup and server configuration.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::Extension,
    http::{header::CONTENT_TYPE, HeaderValue, Method},
    routing::{any, get, post},
    Router,
};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::common::utils::Geocoder;
use crate::config::Config;
use crate::domains::locations::{LocationError, PostcodeIndex};
use crate::server::routes::{
    current_location_handler, health_handler, listings_handler, locations_handler, proxy_handler,
    proxy_root_handler, search_handler,
};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Loaded once at startup. A failed load is kept so the location
    /// endpoints can report it instead of results.
    pub postcodes: Arc<Result<PostcodeIndex, LocationError>>,
    pub geocoder: Geocoder,
    /// Client used to forward proxied requests.
    pub http: reqwest::Client,
    pub proxy_upstream: String,
    pub listings_apply_filters: bool,
}

impl AppState {
    pub fn from_config(config: &Config) -> Self {
        let postcodes = PostcodeIndex::from_path(&config.postcodes_csv);
        if let Err(e) = &postcodes {
            tracing::error!(error = %e, "Postcode asset unavailable; location search disabled");
        }

        Self {
            postcodes: Arc::new(postcodes),
            geocoder: Geocoder::new(),
            http: proxy_client(),
            proxy_upstream: config.proxy_upstream_url(),
            listings_apply_filters: config.listings_apply_filters,
        }
    }

    /// State with an already-loaded index and a given upstream.
    pub fn new(postcodes: PostcodeIndex, proxy_upstream: impl Into<String>) -> Self {
        Self {
            postcodes: Arc::new(Ok(postcodes)),
            geocoder: Geocoder::new(),
            http: proxy_client(),
            proxy_upstream: proxy_upstream.into(),
            listings_apply_filters: false,
        }
    }
}

fn proxy_client() -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(30))
        .build()
        .unwrap_or_default()
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid allowed origin");
                None
            }
        })
        .collect();

    let allow_origin = if origins.is_empty() {
        AllowOrigin::from(Any)
    } else {
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE])
}

/// Build the Axum application router
///
/// The auth proxy carries its own fully permissive CORS layer; the JSON
/// endpoints honour `allowed_origins` (empty means any origin).
pub fn build_app(state: AppState, allowed_origins: &[String]) -> Router {
    let api = Router::new()
        .route("/api/locations", get(locations_handler))
        .route("/api/locations/current", get(current_location_handler))
        .route("/api/search/:form", post(search_handler))
        .route("/api/listings/:form", get(listings_handler))
        .layer(cors_layer(allowed_origins));

    let proxy = Router::new()
        .route("/api/proxy", any(proxy_root_handler))
        .route("/api/proxy/*path", any(proxy_handler))
        .layer(CorsLayer::permissive());

    Router::new()
        // Health check
        .route("/health", get(health_handler))
        .merge(api)
        .merge(proxy)
        .layer(Extension(state))
        .layer(TraceLayer::new_for_http())
}
