use std::time::Duration;

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, instrument, warn};

const NOMINATIM_URL: &str = "https://nominatim.openstreetmap.org";
const IP_LOOKUP_URL: &str = "https://ipapi.co";
const USER_AGENT: &str = "TableFinder/1.0 (Restaurant Discovery)";

/// Nominatim reverse lookup response
#[derive(Debug, Deserialize)]
struct NominatimReverse {
    #[serde(default)]
    address: NominatimAddress,
}

#[derive(Debug, Default, Deserialize)]
struct NominatimAddress {
    suburb: Option<String>,
    town: Option<String>,
    city: Option<String>,
    village: Option<String>,
    postcode: Option<String>,
    state: Option<String>,
}

/// ipapi.co response (only the fields we read)
#[derive(Debug, Deserialize)]
struct IpLookup {
    city: Option<String>,
    postal: Option<String>,
    region: Option<String>,
    latitude: Option<f64>,
    longitude: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LocationSource {
    Device,
    Ip,
}

/// A "where am I" answer suitable for pre-filling a location field
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedLocation {
    pub locality: String,
    pub postcode: Option<String>,
    pub state: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    pub source: LocationSource,
}

impl ResolvedLocation {
    /// Text placed into the location input, e.g. "Newtown NSW 2042".
    pub fn label(&self) -> String {
        [
            Some(self.locality.as_str()),
            self.state.as_deref(),
            self.postcode.as_deref(),
        ]
        .into_iter()
        .flatten()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
    }
}

/// Reverse geocoder with an IP-based fallback.
///
/// Each lookup is a single best-effort request with a 10s timeout; there is
/// no retry.
#[derive(Debug, Clone)]
pub struct Geocoder {
    client: reqwest::Client,
    reverse_base: String,
    ip_base: String,
}

impl Default for Geocoder {
    fn default() -> Self {
        Self::with_endpoints(NOMINATIM_URL, IP_LOOKUP_URL)
    }
}

impl Geocoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_endpoints(reverse_base: impl Into<String>, ip_base: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            reverse_base: reverse_base.into().trim_end_matches('/').to_string(),
            ip_base: ip_base.into().trim_end_matches('/').to_string(),
        }
    }

    /// Resolve the caller's location.
    ///
    /// Uses the device coordinates when given; if they are missing or the
    /// reverse lookup fails, falls back to IP geolocation.
    pub async fn current_location(&self, coords: Option<(f64, f64)>) -> Result<ResolvedLocation> {
        if let Some((lat, lng)) = coords {
            match self.reverse_geocode(lat, lng).await {
                Ok(location) => return Ok(location),
                Err(e) => warn!(error = %e, "Reverse geocoding failed, falling back to IP lookup"),
            }
        }

        self.locate_by_ip().await
    }

    #[instrument(skip(self))]
    pub async fn reverse_geocode(&self, lat: f64, lng: f64) -> Result<ResolvedLocation> {
        let url = format!(
            "{}/reverse?lat={}&lon={}&format=json&addressdetails=1",
            self.reverse_base, lat, lng
        );

        debug!("Reverse geocoding ({}, {})", lat, lng);

        let response: NominatimReverse = self
            .client
            .get(&url)
            .header("User-Agent", USER_AGENT)
            .timeout(Duration::from_secs(10))
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, "Reverse geocoding request failed");
                anyhow!("Reverse geocoding request failed: {}", e)
            })?
            .error_for_status()?
            .json()
            .await
            .map_err(|e| anyhow!("Failed to parse reverse geocoding response: {}", e))?;

        let address = response.address;
        let locality = address
            .suburb
            .or(address.town)
            .or(address.city)
            .or(address.village)
            .ok_or_else(|| anyhow!("No locality found for ({}, {})", lat, lng))?;

        Ok(ResolvedLocation {
            locality,
            postcode: address.postcode,
            state: address.state,
            latitude: lat,
            longitude: lng,
            source: LocationSource::Device,
        })
    }

    #[instrument(skip(self))]
    pub async fn locate_by_ip(&self) -> Result<ResolvedLocation> {
        let url = format!("{}/json/", self.ip_base);

        let response: IpLookup = self
            .client
            .get(&url)
            .header("User-Agent", USER_AGENT)
            .timeout(Duration::from_secs(10))
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, "IP geolocation request failed");
                anyhow!("IP geolocation request failed: {}", e)
            })?
            .error_for_status()?
            .json()
            .await
            .map_err(|e| anyhow!("Failed to parse IP geolocation response: {}", e))?;

        let locality = response
            .city
            .ok_or_else(|| anyhow!("IP geolocation returned no city"))?;

        Ok(ResolvedLocation {
            locality,
            postcode: response.postal,
            state: response.region,
            latitude: response.latitude.unwrap_or_default(),
            longitude: response.longitude.unwrap_or_default(),
            source: LocationSource::Ip,
        })
    }
}

/// Calculate distance between two coordinates in kilometers
///
/// Uses Haversine formula for accuracy on Earth's surface
pub fn calculate_distance_km(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> f64 {
    const EARTH_RADIUS_KM: f64 = 6371.0;

    let dlat = (lat2 - lat1).to_radians();
    let dlng = (lng2 - lng1).to_radians();

    let a = (dlat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (dlng / 2.0).sin().powi(2);

    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}
