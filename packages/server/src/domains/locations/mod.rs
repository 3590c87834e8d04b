pub mod errors;
pub mod models;

pub use errors::LocationError;
pub use models::postcode::{LocationRecord, PostcodeIndex, DEFAULT_LIMIT};

pub use crate::common::utils::geocoding::{Geocoder, LocationSource, ResolvedLocation};
