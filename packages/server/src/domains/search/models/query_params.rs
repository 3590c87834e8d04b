//! URL query encoding of [`SearchFilters`].
//!
//! This is the only contract between a search form and a listings page.
//! Keys are emitted in a fixed order and empty fields are omitted.

use serde::{Serialize, Serializer};
use tracing::debug;
use url::form_urlencoded;

use super::filters::{DistanceRange, SearchFilters};
use super::form::SearchForm;

pub mod param_keys {
    pub const CATEGORY: &str = "category";
    pub const QUERY: &str = "query";
    pub const DISTANCE: &str = "distance";
    pub const FILTERS: &str = "filters";
    pub const PROPERTY_TYPES: &str = "propertyTypes";
}

/// Flat, ordered string map. Inserting an existing key replaces its value in
/// place. Serializes as a JSON object in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.pairs.iter_mut().find(|(k, _)| *k == key) {
            Some(pair) => pair.1 = value,
            None => self.pairs.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Comma-separated list value, trimmed, empties dropped.
    pub fn get_list(&self, key: &str) -> Vec<String> {
        self.get(key).map(split_list).unwrap_or_default()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Standard `application/x-www-form-urlencoded` encoding, no leading `?`.
    pub fn to_query_string(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.iter())
            .finish()
    }

    /// Parse a query string, with or without the leading `?`. Repeated keys
    /// keep the first value, like `URLSearchParams.get`.
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let mut params = Self::new();
        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            if params.get(&key).is_none() {
                params.pairs.push((key.into_owned(), value.into_owned()));
            }
        }
        params
    }
}

impl Serialize for QueryParams {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

pub fn join_list(items: &[String]) -> String {
    items
        .iter()
        .map(|item| item.trim())
        .filter(|item| !item.is_empty())
        .collect::<Vec<_>>()
        .join(",")
}

pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(String::from)
        .collect()
}

impl SearchFilters {
    pub fn to_query_params(&self) -> QueryParams {
        let mut params = QueryParams::new();

        let category = self.category.trim();
        if !category.is_empty() {
            params.insert(param_keys::CATEGORY, category);
        }

        let query = self.query.trim();
        if !query.is_empty() {
            params.insert(param_keys::QUERY, query);
        }

        if let Some(range) = self.distance_range {
            params.insert(param_keys::DISTANCE, range.to_string());
        }

        let filters = join_list(&self.selected_filters);
        if !filters.is_empty() {
            params.insert(param_keys::FILTERS, filters);
        }

        let property_types = join_list(&self.selected_property_types);
        if !property_types.is_empty() {
            params.insert(param_keys::PROPERTY_TYPES, property_types);
        }

        params
    }

    /// Rebuild filters from URL parameters for `form`.
    ///
    /// A malformed `distance` is dropped (the form default applies); a valid
    /// one is clamped to the form's limit.
    pub fn from_query_params(params: &QueryParams, form: SearchForm) -> Self {
        let distance_range = params.get(param_keys::DISTANCE).and_then(|raw| {
            raw.parse::<DistanceRange>()
                .map(|range| range.within(form.distance_limit()))
                .map_err(|e| debug!(error = %e, "Ignoring distance parameter"))
                .ok()
        });

        Self {
            category: params.get(param_keys::CATEGORY).unwrap_or_default().trim().to_string(),
            query: params.get(param_keys::QUERY).unwrap_or_default().trim().to_string(),
            distance_range,
            selected_filters: params.get_list(param_keys::FILTERS),
            selected_property_types: params.get_list(param_keys::PROPERTY_TYPES),
        }
    }
}
