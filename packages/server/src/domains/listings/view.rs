//! Listings page model built from the search query parameters.
//!
//! By default the parameters only shape the heading, subheading and filter
//! pills; the result set is the first page of demo data, unfiltered. With
//! `apply_filters` the demo data is narrowed by the same parameters first.

use serde::Serialize;
use tracing::debug;

use super::data::demo::{demo_listings, Listing};
use crate::common::utils::calculate_distance_km;
use crate::domains::search::{QueryParams, SearchFilters, SearchForm};

pub const PAGE_SIZE: usize = 12;

#[derive(Debug, Clone, Copy, Default)]
pub struct ListingsOptions {
    pub apply_filters: bool,
    /// Coordinates the `query` resolved to, used for the distance filter.
    pub origin: Option<(f64, f64)>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ListingsView {
    pub heading: String,
    pub subheading: String,
    pub filter_pills: Vec<String>,
    pub filters_applied: bool,
    pub total: usize,
    pub listings: Vec<Listing>,
}

impl ListingsView {
    pub fn from_query_string(form: SearchForm, query: &str, options: ListingsOptions) -> Self {
        let params = QueryParams::parse(query);
        let filters = SearchFilters::from_query_params(&params, form);
        Self::build(form, &filters, options)
    }

    pub fn build(form: SearchForm, filters: &SearchFilters, options: ListingsOptions) -> Self {
        let dataset = demo_listings(form);

        let matching: Vec<Listing> = if options.apply_filters {
            dataset
                .iter()
                .filter(|listing| matches_filters(listing, form, filters, options.origin))
                .copied()
                .collect()
        } else {
            dataset.to_vec()
        };

        debug!(
            form = %form,
            apply_filters = options.apply_filters,
            matching = matching.len(),
            "Built listings view"
        );

        Self {
            heading: heading(form, filters),
            subheading: subheading(filters),
            filter_pills: filter_pills(filters),
            filters_applied: options.apply_filters,
            total: matching.len(),
            listings: matching.into_iter().take(PAGE_SIZE).collect(),
        }
    }
}

fn heading(form: SearchForm, filters: &SearchFilters) -> String {
    let noun = if filters.category.is_empty() {
        form.default_heading()
    } else {
        filters.category.as_str()
    };

    if filters.query.is_empty() {
        noun.to_string()
    } else {
        format!("{} in {}", noun, filters.query)
    }
}

fn subheading(filters: &SearchFilters) -> String {
    match filters.distance_range {
        Some(range) => format!("Within {} km", range),
        None => "Any distance".to_string(),
    }
}

/// Cuisine filters followed by property types, first occurrence wins.
fn filter_pills(filters: &SearchFilters) -> Vec<String> {
    let mut pills: Vec<String> = Vec::new();
    for item in filters
        .selected_filters
        .iter()
        .chain(&filters.selected_property_types)
    {
        if !pills.iter().any(|pill| pill.eq_ignore_ascii_case(item)) {
            pills.push(item.clone());
        }
    }
    pills
}

fn matches_filters(
    listing: &Listing,
    form: SearchForm,
    filters: &SearchFilters,
    origin: Option<(f64, f64)>,
) -> bool {
    if !filters.category.is_empty() && !listing.category.eq_ignore_ascii_case(&filters.category) {
        return false;
    }

    let wanted: Vec<&String> = filters
        .selected_filters
        .iter()
        .chain(&filters.selected_property_types)
        .collect();
    if !wanted.is_empty()
        && !listing
            .tags
            .iter()
            .any(|tag| wanted.iter().any(|w| w.eq_ignore_ascii_case(tag)))
    {
        return false;
    }

    match origin {
        // The query named a place: distance decides.
        Some((lat, lng)) => {
            let range = filters.effective_distance(form);
            let km = calculate_distance_km(lat, lng, listing.lat, listing.lng);
            km >= f64::from(range.min()) && km <= f64::from(range.max())
        }
        None if !filters.query.is_empty() => {
            let needle = filters.query.to_lowercase();
            listing.title.to_lowercase().contains(&needle)
                || listing.suburb.to_lowercase().contains(&needle)
        }
        None => true,
    }
}
