use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::filter_group::FilterGroup;
use super::form::SearchForm;
use crate::domains::search::SearchError;

/// Inclusive distance range in kilometres. Always `min <= max`.
///
/// Travels as a two-element array (`[min, max]`) in JSON. Incoming values
/// may be negative; they clamp to 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "[i64; 2]", into = "[u32; 2]")]
pub struct DistanceRange {
    min: u32,
    max: u32,
}

impl DistanceRange {
    /// Clamp both ends into `[0, limit]`, swapping them if they cross.
    pub fn clamped(min: i64, max: i64, limit: u32) -> Self {
        let clamp = |value: i64| value.clamp(0, i64::from(limit)) as u32;
        let (a, b) = (clamp(min), clamp(max));
        if a <= b {
            Self { min: a, max: b }
        } else {
            Self { min: b, max: a }
        }
    }

    /// Full slider range for a form.
    pub fn full(form: SearchForm) -> Self {
        Self {
            min: 0,
            max: form.distance_limit(),
        }
    }

    pub fn min(&self) -> u32 {
        self.min
    }

    pub fn max(&self) -> u32 {
        self.max
    }

    /// Re-clamp against a (possibly smaller) limit.
    pub fn within(self, limit: u32) -> Self {
        Self::clamped(self.min.into(), self.max.into(), limit)
    }
}

impl From<[i64; 2]> for DistanceRange {
    fn from([min, max]: [i64; 2]) -> Self {
        Self::clamped(min, max, u32::MAX)
    }
}

impl From<DistanceRange> for [u32; 2] {
    fn from(range: DistanceRange) -> Self {
        [range.min, range.max]
    }
}

impl fmt::Display for DistanceRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.min, self.max)
    }
}

impl FromStr for DistanceRange {
    type Err = SearchError;

    /// Parse the `"min-max"` wire form. A leading `-` belongs to `min`
    /// (`"-3-4"`); negatives clamp to 0 and crossed ends are swapped. No
    /// upper limit is applied here.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SearchError::InvalidDistance(s.to_string());
        let raw = s.trim();
        let (negative, rest) = match raw.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, raw),
        };
        let (min, max) = rest.split_once('-').ok_or_else(invalid)?;
        let min = min.trim().parse::<i64>().map_err(|_| invalid())?;
        let max = max.trim().parse::<i64>().map_err(|_| invalid())?;
        let min = if negative { -min } else { min };
        Ok(Self::clamped(min, max, u32::MAX))
    }
}

/// Which multi-select group a checkbox list feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupKind {
    Cuisine,
    PropertyType,
}

/// The user's current search criteria, before submission.
///
/// Every field defaults to empty. `distance_range` stays `None` until the user
/// moves the slider, so an untouched slider is not serialized.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchFilters {
    pub category: String,
    pub query: String,
    pub distance_range: Option<DistanceRange>,
    pub selected_filters: Vec<String>,
    pub selected_property_types: Vec<String>,
}

impl SearchFilters {
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn set_category(&mut self, category: impl Into<String>) {
        self.category = category.into();
    }

    /// Slider callback. Values are clamped to the form's limit.
    pub fn set_distance(&mut self, form: SearchForm, min: i64, max: i64) {
        self.distance_range = Some(DistanceRange::clamped(min, max, form.distance_limit()));
    }

    pub fn set_selected_filters(&mut self, filters: Vec<String>) {
        self.selected_filters = filters;
    }

    pub fn set_selected_property_types(&mut self, types: Vec<String>) {
        self.selected_property_types = types;
    }

    /// Copy a checkbox group's selection into the matching field.
    pub fn sync_group(&mut self, kind: GroupKind, group: &FilterGroup) {
        let selected = group.selected_ids();
        match kind {
            GroupKind::Cuisine => self.set_selected_filters(selected),
            GroupKind::PropertyType => self.set_selected_property_types(selected),
        }
    }

    /// Distance to use for display or filtering: the user's choice or the
    /// form's full range.
    pub fn effective_distance(&self, form: SearchForm) -> DistanceRange {
        self.distance_range
            .map(|range| range.within(form.distance_limit()))
            .unwrap_or_else(|| DistanceRange::full(form))
    }

    /// Re-apply the form's limits to everything that came from outside
    /// (JSON bodies, URLs).
    pub fn normalized(mut self, form: SearchForm) -> Self {
        self.category = self.category.trim().to_string();
        self.query = self.query.trim().to_string();
        self.distance_range = self
            .distance_range
            .map(|range| range.within(form.distance_limit()));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::search::apply_toggle;

    #[test]
    fn clamping_keeps_min_below_max() {
        let range = DistanceRange::clamped(8, 3, 10);
        assert_eq!((range.min(), range.max()), (3, 8));

        let range = DistanceRange::clamped(4, 99, 10);
        assert_eq!((range.min(), range.max()), (4, 10));

        let range = DistanceRange::clamped(70, 90, 50);
        assert_eq!((range.min(), range.max()), (50, 50));
    }

    #[test]
    fn distance_wire_format() {
        assert_eq!(DistanceRange::clamped(0, 10, 10).to_string(), "0-10");
        assert_eq!(DistanceRange::clamped(5, 5, 10).to_string(), "5-5");
        assert_eq!("3-7".parse::<DistanceRange>().unwrap().to_string(), "3-7");
        assert_eq!("9-2".parse::<DistanceRange>().unwrap().to_string(), "2-9");
    }

    #[test]
    fn negative_ends_clamp_to_zero() {
        let range = DistanceRange::clamped(-2, 5, 10);
        assert_eq!((range.min(), range.max()), (0, 5));

        let range = DistanceRange::clamped(-8, -3, 10);
        assert_eq!((range.min(), range.max()), (0, 0));

        assert_eq!("-3-4".parse::<DistanceRange>().unwrap().to_string(), "0-4");
        assert_eq!("6--1".parse::<DistanceRange>().unwrap().to_string(), "0-6");

        let range: DistanceRange = serde_json::from_str("[-2, 5]").unwrap();
        assert_eq!(range.to_string(), "0-5");
    }

    #[test]
    fn malformed_distance_is_rejected() {
        for raw in ["", "5", "-5", "a-b", "1-2-3", "--3-4"] {
            assert!(raw.parse::<DistanceRange>().is_err(), "{raw}");
        }
    }

    #[test]
    fn set_distance_uses_form_limit() {
        let mut filters = SearchFilters::default();
        filters.set_distance(SearchForm::Restaurant, 2, 40);
        assert_eq!(filters.distance_range, Some(DistanceRange::clamped(2, 10, 10)));

        filters.set_distance(SearchForm::RealEstate, 2, 40);
        assert_eq!(filters.distance_range.unwrap().max(), 40);
    }

    #[test]
    fn last_write_wins() {
        let mut filters = SearchFilters::default();
        filters.set_query("Newtown");
        filters.set_query("Surry Hills");
        assert_eq!(filters.query, "Surry Hills");
    }

    #[test]
    fn sync_group_copies_selection() {
        let group = apply_toggle(&FilterGroup::cuisines(), "Thai", true);
        let mut filters = SearchFilters::default();
        filters.sync_group(GroupKind::Cuisine, &group);
        assert_eq!(filters.selected_filters, vec!["Thai"]);
        assert!(filters.selected_property_types.is_empty());
    }

    #[test]
    fn json_shape_matches_form_state() {
        let filters: SearchFilters = serde_json::from_str(
            r#"{"category":"Restaurants","distanceRange":[12,4],"selectedFilters":["Thai"]}"#,
        )
        .unwrap();
        assert_eq!(filters.distance_range.unwrap().to_string(), "4-12");
        assert_eq!(filters.query, "");

        let normalized = filters.normalized(SearchForm::Restaurant);
        assert_eq!(normalized.distance_range.unwrap().to_string(), "4-10");
    }

    #[test]
    fn effective_distance_defaults_to_full_range() {
        let filters = SearchFilters::default();
        assert_eq!(filters.effective_distance(SearchForm::Stay).to_string(), "0-50");
    }
}
