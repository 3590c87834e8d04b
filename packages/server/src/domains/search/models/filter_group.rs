//! Multi-select checkbox groups with a derived "All" entry.
//!
//! `All` is never stored: it is checked exactly when every item in the group
//! is checked, and toggling it fans out to every item.

use serde::{Deserialize, Serialize};

use super::form::SearchForm;

/// Id reserved for the "All" checkbox.
pub const ALL_ID: &str = "all";

pub const CUISINES: &[&str] = &[
    "Italian",
    "Thai",
    "Japanese",
    "Chinese",
    "Indian",
    "Mexican",
    "Vietnamese",
    "Greek",
];

pub const STAY_PROPERTY_TYPES: &[&str] = &["Hotel", "Apartment", "Guest house", "Villa", "Cabin"];

pub const REAL_ESTATE_PROPERTY_TYPES: &[&str] = &["House", "Apartment", "Townhouse", "Land"];

/// Property types offered by a form. Restaurants have none.
pub fn property_types_for(form: SearchForm) -> &'static [&'static str] {
    match form {
        SearchForm::Restaurant => &[],
        SearchForm::Stay => STAY_PROPERTY_TYPES,
        SearchForm::RealEstate => REAL_ESTATE_PROPERTY_TYPES,
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterItem {
    pub id: String,
    pub label: String,
    pub checked: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterGroup {
    items: Vec<FilterItem>,
}

impl FilterGroup {
    /// Build an unchecked group where each label doubles as its id.
    pub fn from_labels<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            items: labels
                .into_iter()
                .map(|label| {
                    let label = label.into();
                    FilterItem {
                        id: label.clone(),
                        label,
                        checked: false,
                    }
                })
                .collect(),
        }
    }

    pub fn cuisines() -> Self {
        Self::from_labels(CUISINES.iter().copied())
    }

    pub fn property_types(form: SearchForm) -> Self {
        Self::from_labels(property_types_for(form).iter().copied())
    }

    pub fn items(&self) -> &[FilterItem] {
        &self.items
    }

    pub fn all_checked(&self) -> bool {
        !self.items.is_empty() && self.items.iter().all(|item| item.checked)
    }

    /// Checked ids in group order.
    pub fn selected_ids(&self) -> Vec<String> {
        self.items
            .iter()
            .filter(|item| item.checked)
            .map(|item| item.id.clone())
            .collect()
    }

    /// Restore checked state from a list of ids (e.g. read back from a URL).
    /// Ids the group does not know are ignored.
    pub fn with_selected<S: AsRef<str>>(mut self, ids: &[S]) -> Self {
        for item in &mut self.items {
            item.checked = ids.iter().any(|id| id.as_ref() == item.id);
        }
        self
    }
}

/// Pure reducer for a checkbox toggle.
pub fn apply_toggle(group: &FilterGroup, item_id: &str, checked: bool) -> FilterGroup {
    let mut next = group.clone();

    if item_id == ALL_ID {
        for item in &mut next.items {
            item.checked = checked;
        }
    } else if let Some(item) = next.items.iter_mut().find(|item| item.id == item_id) {
        item.checked = checked;
    }

    next
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group() -> FilterGroup {
        FilterGroup::from_labels(["Italian", "Thai", "Japanese"])
    }

    #[test]
    fn checking_every_item_checks_all() {
        let mut g = group();
        for id in ["Italian", "Thai"] {
            g = apply_toggle(&g, id, true);
            assert!(!g.all_checked());
        }
        g = apply_toggle(&g, "Japanese", true);
        assert!(g.all_checked());
    }

    #[test]
    fn unchecking_one_item_clears_all() {
        let g = apply_toggle(&group(), ALL_ID, true);
        assert!(g.all_checked());

        let g = apply_toggle(&g, "Thai", false);
        assert!(!g.all_checked());
        assert_eq!(g.selected_ids(), vec!["Italian", "Japanese"]);
    }

    #[test]
    fn all_toggle_fans_out() {
        let g = apply_toggle(&group(), ALL_ID, true);
        assert_eq!(g.selected_ids().len(), 3);

        let g = apply_toggle(&g, ALL_ID, false);
        assert!(g.selected_ids().is_empty());
    }

    #[test]
    fn unknown_id_is_a_no_op() {
        let g = group();
        assert_eq!(apply_toggle(&g, "Klingon", true), g);
    }

    #[test]
    fn empty_group_is_never_all_checked() {
        let g = FilterGroup::default();
        assert!(!apply_toggle(&g, ALL_ID, true).all_checked());
    }

    #[test]
    fn reducer_does_not_mutate_input() {
        let g = group();
        let _ = apply_toggle(&g, "Thai", true);
        assert!(g.selected_ids().is_empty());
    }

    #[test]
    fn with_selected_restores_state() {
        let g = group().with_selected(&["Thai", "Burmese"]);
        assert_eq!(g.selected_ids(), vec!["Thai"]);
    }

    #[test]
    fn property_types_follow_the_form() {
        let labels = |form| -> Vec<String> {
            FilterGroup::property_types(form)
                .items()
                .iter()
                .map(|item| item.label.clone())
                .collect()
        };

        assert!(labels(SearchForm::Restaurant).is_empty());
        assert!(labels(SearchForm::Stay).contains(&"Guest house".to_string()));
        assert_eq!(
            labels(SearchForm::RealEstate),
            ["House", "Apartment", "Townhouse", "Land"]
        );
    }
}
