use tracing::info;

use super::recent::RecentSearches;
use super::{SearchFilters, SearchForm};
use crate::common::storage::{keys, raise_flag};
use crate::common::SessionStore;

/// Listings path plus encoded query string for a submitted search.
pub fn destination(form: SearchForm, filters: &SearchFilters) -> String {
    let query = filters.to_query_params().to_query_string();
    if query.is_empty() {
        form.listings_route().to_string()
    } else {
        format!("{}?{}", form.listings_route(), query)
    }
}

/// Submit a search: remember the query, ask the listings page to scroll to
/// its results, and return where to navigate.
pub fn submit_search(store: &dyn SessionStore, form: SearchForm, filters: &SearchFilters) -> String {
    let filters = filters.clone().normalized(form);

    if form == SearchForm::Restaurant {
        RecentSearches::restaurants(store).push(&filters.query);
    } else {
        RecentSearches::locations(store).push(&filters.query);
    }
    raise_flag(store, keys::SHOULD_SCROLL_TO_RESULTS);

    let target = destination(form, &filters);
    info!(form = %form, destination = %target, "Search submitted");
    target
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::storage::take_flag;
    use crate::common::InMemoryStore;

    #[test]
    fn destination_without_params_has_no_question_mark() {
        assert_eq!(
            destination(SearchForm::Stay, &SearchFilters::default()),
            "/listing-stay-map"
        );
    }

    #[test]
    fn destination_appends_query_string() {
        let mut filters = SearchFilters {
            category: "Restaurants".into(),
            selected_filters: vec!["Italian".into(), "Thai".into()],
            ..Default::default()
        };
        filters.set_distance(SearchForm::Restaurant, 0, 10);

        assert_eq!(
            destination(SearchForm::Restaurant, &filters),
            "/listing-restaurant-map?category=Restaurants&distance=0-10&filters=Italian%2CThai"
        );
    }

    #[test]
    fn submit_records_recent_search_and_raises_scroll_flag() {
        let store = InMemoryStore::new();
        let filters = SearchFilters {
            query: "  Newtown ".into(),
            ..Default::default()
        };

        let target = submit_search(&store, SearchForm::Restaurant, &filters);

        assert_eq!(target, "/listing-restaurant-map?query=Newtown");
        assert_eq!(RecentSearches::restaurants(&store).list(), vec!["Newtown"]);
        assert!(take_flag(&store, keys::SHOULD_SCROLL_TO_RESULTS));
    }
}
