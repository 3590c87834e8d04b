pub mod errors;
pub mod models;
pub mod navigation;
pub mod recent;

pub use errors::SearchError;
pub use models::filter_group::{apply_toggle, property_types_for, FilterGroup, FilterItem, ALL_ID};
pub use models::filters::{DistanceRange, GroupKind, SearchFilters};
pub use models::form::SearchForm;
pub use models::query_params::{param_keys, QueryParams};
pub use navigation::{destination, submit_search};
pub use recent::RecentSearches;
