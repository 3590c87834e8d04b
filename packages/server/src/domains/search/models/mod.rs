pub mod filter_group;
pub mod filters;
pub mod form;
pub mod query_params;
