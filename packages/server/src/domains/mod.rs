// Business domains
pub mod auth;
pub mod listings;
pub mod locations;
pub mod search;
