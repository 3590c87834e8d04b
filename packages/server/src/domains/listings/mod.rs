pub mod data;
pub mod view;

pub use data::demo::{demo_listings, Listing};
pub use view::{ListingsOptions, ListingsView, PAGE_SIZE};
