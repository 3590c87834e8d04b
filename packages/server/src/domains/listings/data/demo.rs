//! Static demo listings standing in for a backend query.

use serde::Serialize;

use crate::domains::search::SearchForm;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Listing {
    pub id: u32,
    pub title: &'static str,
    pub category: &'static str,
    /// Cuisines for restaurants, property type for stays and real estate.
    pub tags: &'static [&'static str],
    pub suburb: &'static str,
    pub lat: f64,
    pub lng: f64,
    pub rating: f32,
    pub price: &'static str,
}

#[allow(clippy::too_many_arguments)]
const fn listing(
    id: u32,
    title: &'static str,
    category: &'static str,
    tags: &'static [&'static str],
    suburb: &'static str,
    lat: f64,
    lng: f64,
    rating: f32,
    price: &'static str,
) -> Listing {
    Listing {
        id,
        title,
        category,
        tags,
        suburb,
        lat,
        lng,
        rating,
        price,
    }
}

pub const RESTAURANTS: &[Listing] = &[
    listing(1, "Trattoria Sole", "Restaurants", &["Italian"], "Newtown", -33.8973, 151.1790, 4.6, "$$"),
    listing(2, "Bangkok Lane", "Restaurants", &["Thai"], "Newtown", -33.8968, 151.1802, 4.4, "$"),
    listing(3, "Izakaya Kumo", "Restaurants", &["Japanese"], "Surry Hills", -33.8860, 151.2110, 4.7, "$$$"),
    listing(4, "Golden Lotus", "Restaurants", &["Chinese"], "Haymarket", -33.8790, 151.2040, 4.2, "$$"),
    listing(5, "Spice Route", "Restaurants", &["Indian"], "Enmore", -33.9000, 151.1730, 4.5, "$$"),
    listing(6, "La Cantina", "Restaurants", &["Mexican"], "Glebe", -33.8790, 151.1850, 4.1, "$$"),
    listing(7, "Pho Saigon", "Restaurants", &["Vietnamese"], "Marrickville", -33.9110, 151.1550, 4.3, "$"),
    listing(8, "Olive & Feta", "Restaurants", &["Greek"], "Marrickville", -33.9105, 151.1560, 4.0, "$$"),
    listing(9, "Bar Piccolo", "Cafes", &["Italian"], "Darlinghurst", -33.8790, 151.2190, 4.5, "$"),
    listing(10, "Morning Ritual", "Cafes", &[], "Redfern", -33.8930, 151.2040, 4.6, "$"),
    listing(11, "Night Market Canteen", "Restaurants", &["Thai", "Vietnamese"], "Chinatown", -33.8785, 151.2035, 4.2, "$"),
    listing(12, "Umami House", "Restaurants", &["Japanese", "Chinese"], "Chatswood", -33.7960, 151.1830, 4.4, "$$$"),
    listing(13, "Taverna Blue", "Restaurants", &["Greek"], "Parramatta", -33.8150, 151.0030, 3.9, "$$"),
    listing(14, "The Cellar Door", "Bars", &[], "Paddington", -33.8840, 151.2260, 4.3, "$$$"),
    listing(15, "Curry Leaf", "Restaurants", &["Indian"], "Harris Park", -33.8230, 151.0090, 4.6, "$"),
];

pub const STAYS: &[Listing] = &[
    listing(101, "Harbour View Hotel", "Stays", &["Hotel"], "The Rocks", -33.8590, 151.2080, 4.5, "$$$"),
    listing(102, "Newtown Loft", "Stays", &["Apartment"], "Newtown", -33.8975, 151.1785, 4.7, "$$"),
    listing(103, "Bondi Beach House", "Stays", &["Villa"], "Bondi", -33.8915, 151.2767, 4.8, "$$$$"),
    listing(104, "Glebe Guest Rooms", "Stays", &["Guest house"], "Glebe", -33.8795, 151.1855, 4.1, "$"),
    listing(105, "Blue Mountains Cabin", "Stays", &["Cabin"], "Katoomba", -33.7140, 150.3110, 4.9, "$$"),
    listing(106, "Surry Hills Studio", "Stays", &["Apartment"], "Surry Hills", -33.8865, 151.2115, 4.3, "$$"),
    listing(107, "Manly Wharf Hotel", "Stays", &["Hotel"], "Manly", -33.7990, 151.2850, 4.4, "$$$"),
    listing(108, "Parramatta Suites", "Stays", &["Apartment"], "Parramatta", -33.8155, 151.0035, 4.0, "$$"),
    listing(109, "Coogee Bay Villa", "Stays", &["Villa"], "Coogee", -33.9200, 151.2570, 4.6, "$$$$"),
    listing(110, "Balmain Cottage", "Stays", &["Guest house"], "Balmain", -33.8590, 151.1790, 4.2, "$$"),
    listing(111, "Cronulla Beach Cabin", "Stays", &["Cabin"], "Cronulla", -34.0550, 151.1520, 4.1, "$"),
    listing(112, "Chatswood Tower Hotel", "Stays", &["Hotel"], "Chatswood", -33.7965, 151.1835, 4.0, "$$"),
    listing(113, "Wollongong Seaside", "Stays", &["Apartment"], "Wollongong", -34.4250, 150.8930, 4.3, "$$"),
];

pub const PROPERTIES: &[Listing] = &[
    listing(201, "Terrace on King St", "Real Estate", &["House"], "Newtown", -33.8980, 151.1775, 4.0, "$1.6m"),
    listing(202, "Harbourside Apartment", "Real Estate", &["Apartment"], "Pyrmont", -33.8700, 151.1940, 4.0, "$1.1m"),
    listing(203, "Family Home Ryde", "Real Estate", &["House"], "Ryde", -33.8150, 151.1050, 4.0, "$1.9m"),
    listing(204, "Townhouse Marrickville", "Real Estate", &["Townhouse"], "Marrickville", -33.9115, 151.1545, 4.0, "$1.3m"),
    listing(205, "Penthouse Barangaroo", "Real Estate", &["Apartment"], "Barangaroo", -33.8610, 151.2010, 4.0, "$6.5m"),
    listing(206, "Acreage Dural", "Real Estate", &["Land"], "Dural", -33.6830, 151.0290, 4.0, "$3.2m"),
    listing(207, "Unit Parramatta", "Real Estate", &["Apartment"], "Parramatta", -33.8145, 151.0025, 4.0, "$620k"),
    listing(208, "Cottage Katoomba", "Real Estate", &["House"], "Katoomba", -33.7145, 150.3115, 4.0, "$890k"),
    listing(209, "Beach House Avalon", "Real Estate", &["House"], "Avalon", -33.6360, 151.3290, 4.0, "$3.8m"),
    listing(210, "Studio Ultimo", "Real Estate", &["Apartment"], "Ultimo", -33.8840, 151.1970, 4.0, "$540k"),
    listing(211, "Townhouse Penrith", "Real Estate", &["Townhouse"], "Penrith", -33.7510, 150.6940, 4.0, "$780k"),
    listing(212, "Vacant Block Camden", "Real Estate", &["Land"], "Camden", -34.0540, 150.6960, 4.0, "$450k"),
    listing(213, "Villa Wollongong", "Real Estate", &["House"], "Wollongong", -34.4255, 150.8935, 4.0, "$1.2m"),
];

pub fn demo_listings(form: SearchForm) -> &'static [Listing] {
    match form {
        SearchForm::Restaurant => RESTAURANTS,
        SearchForm::Stay => STAYS,
        SearchForm::RealEstate => PROPERTIES,
    }
}
