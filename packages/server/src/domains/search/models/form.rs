use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domains::search::SearchError;

/// Search form variant. Decides the distance slider limit and which listings
/// route a submitted search lands on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SearchForm {
    Restaurant,
    Stay,
    RealEstate,
}

impl SearchForm {
    pub const ALL: [SearchForm; 3] = [Self::Restaurant, Self::Stay, Self::RealEstate];

    /// Upper bound of the distance slider, in kilometres.
    pub fn distance_limit(self) -> u32 {
        match self {
            Self::Restaurant => 10,
            Self::Stay => 50,
            Self::RealEstate => 200,
        }
    }

    pub fn listings_route(self) -> &'static str {
        match self {
            Self::Restaurant => "/listing-restaurant-map",
            Self::Stay => "/listing-stay-map",
            Self::RealEstate => "/listing-real-estate-map",
        }
    }

    /// Noun used in listing headings when no category was chosen.
    pub fn default_heading(self) -> &'static str {
        match self {
            Self::Restaurant => "Restaurants",
            Self::Stay => "Stays",
            Self::RealEstate => "Properties",
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            Self::Restaurant => "restaurant",
            Self::Stay => "stay",
            Self::RealEstate => "real-estate",
        }
    }
}

impl fmt::Display for SearchForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for SearchForm {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|form| form.slug().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| SearchError::UnknownForm(s.to_string()))
    }
}
