use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::listing::PropertyType;

/// Coarse search intent: where, when and how many.
///
/// Round-trips through a URL query string (see [`crate::query`]) and is
/// persisted verbatim in the recent-searches history, so fields keep the
/// external camelCase names.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SearchParams {
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub check_in: Option<NaiveDate>,
    #[serde(default)]
    pub check_out: Option<NaiveDate>,
    #[serde(default)]
    pub guests: Option<u32>,
}

/// Fine-grained result filters. An empty list or `None` means the
/// corresponding step is skipped entirely; `price_min <= price_max` is the
/// caller's invariant, not the codec's.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FilterParams {
    #[serde(default)]
    pub price_min: Option<i64>,
    #[serde(default)]
    pub price_max: Option<i64>,
    #[serde(default, rename = "type")]
    pub property_types: Vec<PropertyType>,
    #[serde(default)]
    pub min_rating: Option<f64>,
    #[serde(default)]
    pub amenities: Vec<String>,
    #[serde(default)]
    pub instant_book: bool,
}

impl FilterParams {
    pub fn is_empty(&self) -> bool {
        self.price_min.is_none()
            && self.price_max.is_none()
            && self.property_types.is_empty()
            && self.min_rating.is_none()
            && self.amenities.is_empty()
            && !self.instant_book
    }
}

/// Result ordering. `Recommended` keeps catalog order untouched.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SortOption {
    #[default]
    Recommended,
    PriceAsc,
    Rating,
    Reviews,
}

impl SortOption {
    pub fn label(&self) -> &'static str {
        match self {
            SortOption::Recommended => "Recommended",
            SortOption::PriceAsc => "Price: low to high",
            SortOption::Rating => "Rating",
            SortOption::Reviews => "Most reviewed",
        }
    }
}
