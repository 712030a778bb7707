//! The filter/sort/pagination pipeline over the listing collection.
//!
//! A pure function of its inputs: nothing is mutated, every call recomputes
//! from the full collection. Filter steps run in a fixed order; each step is
//! skipped when its parameter is absent or empty.

use serde::Serialize;

use stay_core::{FilterParams, Listing, SearchParams, SortOption};

/// One page of search results plus the totals the pager needs.
#[derive(Debug, Clone, Serialize)]
pub struct SearchPage {
    pub items: Vec<Listing>,
    pub total_count: usize,
    pub total_pages: usize,
}

/// Filter, sort and paginate `listings`. `page` is 1-based; a page past the
/// end yields an empty `items` rather than an error.
pub fn search(
    listings: &[Listing],
    params: &SearchParams,
    filters: &FilterParams,
    sort: SortOption,
    page: usize,
    page_size: usize,
) -> SearchPage {
    let mut result: Vec<&Listing> = listings.iter().collect();

    if let Some(location) = params.location.as_deref().filter(|l| !l.is_empty()) {
        let needle = location.to_lowercase();
        result.retain(|l| {
            l.city.to_lowercase().contains(&needle) || l.country.to_lowercase().contains(&needle)
        });
    }
    if let Some(guests) = params.guests {
        result.retain(|l| l.max_guests >= guests);
    }
    if let Some(price_min) = filters.price_min {
        result.retain(|l| l.price_per_night >= price_min);
    }
    if let Some(price_max) = filters.price_max {
        result.retain(|l| l.price_per_night <= price_max);
    }
    if !filters.property_types.is_empty() {
        result.retain(|l| filters.property_types.contains(&l.property_type));
    }
    if let Some(min_rating) = filters.min_rating {
        result.retain(|l| l.rating >= min_rating);
    }
    if !filters.amenities.is_empty() {
        result.retain(|l| filters.amenities.iter().all(|a| l.has_amenity(a)));
    }
    if filters.instant_book {
        result.retain(|l| l.instant_book);
    }

    // Vec::sort_by is stable, so equal keys keep their prior relative order
    // in every mode. Recommended is the catalog order itself.
    match sort {
        SortOption::Recommended => {}
        SortOption::PriceAsc => result.sort_by_key(|l| l.price_per_night),
        SortOption::Rating => result.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
        SortOption::Reviews => result.sort_by(|a, b| b.reviews_count.cmp(&a.reviews_count)),
    }

    let total_count = result.len();
    let total_pages = if page_size == 0 {
        0
    } else {
        total_count.div_ceil(page_size)
    };
    let start = page.saturating_sub(1).saturating_mul(page_size);
    let items = result
        .into_iter()
        .skip(start)
        .take(page_size)
        .cloned()
        .collect();

    SearchPage {
        items,
        total_count,
        total_pages,
    }
}
