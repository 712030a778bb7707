use chrono::NaiveDate;
use serde::Serialize;

use stay_core::dates::nights_between;
use stay_core::Listing;

/// Per-stay price breakdown, in whole currency units.
///
/// `nights` (and with it `subtotal`) may come out zero or negative for an
/// invalid range; callers reject non-positive stays before a booking is
/// committed, the quote itself just reflects its inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PriceQuote {
    pub nights: i64,
    pub subtotal: i64,
    pub cleaning: i64,
    pub service: i64,
    pub discount: i64,
    pub total: i64,
}

/// Compute the quote for a stay at `listing`. Cleaning and service fees are
/// flat per stay; the discount applies to the nightly subtotal only.
pub fn quote(listing: &Listing, check_in: NaiveDate, check_out: NaiveDate) -> PriceQuote {
    let nights = nights_between(check_in, check_out);
    let subtotal = listing.price_per_night * nights;
    let cleaning = listing.fees.cleaning;
    let service = listing.fees.service;
    let discount = if listing.fees.discount_percent > 0 {
        subtotal * i64::from(listing.fees.discount_percent) / 100
    } else {
        0
    };
    PriceQuote {
        nights,
        subtotal,
        cleaning,
        service,
        discount,
        total: subtotal + cleaning + service - discount,
    }
}
