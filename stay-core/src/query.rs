//! Query-string codecs for search and filter parameters.
//!
//! Both codec pairs are pure. Encoding emits only present fields under the
//! fixed key names `location`, `checkIn`, `checkOut`, `guests`, `priceMin`,
//! `priceMax`, `type`, `minRating`, `amenities` and `instantBook`; decoding
//! ignores unknown keys and treats unparseable values as absent.

use std::str::FromStr;

use url::form_urlencoded;

use crate::listing::PropertyType;
use crate::search::{FilterParams, SearchParams};

pub fn encode_search(params: &SearchParams) -> String {
    let mut query = form_urlencoded::Serializer::new(String::new());
    if let Some(location) = params.location.as_deref().filter(|l| !l.is_empty()) {
        query.append_pair("location", location);
    }
    if let Some(check_in) = params.check_in {
        query.append_pair("checkIn", &check_in.to_string());
    }
    if let Some(check_out) = params.check_out {
        query.append_pair("checkOut", &check_out.to_string());
    }
    if let Some(guests) = params.guests {
        query.append_pair("guests", &guests.to_string());
    }
    query.finish()
}

pub fn decode_search(query: &str) -> SearchParams {
    let mut params = SearchParams::default();
    for (key, value) in form_urlencoded::parse(query.trim_start_matches('?').as_bytes()) {
        match key.as_ref() {
            "location" if !value.is_empty() => params.location = Some(value.into_owned()),
            "checkIn" => params.check_in = value.parse().ok(),
            "checkOut" => params.check_out = value.parse().ok(),
            "guests" => params.guests = value.parse().ok(),
            _ => {}
        }
    }
    params
}

pub fn encode_filters(filters: &FilterParams) -> String {
    let mut query = form_urlencoded::Serializer::new(String::new());
    if let Some(price_min) = filters.price_min {
        query.append_pair("priceMin", &price_min.to_string());
    }
    if let Some(price_max) = filters.price_max {
        query.append_pair("priceMax", &price_max.to_string());
    }
    if !filters.property_types.is_empty() {
        let joined = filters
            .property_types
            .iter()
            .map(PropertyType::as_str)
            .collect::<Vec<_>>()
            .join(",");
        query.append_pair("type", &joined);
    }
    if let Some(min_rating) = filters.min_rating {
        query.append_pair("minRating", &min_rating.to_string());
    }
    if !filters.amenities.is_empty() {
        query.append_pair("amenities", &filters.amenities.join(","));
    }
    if filters.instant_book {
        query.append_pair("instantBook", "true");
    }
    query.finish()
}

pub fn decode_filters(query: &str) -> FilterParams {
    let mut filters = FilterParams::default();
    for (key, value) in form_urlencoded::parse(query.trim_start_matches('?').as_bytes()) {
        match key.as_ref() {
            "priceMin" => filters.price_min = value.parse().ok(),
            "priceMax" => filters.price_max = value.parse().ok(),
            "type" => {
                filters.property_types = value
                    .split(',')
                    .filter(|token| !token.is_empty())
                    .filter_map(|token| PropertyType::from_str(token).ok())
                    .collect();
            }
            "minRating" => filters.min_rating = value.parse().ok(),
            "amenities" => {
                filters.amenities = value
                    .split(',')
                    .filter(|token| !token.is_empty())
                    .map(str::to_string)
                    .collect();
            }
            "instantBook" => filters.instant_book = value == "true",
            _ => {}
        }
    }
    filters
}
