//! Shareable wishlist links.
//!
//! The saved-listing id sequence is serialized as a JSON array, base64
//! encoded and carried as the single `shared` query parameter on the
//! fragment route to the wishlist view. Decoding never fails hard: any
//! absent or malformed token means "not a shared view" and yields `None`.
//!
//! Listing ids are assumed URL-safe. A token whose base64 happens to contain
//! `+` comes back from the query parser with that byte as a space and
//! decodes to `None` rather than round-tripping.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use url::form_urlencoded;

pub const SHARED_PARAM: &str = "shared";

pub fn wishlist_share_url(base_url: &str, ids: &[String]) -> String {
    let json = serde_json::to_string(ids).unwrap_or_else(|_| "[]".to_string());
    let token = STANDARD.encode(json);
    format!("{base_url}#/wishlist?{SHARED_PARAM}={token}")
}

pub fn parse_shared_wishlist(query: &str) -> Option<Vec<String>> {
    let token = form_urlencoded::parse(query.trim_start_matches('?').as_bytes())
        .find(|(key, _)| key == SHARED_PARAM)
        .map(|(_, value)| value.into_owned())?;
    let bytes = STANDARD.decode(token.as_bytes()).ok()?;
    serde_json::from_slice(&bytes).ok()
}
