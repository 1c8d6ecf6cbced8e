use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{Error, Result};
use crate::models::WishlistId;

static WISHLIST_ID_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"wishlistId=(\d+)").expect("Invalid wishlist id regex"));

/// Parse the wishlist identifier out of a sidebar link target.
pub fn wishlist_id_from_href(href: &str) -> Result<WishlistId> {
    WISHLIST_ID_REGEX
        .captures(href)
        .and_then(|captures| captures.get(1))
        .map(|id| WishlistId(id.as_str().to_string()))
        .ok_or_else(|| Error::WishlistIdPattern(href.to_string()))
}
