//! Cache key derivation for listing pages.

use crate::thoughts::Pagination;

/// Builds the cache key for a listing page.
///
/// Takes the effective pagination, so an absent `page` and `page=1` share a key.
pub fn page_key(pagination: &Pagination) -> String {
    format!(
        "thoughts-page-{}-limit-{}",
        pagination.page, pagination.limit
    )
}
