//! Normalization of raw pagination parameters.

use tracing::debug;

use crate::models::PageQuery;

/// Page used when none (or garbage) is supplied
pub const DEFAULT_PAGE: u64 = 1;

/// Page size used when none (or garbage) is supplied
pub const DEFAULT_LIMIT: u64 = 10;

// == Pagination ==
/// Effective pagination: both fields are always >= 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pagination {
    pub page: u64,
    pub limit: u64,
}

impl Pagination {
    /// Builds a pagination, replacing zeros with the defaults.
    pub fn new(page: u64, limit: u64) -> Self {
        Self {
            page: if page == 0 { DEFAULT_PAGE } else { page },
            limit: if limit == 0 { DEFAULT_LIMIT } else { limit },
        }
    }

    /// Normalizes raw query values.
    ///
    /// Absent, non-numeric, zero or negative values fall back to the defaults
    /// rather than producing an error.
    pub fn from_query(query: &PageQuery) -> Self {
        let page = parse_positive(query.page.as_deref());
        let limit = parse_positive(query.limit.as_deref());

        if (query.page.is_some() && page.is_none()) || (query.limit.is_some() && limit.is_none()) {
            debug!(
                page = ?query.page,
                limit = ?query.limit,
                "invalid pagination input, using defaults"
            );
        }

        Self {
            page: page.unwrap_or(DEFAULT_PAGE),
            limit: limit.unwrap_or(DEFAULT_LIMIT),
        }
    }

    /// Number of records before the first item of this page.
    pub fn skip(&self) -> u64 {
        self.page.saturating_sub(1).saturating_mul(self.limit)
    }

    /// Page count for a collection of `total` items.
    pub fn total_pages(&self, total: u64) -> u64 {
        total.div_ceil(self.limit)
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

fn parse_positive(raw: Option<&str>) -> Option<u64> {
    raw?.trim().parse::<u64>().ok().filter(|value| *value >= 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(page: Option<&str>, limit: Option<&str>) -> PageQuery {
        PageQuery {
            page: page.map(str::to_string),
            limit: limit.map(str::to_string),
        }
    }

    #[test]
    fn test_defaults_when_absent() {
        let pagination = Pagination::from_query(&query(None, None));
        assert_eq!(pagination, Pagination::default());
        assert_eq!(pagination.page, 1);
        assert_eq!(pagination.limit, 10);
    }

    #[test]
    fn test_explicit_values() {
        let pagination = Pagination::from_query(&query(Some("3"), Some(" 25 ")));
        assert_eq!(pagination, Pagination::new(3, 25));
    }

    #[test]
    fn test_invalid_values_default_independently() {
        assert_eq!(
            Pagination::from_query(&query(Some("abc"), Some("5"))),
            Pagination::new(1, 5)
        );
        assert_eq!(
            Pagination::from_query(&query(Some("4"), Some("0"))),
            Pagination::new(4, 10)
        );
        assert_eq!(
            Pagination::from_query(&query(Some("-2"), Some(""))),
            Pagination::default()
        );
        assert_eq!(
            Pagination::from_query(&query(Some("2.5"), Some("1e3"))),
            Pagination::default()
        );
    }

    #[test]
    fn test_new_replaces_zeros() {
        assert_eq!(Pagination::new(0, 0), Pagination::default());
    }

    #[test]
    fn test_skip() {
        assert_eq!(Pagination::new(1, 10).skip(), 0);
        assert_eq!(Pagination::new(2, 10).skip(), 10);
        assert_eq!(Pagination::new(5, 7).skip(), 28);
        assert_eq!(Pagination::new(u64::MAX, u64::MAX).skip(), u64::MAX);
    }

    #[test]
    fn test_total_pages_rounds_up() {
        let pagination = Pagination::new(1, 10);
        assert_eq!(pagination.total_pages(0), 0);
        assert_eq!(pagination.total_pages(10), 1);
        assert_eq!(pagination.total_pages(25), 3);
        assert_eq!(pagination.total_pages(30), 3);
    }
}
