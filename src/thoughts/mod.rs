//! Thought Listing Module
//!
//! The paginated read path and the read-through page cache in front of it.

mod executor;
mod feed;
mod pagination;

pub use executor::PageExecutor;
pub use feed::{PageCache, ThoughtFeed};
pub use pagination::{Pagination, DEFAULT_LIMIT, DEFAULT_PAGE};

#[cfg(test)]
pub(crate) mod test_support;
