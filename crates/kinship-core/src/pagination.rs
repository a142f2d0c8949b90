//! Pagination types for list operations.

use serde::{Deserialize, Serialize};

/// A request for a page of results.
///
/// Pages are 1-indexed: `page = 1` is the first page and
/// `offset = (page - 1) * size`. Each listing resource supplies its own
/// default page size; the maximum is shared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    /// The page number (1-indexed).
    pub page: usize,
    /// The number of items per page.
    pub size: usize,
}

impl PageRequest {
    /// The maximum allowed page size.
    pub const MAX_SIZE: usize = 100;

    /// Creates a new page request.
    ///
    /// A page below 1 is pinned to 1 and the size is clamped to
    /// [1, `MAX_SIZE`].
    #[must_use]
    pub fn new(page: usize, size: usize) -> Self {
        Self {
            page: page.max(1),
            size: size.clamp(1, Self::MAX_SIZE),
        }
    }

    /// Creates a request for the first page with the given size.
    #[must_use]
    pub fn first(size: usize) -> Self {
        Self::new(1, size)
    }

    /// Returns the offset for storage queries.
    #[must_use]
    pub const fn offset(&self) -> usize {
        (self.page - 1) * self.size
    }

    /// Returns the limit for storage queries.
    #[must_use]
    pub const fn limit(&self) -> usize {
        self.size
    }
}
