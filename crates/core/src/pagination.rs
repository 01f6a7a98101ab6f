//! Page window arithmetic and the page envelope
//!
//! Pure functions for turning a ranked list length, a page size and a
//! 1-indexed page number into the slice of the list that belongs to the page.
//! A page that starts past the end of the list is a normal, empty page rather
//! than an error.

use std::ops::Range;

use serde::{Deserialize, Serialize};

/// Error type for pagination operations
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaginationError {
    #[error("Page size must be greater than zero")]
    InvalidLimit,

    #[error("Page numbers start at 1, got {0}")]
    InvalidPage(usize),
}

/// Reject page sizes and page numbers no page can be computed for
pub fn validate_request(limit: usize, page: usize) -> Result<(), PaginationError> {
    if limit == 0 {
        return Err(PaginationError::InvalidLimit);
    }
    if page == 0 {
        return Err(PaginationError::InvalidPage(page));
    }
    Ok(())
}

/// Calculate the index range of `page` within a list of `total_items`.
///
/// Returns `Ok(None)` when the page starts at or beyond the end of the list,
/// and the range clamped to `total_items` otherwise.
pub fn page_window(
    total_items: usize,
    limit: usize,
    page: usize,
) -> Result<Option<Range<usize>>, PaginationError> {
    validate_request(limit, page)?;

    // An offset that does not fit in usize is necessarily past the end.
    let Some(start) = (page - 1).checked_mul(limit) else {
        return Ok(None);
    };
    if start >= total_items {
        return Ok(None);
    }

    let end = start.saturating_add(limit).min(total_items);
    Ok(Some(start..end))
}

/// One page of hydrated results along with the request that produced it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub limit: usize,
    pub page_number: usize,
    pub total_results: usize,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, limit: usize, page_number: usize, total_results: usize) -> Self {
        Self {
            items,
            limit,
            page_number,
            total_results,
        }
    }

    /// A page that lies beyond the available data
    pub fn empty(limit: usize, page_number: usize, total_results: usize) -> Self {
        Self::new(Vec::new(), limit, page_number, total_results)
    }

    /// Whether requesting `page_number + 1` would return any items
    pub fn has_next_page(&self) -> bool {
        self.page_number.saturating_mul(self.limit) < self.total_results
    }

    pub fn has_previous_page(&self) -> bool {
        self.page_number > 1
    }

    /// Number of non-empty pages for this page size
    pub fn total_pages(&self) -> usize {
        if self.limit == 0 {
            return 0;
        }
        self.total_results.div_ceil(self.limit)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
