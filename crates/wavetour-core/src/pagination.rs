//! Page/offset pagination math and response metadata.
//!
//! Pagination is 1-indexed: `page=1` is the first page. The count query and
//! the fetch query are separate round-trips with no shared snapshot, so the
//! reported `total` reflects the table state at count time. A page past the
//! last page is not an error; it yields an empty item list with truthful
//! metadata.

use serde::{Deserialize, Serialize};

/// A validated pagination request (1-indexed page, bounded page size).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: i64,
    pub page_size: i64,
}

impl PageRequest {
    /// Translate the request into the OFFSET/LIMIT pair the store executes.
    ///
    /// The offset saturates at `i64::MAX`: an absurdly large `page` is
    /// still a valid request for a page past the end, which must come
    /// back as an empty list rather than an arithmetic panic or a
    /// negative OFFSET the database would reject.
    pub fn window(&self) -> PageWindow {
        PageWindow {
            offset: self
                .page
                .saturating_sub(1)
                .saturating_mul(self.page_size),
            limit: self.page_size,
        }
    }

    /// Build response metadata from this request and a total row count.
    pub fn meta(&self, total: i64) -> PaginationMeta {
        PaginationMeta {
            page: self.page,
            page_size: self.page_size,
            total,
            total_pages: total_pages(total, self.page_size),
        }
    }
}

/// OFFSET/LIMIT pair passed to the query executor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub offset: i64,
    pub limit: i64,
}

/// Pagination metadata block included in every list response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PaginationMeta {
    /// Requested page number (echoed back exactly).
    pub page: i64,
    /// Requested page size (echoed back exactly).
    pub page_size: i64,
    /// Total rows matching the filters, independent of the page.
    pub total: i64,
    /// ceil(total / page_size); 0 when no rows match.
    pub total_pages: i64,
}

/// ceil(total / page_size), with 0 pages for an empty result set.
fn total_pages(total: i64, page_size: i64) -> i64 {
    if total <= 0 {
        0
    } else {
        (total + page_size - 1) / page_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_page_window() {
        let req = PageRequest { page: 1, page_size: 50 };
        assert_eq!(req.window(), PageWindow { offset: 0, limit: 50 });
    }

    #[test]
    fn test_second_page_window() {
        let req = PageRequest { page: 2, page_size: 25 };
        assert_eq!(req.window(), PageWindow { offset: 25, limit: 25 });
    }

    #[test]
    fn test_meta_echoes_request() {
        let req = PageRequest { page: 2, page_size: 25 };
        let meta = req.meta(100);
        assert_eq!(meta.page, 2);
        assert_eq!(meta.page_size, 25);
        assert_eq!(meta.total, 100);
        assert_eq!(meta.total_pages, 4);
    }

    #[test]
    fn test_total_pages_rounds_up() {
        let req = PageRequest { page: 1, page_size: 50 };
        assert_eq!(req.meta(125).total_pages, 3);
        assert_eq!(req.meta(101).total_pages, 3);
        assert_eq!(req.meta(150).total_pages, 3);
    }

    #[test]
    fn test_total_pages_zero_iff_total_zero() {
        let req = PageRequest { page: 1, page_size: 50 };
        assert_eq!(req.meta(0).total_pages, 0);
        assert_eq!(req.meta(1).total_pages, 1);
    }

    #[test]
    fn test_page_beyond_results_keeps_true_total() {
        // Page 100 of 10 rows: the window is far past the data, but the
        // metadata still reports the true total.
        let req = PageRequest { page: 100, page_size: 50 };
        assert_eq!(req.window().offset, 4950);
        let meta = req.meta(10);
        assert_eq!(meta.total, 10);
        assert_eq!(meta.total_pages, 1);
    }

    #[test]
    fn test_huge_page_saturates_instead_of_overflowing() {
        // i64::MAX pages of 500 rows overflows a naive (page-1)*page_size;
        // the window must clamp, never panic or go negative.
        let req = PageRequest { page: i64::MAX, page_size: 500 };
        let window = req.window();
        assert_eq!(window.offset, i64::MAX);
        assert_eq!(window.limit, 500);

        let meta = req.meta(10);
        assert_eq!(meta.page, i64::MAX);
        assert_eq!(meta.total, 10);
    }

    #[test]
    fn test_page_size_one() {
        let req = PageRequest { page: 3, page_size: 1 };
        assert_eq!(req.window(), PageWindow { offset: 2, limit: 1 });
        assert_eq!(req.meta(3).total_pages, 3);
    }

    #[test]
    fn test_meta_serialization_shape() {
        let meta = PageRequest { page: 2, page_size: 25 }.meta(100);
        let json = serde_json::to_value(&meta).unwrap();
        assert_eq!(json["page"], 2);
        assert_eq!(json["page_size"], 25);
        assert_eq!(json["total"], 100);
        assert_eq!(json["total_pages"], 4);
    }
}
