use thiserror::Error as ThisError;

///
/// PageError
///

#[derive(Debug, Eq, PartialEq, ThisError)]
pub enum PageError {
    #[error("page size must be greater than zero")]
    InvalidPageSize,
}

///
/// PageSpec
///
/// Validated pagination request. `page` is 1-indexed; a requested page of
/// zero is normalized to 1 rather than rejected.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PageSpec {
    page: u32,
    size: u32,
}

impl PageSpec {
    pub const fn new(page: u32, size: u32) -> Result<Self, PageError> {
        if size == 0 {
            return Err(PageError::InvalidPageSize);
        }

        Ok(Self {
            page: if page == 0 { 1 } else { page },
            size,
        })
    }

    #[must_use]
    pub const fn page(&self) -> u32 {
        self.page
    }

    #[must_use]
    pub const fn size(&self) -> u32 {
        self.size
    }

    /// Resolve the slice of a filtered result set of `total_count` rows.
    ///
    /// The requested page is clamped into `[1, total_pages]`; an empty
    /// result set resolves to page 1 with an empty slice.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn bounds(&self, total_count: usize) -> PageBounds {
        let size = self.size as usize;
        let total_pages = total_count.div_ceil(size);
        let last_page = if total_pages == 0 {
            1
        } else if total_pages > u32::MAX as usize {
            u32::MAX
        } else {
            total_pages as u32
        };

        let page = if self.page > last_page {
            last_page
        } else {
            self.page
        };

        let start = min((page as usize - 1).saturating_mul(size), total_count);
        let end = min(start.saturating_add(size), total_count);

        PageBounds {
            page,
            total_pages,
            start,
            end,
        }
    }
}

const fn min(a: usize, b: usize) -> usize {
    if a < b { a } else { b }
}

///
/// PageBounds
///
/// Resolved window over a filtered, reordered result set.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PageBounds {
    /// Effective page after clamping.
    pub page: u32,
    pub total_pages: usize,
    /// Inclusive start index into the filtered rows.
    pub start: usize,
    /// Exclusive end index into the filtered rows.
    pub end: usize,
}

///
/// TESTS
///
