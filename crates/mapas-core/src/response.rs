//! Module: response
//! Responsibility: paged list view returned to the presentation layer.
//! Does not own: filtering or page resolution (see `engine` and `query`).

use derive_more::IntoIterator;
use serde::Serialize;

///
/// PageView
///
/// One rendered page of a filtered, reordered list.
/// `total_count` counts every row that matched, not just this page.
///

#[derive(Clone, Debug, Eq, IntoIterator, PartialEq, Serialize)]
pub struct PageView<E> {
    #[into_iterator(owned, ref)]
    items: Vec<E>,
    page: u32,
    page_size: u32,
    total_pages: usize,
    total_count: usize,
}

impl<E> PageView<E> {
    #[must_use]
    pub const fn new(
        items: Vec<E>,
        page: u32,
        page_size: u32,
        total_pages: usize,
        total_count: usize,
    ) -> Self {
        Self {
            items,
            page,
            page_size,
            total_pages,
            total_count,
        }
    }

    /// Rows on this page, most recent first.
    #[must_use]
    pub fn items(&self) -> &[E] {
        &self.items
    }

    #[must_use]
    pub fn into_items(self) -> Vec<E> {
        self.items
    }

    /// Effective (clamped) page number, 1-indexed.
    #[must_use]
    pub const fn page(&self) -> u32 {
        self.page
    }

    #[must_use]
    pub const fn page_size(&self) -> u32 {
        self.page_size
    }

    #[must_use]
    pub const fn total_pages(&self) -> usize {
        self.total_pages
    }

    #[must_use]
    pub const fn total_count(&self) -> usize {
        self.total_count
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    //
    // Pagination controls
    //

    #[must_use]
    pub const fn has_prev(&self) -> bool {
        self.page > 1
    }

    #[must_use]
    pub const fn has_next(&self) -> bool {
        (self.page as usize) < self.total_pages
    }

    /// Links for a pagination bar: the first and last page, every page
    /// within `radius` of the current one, and a gap marker wherever pages
    /// are skipped. Empty when there is at most one page.
    #[must_use]
    pub fn window(&self, radius: u32) -> Vec<PageLink> {
        let last = u32::try_from(self.total_pages).unwrap_or(u32::MAX);
        if last <= 1 {
            return Vec::new();
        }

        let lo = self.page.saturating_sub(radius).max(1);
        let hi = self.page.saturating_add(radius).min(last);

        let mut links = Vec::new();
        if lo > 1 {
            links.push(self.link(1));
            if lo > 2 {
                links.push(PageLink::Gap);
            }
        }
        links.extend((lo..=hi).map(|n| self.link(n)));
        if hi < last {
            if hi + 1 < last {
                links.push(PageLink::Gap);
            }
            links.push(self.link(last));
        }

        links
    }

    const fn link(&self, number: u32) -> PageLink {
        PageLink::Page {
            number,
            current: number == self.page,
        }
    }
}

///
/// PageLink
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub enum PageLink {
    Page { number: u32, current: bool },
    Gap,
}

///
/// TESTS
///
