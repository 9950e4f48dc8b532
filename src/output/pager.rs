//! Pagination over a list of solutions

use std::ops::Range;

/// Window of `page_size` items over a list of `total` items
///
/// Page starts are always multiples of the page size; moving past either end clamps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    total: usize,
    page_size: usize,
    start: usize,
}

impl Pager {
    /// Pager on the first page; a zero page size is treated as one
    #[must_use]
    pub fn new(total: usize, page_size: usize) -> Self {
        Self {
            total,
            page_size: page_size.max(1),
            start: 0,
        }
    }

    /// Jump to a 1-based page number, clamped to the last page
    #[must_use]
    pub fn at_page(mut self, page: usize) -> Self {
        let index = page.saturating_sub(1).min(self.page_count().saturating_sub(1));
        self.start = index * self.page_size;
        self
    }

    /// Index range of the current page
    #[must_use]
    pub fn range(&self) -> Range<usize> {
        self.start..(self.start + self.page_size).min(self.total)
    }

    /// Slice out the current page
    #[must_use]
    pub fn page<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let range = self.range();
        &items[range.start.min(items.len())..range.end.min(items.len())]
    }

    /// Advance one page; returns false if already on the last page
    pub fn next_page(&mut self) -> bool {
        if self.page_number() >= self.page_count() {
            return false;
        }
        self.start += self.page_size;
        true
    }

    /// Go back one page; returns false if already on the first page
    pub fn previous_page(&mut self) -> bool {
        if self.start == 0 {
            return false;
        }
        self.start = self.start.saturating_sub(self.page_size);
        true
    }

    /// 1-based number of the current page
    #[must_use]
    pub const fn page_number(&self) -> usize {
        self.start / self.page_size + 1
    }

    /// Number of pages, at least one
    #[must_use]
    pub fn page_count(&self) -> usize {
        self.total.div_ceil(self.page_size).max(1)
    }

    #[must_use]
    pub const fn total(&self) -> usize {
        self.total
    }
}
