//! Cursor-based windows over the raw rows.

use crate::core::{
    constants::PAGE_SIZE,
    data::{Dataset, Trip},
};

/// Up to [`PAGE_SIZE`] rows starting at `start`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Page<'a> {
    pub rows: &'a [Trip],
    /// Index of the first row in the dataset.
    pub start: usize,
    /// Where the next request should begin.
    pub cursor: usize,
    total: usize,
}

impl Page<'_> {
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// No rows remain after this page.
    #[inline]
    #[must_use]
    pub fn is_last(&self) -> bool {
        self.cursor >= self.total
    }
}

/// Rows `[cursor, cursor + PAGE_SIZE)`, clipped to the dataset.
///
/// Past the end the page is empty and the cursor stays at the row count.
#[must_use]
pub fn next_page(dataset: &Dataset, cursor: usize) -> Page<'_> {
    let total = dataset.len();
    let start = cursor.min(total);
    let end = start.saturating_add(PAGE_SIZE).min(total);
    Page {
        rows: &dataset.trips[start..end],
        start,
        cursor: end,
        total,
    }
}

/// Iterator over the non-empty pages.
pub struct Pages<'a> {
    dataset: &'a Dataset,
    cursor: usize,
}

#[must_use]
pub fn pages(dataset: &Dataset) -> Pages<'_> {
    Pages { dataset, cursor: 0 }
}

impl<'a> Iterator for Pages<'a> {
    type Item = Page<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let page = next_page(self.dataset, self.cursor);
        if page.is_empty() {
            return None;
        }
        self.cursor = page.cursor;
        Some(page)
    }
}
