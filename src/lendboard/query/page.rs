use crate::error::{DashError, Result};
use serde::{Deserialize, Serialize};

pub const DEFAULT_ITEMS_PER_PAGE: usize = 10;

/// Which contiguous slice of the filtered collection is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageWindow {
    /// 1-based.
    pub current_page: usize,
    items_per_page: usize,
}

impl Default for PageWindow {
    fn default() -> Self {
        Self {
            current_page: 1,
            items_per_page: DEFAULT_ITEMS_PER_PAGE,
        }
    }
}

impl PageWindow {
    pub fn new(current_page: usize, items_per_page: usize) -> Result<Self> {
        if items_per_page == 0 {
            return Err(DashError::InvalidPageSize);
        }
        Ok(Self {
            current_page,
            items_per_page,
        })
    }

    pub fn items_per_page(&self) -> usize {
        self.items_per_page
    }

    pub fn set_items_per_page(&mut self, items_per_page: usize) -> Result<()> {
        if items_per_page == 0 {
            return Err(DashError::InvalidPageSize);
        }
        self.items_per_page = items_per_page;
        Ok(())
    }

    /// Offset of the first item on the current page. Page 0 behaves as page 1.
    pub fn offset(&self) -> usize {
        self.current_page
            .saturating_sub(1)
            .saturating_mul(self.items_per_page)
    }

    pub fn total_pages(&self, total_items: usize) -> usize {
        total_items.div_ceil(self.items_per_page)
    }

    /// The current page's slice of `items`, clipped to its bounds.
    /// Pages past the end yield an empty slice.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = self.offset().min(items.len());
        let end = start.saturating_add(self.items_per_page).min(items.len());
        &items[start..end]
    }

    /// Clamps `page` into `[1, max(1, total_pages)]`.
    pub fn clamp_page(page: usize, total_pages: usize) -> usize {
        page.clamp(1, total_pages.max(1))
    }

    /// 1-based index range of the items shown, for "Showing 11-20" style footers.
    /// `None` when the page is empty.
    pub fn shown_range(&self, total_items: usize) -> Option<(usize, usize)> {
        let start = self.offset();
        if start >= total_items {
            return None;
        }
        let end = (start + self.items_per_page).min(total_items);
        Some((start + 1, end))
    }
}
