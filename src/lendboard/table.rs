//! Caller-owned state of the user table.
//!
//! The presentation layer owns one [`TableState`] and passes it to the
//! query pipeline rather than keeping filters and page numbers in globals.
//! Any change to what is being matched sends the view back to page 1. An
//! explicit page change is clamped to the pages that exist.

use crate::error::Result;
use crate::model::UserRecord;
use crate::query::{self, FilterCriteria, PageWindow, QueryResult};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableState {
    search: String,
    criteria: FilterCriteria,
    window: PageWindow,
}

impl TableState {
    pub fn new(items_per_page: usize) -> Result<Self> {
        Ok(Self {
            window: PageWindow::new(1, items_per_page)?,
            ..Default::default()
        })
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn window(&self) -> PageWindow {
        self.window
    }

    pub fn current_page(&self) -> usize {
        self.window.current_page
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        let term = term.into();
        if term != self.search {
            self.search = term;
            self.window.current_page = 1;
        }
    }

    pub fn apply_filters(&mut self, criteria: FilterCriteria) {
        self.criteria = criteria;
        self.window.current_page = 1;
    }

    /// Clears the column filters. The search term belongs to the navbar and is kept.
    pub fn reset_filters(&mut self) {
        self.apply_filters(FilterCriteria::default());
    }

    /// Moves to `page`, clamped to `[1, max(1, total_pages)]`.
    pub fn go_to_page(&mut self, page: usize, total_pages: usize) {
        self.window.current_page = PageWindow::clamp_page(page, total_pages);
    }

    /// Changes the page size without touching the current page. A page that
    /// falls off the end simply renders empty until the caller clamps it.
    pub fn set_items_per_page(&mut self, items_per_page: usize) -> Result<()> {
        self.window.set_items_per_page(items_per_page)
    }

    pub fn query<'a>(&self, users: &'a [UserRecord]) -> QueryResult<'a> {
        query::run(users, &self.search, &self.criteria, self.window)
    }
}
