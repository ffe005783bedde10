//! Per-view browse state
//!
//! A session owns the search query, the selected category, and the reveal
//! cursor. Changing the query or the category always rewinds the cursor to
//! the first page.

use super::pager::Pager;
use super::search::{self, CategoryCounts};
use crate::catalog::{Catalog, Category, Course};

/// Filtered results for one render
#[derive(Debug, Clone)]
pub struct Results<'c> {
    filtered: Vec<&'c Course>,
    pager: Pager,
}

impl<'c> Results<'c> {
    /// The revealed prefix
    pub fn visible(&self) -> &[&'c Course] {
        self.pager.page(&self.filtered)
    }

    pub fn total(&self) -> usize {
        self.filtered.len()
    }

    pub fn has_more(&self) -> bool {
        self.pager.has_more(self.total())
    }

    pub fn remaining(&self) -> usize {
        self.pager.remaining(self.total())
    }

    pub fn is_empty(&self) -> bool {
        self.filtered.is_empty()
    }
}

/// Search, category, and reveal state for one browse view
#[derive(Debug, Clone, Default)]
pub struct BrowseSession {
    query: String,
    category: Category,
    pager: Pager,
}

impl BrowseSession {
    pub fn new(pager: Pager) -> Self {
        Self { query: String::new(), category: Category::All, pager }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn pager(&self) -> &Pager {
        &self.pager
    }

    /// Whether the query contains anything besides whitespace
    pub fn is_searching(&self) -> bool {
        !self.query.trim().is_empty()
    }

    /// Whether either filter narrows the catalog
    pub fn is_filtered(&self) -> bool {
        self.is_searching() || self.category != Category::All
    }

    /// Replace the query; returns true if it changed
    pub fn set_query(&mut self, query: impl Into<String>) -> bool {
        let query = query.into();
        if query == self.query {
            return false;
        }
        tracing::debug!("Search query changed to {:?}", query);
        self.query = query;
        self.pager.reset();
        true
    }

    /// Replace the category; returns true if it changed
    pub fn set_category(&mut self, category: Category) -> bool {
        if category == self.category {
            return false;
        }
        tracing::debug!("Category changed to {}", category);
        self.category = category;
        self.pager.reset();
        true
    }

    /// Current results against `catalog`
    pub fn results<'c>(&self, catalog: &'c Catalog) -> Results<'c> {
        let filtered = search::filter_courses(catalog.courses(), &self.query, self.category);
        Results { filtered, pager: self.pager }
    }

    /// Category counts for the current query
    pub fn counts(&self, catalog: &Catalog) -> CategoryCounts {
        search::category_counts(catalog.courses(), &self.query)
    }

    /// Reveal one more step of results
    pub fn load_more(&mut self, catalog: &Catalog) {
        let total = self.results(catalog).total();
        self.pager.load_more(total);
    }

    /// Reveal every result
    pub fn reveal_all(&mut self, catalog: &Catalog) {
        let total = self.results(catalog).total();
        self.pager.reveal_all(total);
    }
}
