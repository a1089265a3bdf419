use crate::paging::DEFAULT_PAGE_SIZE;

use serde::Deserialize;

/// The combined filtering, ordering, and paging input, typically sourced
/// from an HTTP query string.
///
/// Wire shape is five optional parameters: `Page`, `PageSize`, `SortBy`,
/// `IsSortAsc`, `Filter`. Absent parameters take defaults, and
/// [`GridifyQuery::default`] stands in for an absent query as a whole.
/// Non-positive `page`/`page_size` are not errors; paging silently
/// substitutes the defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct GridifyQuery {
    pub page: i64,

    pub page_size: i64,

    pub sort_by: Option<String>,

    pub is_sort_asc: bool,

    pub filter: Option<String>,
}

impl Default for GridifyQuery {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            sort_by: None,
            is_sort_asc: true,
            filter: None,
        }
    }
}

impl GridifyQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the filter expression.
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    /// Sets the sort field and direction.
    pub fn with_sort(mut self, sort_by: impl Into<String>, ascending: bool) -> Self {
        self.sort_by = Some(sort_by.into());
        self.is_sort_asc = ascending;
        self
    }

    /// Sets the paging window.
    pub fn with_page(mut self, page: i64, page_size: i64) -> Self {
        self.page = page;
        self.page_size = page_size;
        self
    }

    /// The page size that paging actually applies.
    pub fn effective_page_size(&self) -> usize {
        if self.page_size > 0 {
            self.page_size as usize
        } else {
            DEFAULT_PAGE_SIZE as usize
        }
    }

    /// Number of records the paging window skips.
    pub fn window_skip(&self) -> usize {
        (self.page.max(1) as usize - 1) * self.effective_page_size()
    }

    /// Whether a non-empty filter is present. Empty and whitespace-only
    /// filters degrade to "no filter".
    pub fn has_filter(&self) -> bool {
        self.filter
            .as_deref()
            .is_some_and(|filter| !filter.trim().is_empty())
    }

    /// Whether a non-empty sort field is present.
    pub fn has_sort(&self) -> bool {
        self.sort_by
            .as_deref()
            .is_some_and(|sort_by| !sort_by.is_empty())
    }
}
