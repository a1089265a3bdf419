use serde::Serialize;

/// Page size substituted when a query carries a non-positive one.
pub const DEFAULT_PAGE_SIZE: i64 = 20;

/// One page of results plus the total number of records that matched the
/// filter before windowing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Paging<T> {
    pub total_items: usize,

    pub items: Vec<T>,
}

impl<T> Paging<T> {
    pub fn new(total_items: usize, items: Vec<T>) -> Self {
        Self { total_items, items }
    }
}
