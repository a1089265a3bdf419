use crate::{AsyncQuery, Predicate, Query, Sort};
use gridify_core::Result;

use async_trait::async_trait;

/// An in-memory query source: the trivial witness of the [`Query`] contract.
///
/// Transformations apply eagerly over an owned `Vec`, in call order. With no
/// ordering applied, records keep their source order; the sort is stable, so
/// ties keep it too.
#[derive(Debug, Clone, Default)]
pub struct MemoryQuery<T> {
    records: Vec<T>,
}

impl<T> MemoryQuery<T> {
    pub fn new(records: Vec<T>) -> Self {
        Self { records }
    }
}

impl<T> From<Vec<T>> for MemoryQuery<T> {
    fn from(records: Vec<T>) -> Self {
        Self::new(records)
    }
}

impl<T> FromIterator<T> for MemoryQuery<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<T: 'static> Query for MemoryQuery<T> {
    type Item = T;

    fn filter(mut self, predicate: Predicate<T>) -> Self {
        self.records.retain(|record| predicate.test(record));
        self
    }

    fn order_by(mut self, sort: Sort<T>) -> Self {
        self.records.sort_by(|a, b| sort.compare(a, b));
        self
    }

    fn skip(mut self, count: usize) -> Self {
        if count >= self.records.len() {
            self.records.clear();
        } else {
            self.records.drain(..count);
        }
        self
    }

    fn take(mut self, count: usize) -> Self {
        self.records.truncate(count);
        self
    }

    fn count(&self) -> Result<usize> {
        Ok(self.records.len())
    }

    fn to_list(self) -> Result<Vec<T>> {
        Ok(self.records)
    }
}

#[async_trait]
impl<T: Send + Sync + 'static> AsyncQuery for MemoryQuery<T> {
    async fn count_async(&self) -> Result<usize> {
        self.count()
    }

    async fn to_list_async(self) -> Result<Vec<T>> {
        self.to_list()
    }
}
