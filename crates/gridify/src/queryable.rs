use crate::{
    compile_filter, compile_ordering, FieldMapper, Gridifiable, GridifyQuery, Paging, Predicate,
    Sort,
};
use gridify_core::Result;

use async_trait::async_trait;

/// Capability set the applier requires from a query source.
///
/// An in-memory sequence satisfies this trivially ([`crate::MemoryQuery`]);
/// a deferred query builder satisfies it by translating the bound expression
/// trees carried by [`Predicate`] and [`Sort`] into native query form.
pub trait Query: Sized {
    type Item: 'static;

    /// Narrows the query to records satisfying `predicate`.
    fn filter(self, predicate: Predicate<Self::Item>) -> Self;

    /// Orders the query by the compiled sort key.
    fn order_by(self, sort: Sort<Self::Item>) -> Self;

    fn skip(self, count: usize) -> Self;

    fn take(self, count: usize) -> Self;

    /// Materialises the number of records the query would yield.
    fn count(&self) -> Result<usize>;

    /// Materialises the records.
    fn to_list(self) -> Result<Vec<Self::Item>>;
}

/// Async materialisation capability for deferred query sources.
#[async_trait]
pub trait AsyncQuery: Query {
    async fn count_async(&self) -> Result<usize>;

    async fn to_list_async(self) -> Result<Vec<Self::Item>>;
}

/// A windowed query together with the pre-paging record count.
#[derive(Debug)]
pub struct PagedQuery<Q> {
    pub query: Q,

    pub total_items: usize,
}

/// Applies a [`GridifyQuery`] to any [`Query`] source.
///
/// The bare methods build the record type's generated mapper on demand; the
/// `_with` variants take an explicit [`FieldMapper`], which is required
/// whenever the DSL names differ from the record's fields.
///
/// An absent piece of input is never an error: an empty filter, an empty
/// sort field, or a defaulted query degrade to identity transforms.
pub trait GridifyQueryable: Query {
    fn apply_filtering_with(
        self,
        gq: &GridifyQuery,
        mapper: &FieldMapper<Self::Item>,
    ) -> Result<Self> {
        if !gq.has_filter() {
            return Ok(self);
        }

        // has_filter guarantees presence
        let filter = gq.filter.as_deref().unwrap_or_default();
        let predicate = compile_filter(filter, mapper)?;

        Ok(self.filter(predicate))
    }

    fn apply_filtering(self, gq: &GridifyQuery) -> Result<Self>
    where
        Self::Item: Gridifiable,
    {
        self.apply_filtering_with(gq, &Self::Item::field_mapper())
    }

    fn apply_ordering_with(
        self,
        gq: &GridifyQuery,
        mapper: &FieldMapper<Self::Item>,
    ) -> Result<Self> {
        if !gq.has_sort() {
            return Ok(self);
        }

        let sort_by = gq.sort_by.as_deref().unwrap_or_default();
        let sort = compile_ordering(sort_by, gq.is_sort_asc, mapper)?;

        Ok(self.order_by(sort))
    }

    fn apply_ordering(self, gq: &GridifyQuery) -> Result<Self>
    where
        Self::Item: Gridifiable,
    {
        self.apply_ordering_with(gq, &Self::Item::field_mapper())
    }

    /// Applies the `(skip, take)` window. Non-positive `page`/`page_size`
    /// substitute the defaults.
    fn apply_paging(self, gq: &GridifyQuery) -> Self {
        self.skip(gq.window_skip()).take(gq.effective_page_size())
    }

    fn apply_ordering_and_paging_with(
        self,
        gq: &GridifyQuery,
        mapper: &FieldMapper<Self::Item>,
    ) -> Result<Self> {
        Ok(self.apply_ordering_with(gq, mapper)?.apply_paging(gq))
    }

    fn apply_ordering_and_paging(self, gq: &GridifyQuery) -> Result<Self>
    where
        Self::Item: Gridifiable,
    {
        self.apply_ordering_and_paging_with(gq, &Self::Item::field_mapper())
    }

    /// Filter, order, and page, in that order.
    fn apply_everything_with(
        self,
        gq: &GridifyQuery,
        mapper: &FieldMapper<Self::Item>,
    ) -> Result<Self> {
        Ok(self
            .apply_filtering_with(gq, mapper)?
            .apply_ordering_with(gq, mapper)?
            .apply_paging(gq))
    }

    fn apply_everything(self, gq: &GridifyQuery) -> Result<Self>
    where
        Self::Item: Gridifiable,
    {
        self.apply_everything_with(gq, &Self::Item::field_mapper())
    }

    /// Filters and orders, counts the result, then pages it.
    ///
    /// Issues exactly one count against the source on top of the enumeration
    /// the caller will perform on the returned query.
    fn gridify_queryable_with(
        self,
        gq: &GridifyQuery,
        mapper: &FieldMapper<Self::Item>,
    ) -> Result<PagedQuery<Self>> {
        let query = self
            .apply_filtering_with(gq, mapper)?
            .apply_ordering_with(gq, mapper)?;

        let total_items = query.count()?;

        Ok(PagedQuery {
            query: query.apply_paging(gq),
            total_items,
        })
    }

    fn gridify_queryable(self, gq: &GridifyQuery) -> Result<PagedQuery<Self>>
    where
        Self::Item: Gridifiable,
    {
        self.gridify_queryable_with(gq, &Self::Item::field_mapper())
    }
}

impl<Q: Query> GridifyQueryable for Q {}

/// Async counterpart of [`GridifyQueryable::gridify_queryable`]: also
/// materialises the page items.
#[async_trait]
pub trait GridifyAsync: AsyncQuery + Send + Sync
where
    Self::Item: Send,
{
    /// Filters and orders, counts asynchronously, pages, and materialises
    /// the window into a [`Paging`] envelope.
    async fn gridify_async_with(
        self,
        gq: &GridifyQuery,
        mapper: &FieldMapper<Self::Item>,
    ) -> Result<Paging<Self::Item>> {
        let query = self
            .apply_filtering_with(gq, mapper)?
            .apply_ordering_with(gq, mapper)?;

        let total_items = query.count_async().await?;
        let items = query.apply_paging(gq).to_list_async().await?;

        Ok(Paging::new(total_items, items))
    }

    async fn gridify_async(self, gq: &GridifyQuery) -> Result<Paging<Self::Item>>
    where
        Self::Item: Gridifiable,
    {
        let mapper = Self::Item::field_mapper();
        self.gridify_async_with(gq, &mapper).await
    }
}

impl<Q> GridifyAsync for Q
where
    Q: AsyncQuery + Send + Sync,
    Q::Item: Send,
{
}
