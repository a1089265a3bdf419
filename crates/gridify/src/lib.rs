mod field_value;
pub use field_value::FieldValue;

mod filtering;
pub use filtering::{compile_expr, compile_filter, Predicate};

mod mapper;
pub use mapper::{FieldMapper, Gridifiable, Mapping};

mod memory;
pub use memory::MemoryQuery;

mod ordering;
pub use ordering::{compile_ordering, Sort};

mod paging;
pub use paging::{Paging, DEFAULT_PAGE_SIZE};

mod query;
pub use query::GridifyQuery;

mod queryable;
pub use queryable::{AsyncQuery, GridifyAsync, GridifyQueryable, PagedQuery, Query};

pub use gridify_macros::Gridifiable;

pub use gridify_core::{parse, stmt, Error, Result};

pub use async_trait::async_trait;
