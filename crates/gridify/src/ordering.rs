use crate::{mapper::Accessor, FieldMapper};
use gridify_core::{
    stmt::{Direction, OrderBy},
    Error, Result,
};

use std::cmp::Ordering;
use std::fmt;

/// A compiled ordering: a tree-level [`OrderBy`] for backend translators
/// plus a comparator for in-memory sources.
pub struct Sort<T> {
    order_by: OrderBy,
    accessor: Accessor<T>,
}

impl<T> Sort<T> {
    pub fn order_by(&self) -> &OrderBy {
        &self.order_by
    }

    pub fn direction(&self) -> Direction {
        self.order_by.direction
    }

    /// Total comparison between two records.
    ///
    /// Absent values order before any present value ascending (after it,
    /// descending); pairs without a defined ordering compare equal.
    pub fn compare(&self, a: &T, b: &T) -> Ordering {
        let lhs = (self.accessor)(a);
        let rhs = (self.accessor)(b);

        let ordering = match (lhs.is_null(), rhs.is_null()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            (false, false) => lhs.partial_cmp(&rhs).unwrap_or(Ordering::Equal),
        };

        match self.order_by.direction {
            Direction::Asc => ordering,
            Direction::Desc => ordering.reverse(),
        }
    }
}

impl<T> Clone for Sort<T> {
    fn clone(&self) -> Self {
        Self {
            order_by: self.order_by.clone(),
            accessor: self.accessor.clone(),
        }
    }
}

impl<T> fmt::Debug for Sort<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Sort").field(&self.order_by).finish()
    }
}

/// Resolves a sort field through the mapper and compiles an ordering.
///
/// The normaliser, if any, does not participate: ordering reads the raw
/// accessor output.
pub fn compile_ordering<T>(
    sort_by: &str,
    ascending: bool,
    mapper: &FieldMapper<T>,
) -> Result<Sort<T>> {
    let Some(mapping) = mapper.get_map(sort_by) else {
        return Err(Error::unknown_field(sort_by));
    };

    Ok(Sort {
        order_by: OrderBy {
            field: sort_by.to_owned(),
            direction: Direction::from_ascending(ascending),
        },
        accessor: mapping.accessor_arc(),
    })
}
