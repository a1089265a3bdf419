use super::Direction;

/// Tree-level ordering specification.
///
/// Backend translators read this; in-memory execution uses the comparator
/// compiled alongside it.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderBy {
    /// DSL name of the field, resolved through a mapper at compile time.
    pub field: String,

    pub direction: Direction,
}
