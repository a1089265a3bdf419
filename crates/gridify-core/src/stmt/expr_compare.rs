use super::*;

use std::fmt;

/// A single `field OP value` clause.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprCompare {
    /// DSL name of the field, resolved through a mapper at compile time.
    pub field: String,

    pub op: CompareOp,

    /// Right-hand literal. The parser always produces `Value::String` (the
    /// raw text); the predicate compiler re-binds it to the mapping's target
    /// type.
    pub rhs: Value,
}

impl Expr {
    pub fn compare(field: impl Into<String>, op: CompareOp, rhs: impl Into<Value>) -> Self {
        ExprCompare {
            field: field.into(),
            op,
            rhs: rhs.into(),
        }
        .into()
    }

    pub fn eq(field: impl Into<String>, rhs: impl Into<Value>) -> Self {
        Self::compare(field, CompareOp::Eq, rhs)
    }

    pub fn ne(field: impl Into<String>, rhs: impl Into<Value>) -> Self {
        Self::compare(field, CompareOp::Ne, rhs)
    }

    pub fn gt(field: impl Into<String>, rhs: impl Into<Value>) -> Self {
        Self::compare(field, CompareOp::Gt, rhs)
    }

    pub fn lt(field: impl Into<String>, rhs: impl Into<Value>) -> Self {
        Self::compare(field, CompareOp::Lt, rhs)
    }

    pub fn ge(field: impl Into<String>, rhs: impl Into<Value>) -> Self {
        Self::compare(field, CompareOp::Ge, rhs)
    }

    pub fn le(field: impl Into<String>, rhs: impl Into<Value>) -> Self {
        Self::compare(field, CompareOp::Le, rhs)
    }

    pub fn contains(field: impl Into<String>, rhs: impl Into<Value>) -> Self {
        Self::compare(field, CompareOp::Contains, rhs)
    }

    pub fn not_contains(field: impl Into<String>, rhs: impl Into<Value>) -> Self {
        Self::compare(field, CompareOp::NotContains, rhs)
    }

    pub fn starts_with(field: impl Into<String>, rhs: impl Into<Value>) -> Self {
        Self::compare(field, CompareOp::StartsWith, rhs)
    }

    pub fn ends_with(field: impl Into<String>, rhs: impl Into<Value>) -> Self {
        Self::compare(field, CompareOp::EndsWith, rhs)
    }
}

impl fmt::Display for ExprCompare {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.field, self.op, self.rhs)
    }
}

impl From<ExprCompare> for Expr {
    fn from(value: ExprCompare) -> Self {
        Self::Compare(value)
    }
}
