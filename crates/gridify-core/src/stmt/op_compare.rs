use super::{Type, Value};

use std::cmp::Ordering;
use std::fmt;

#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub enum CompareOp {
    Eq,
    Ne,
    Gt,
    Lt,
    Ge,
    Le,
    Contains,
    NotContains,
    StartsWith,
    EndsWith,
}

impl CompareOp {
    /// The operator's two-character DSL spelling.
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Eq => "==",
            Self::Ne => "!=",
            Self::Gt => ">>",
            Self::Lt => "<<",
            Self::Ge => ">=",
            Self::Le => "<=",
            Self::Contains => "=*",
            Self::NotContains => "!*",
            Self::StartsWith => "^=",
            Self::EndsWith => "$=",
        }
    }

    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Some(match symbol {
            "==" => Self::Eq,
            "!=" => Self::Ne,
            ">>" => Self::Gt,
            "<<" => Self::Lt,
            ">=" => Self::Ge,
            "<=" => Self::Le,
            "=*" => Self::Contains,
            "!*" => Self::NotContains,
            "^=" => Self::StartsWith,
            "$=" => Self::EndsWith,
            _ => return None,
        })
    }

    pub fn is_eq(self) -> bool {
        matches!(self, Self::Eq)
    }

    pub fn is_ne(self) -> bool {
        matches!(self, Self::Ne)
    }

    /// Negated operators collapse to a constantly-true predicate when their
    /// right-hand literal fails to parse; all others collapse to false.
    pub const fn is_negated(self) -> bool {
        matches!(self, Self::Ne | Self::NotContains)
    }

    pub const fn is_ordering(self) -> bool {
        matches!(self, Self::Gt | Self::Lt | Self::Ge | Self::Le)
    }

    /// Whether the operator can be compiled against a field of type `ty`.
    pub fn supports(self, ty: &Type) -> bool {
        match self {
            Self::Eq | Self::Ne => !ty.is_list(),
            Self::Gt | Self::Lt | Self::Ge | Self::Le => !ty.is_list(),
            Self::Contains | Self::NotContains => ty.is_string() || ty.is_list(),
            Self::StartsWith | Self::EndsWith => ty.is_string(),
        }
    }

    /// Applies the operator to two values.
    ///
    /// Total: an absent left-hand side matches only `!=`, and pairs without a
    /// defined ordering compare false. Type mismatches are caught at compile
    /// time, not here.
    pub fn eval(self, lhs: &Value, rhs: &Value) -> bool {
        if lhs.is_null() {
            return self.is_ne();
        }

        match self {
            Self::Eq => lhs == rhs,
            Self::Ne => lhs != rhs,
            Self::Gt => matches!(lhs.partial_cmp(rhs), Some(Ordering::Greater)),
            Self::Ge => matches!(
                lhs.partial_cmp(rhs),
                Some(Ordering::Greater | Ordering::Equal)
            ),
            Self::Lt => matches!(lhs.partial_cmp(rhs), Some(Ordering::Less)),
            Self::Le => matches!(lhs.partial_cmp(rhs), Some(Ordering::Less | Ordering::Equal)),
            Self::Contains => contains(lhs, rhs),
            Self::NotContains => !contains(lhs, rhs),
            Self::StartsWith => match (lhs, rhs) {
                (Value::String(lhs), Value::String(rhs)) => lhs.starts_with(rhs.as_str()),
                _ => false,
            },
            Self::EndsWith => match (lhs, rhs) {
                (Value::String(lhs), Value::String(rhs)) => lhs.ends_with(rhs.as_str()),
                _ => false,
            },
        }
    }
}

/// Substring match for strings, element membership for lists.
fn contains(lhs: &Value, rhs: &Value) -> bool {
    match (lhs, rhs) {
        (Value::String(lhs), Value::String(rhs)) => lhs.contains(rhs.as_str()),
        (Value::List(items), needle) => items.iter().any(|item| item == needle),
        _ => false,
    }
}

impl fmt::Display for CompareOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.symbol().fmt(f)
    }
}

impl fmt::Debug for CompareOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
