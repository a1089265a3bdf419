use super::*;

use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Conjunction of two expressions
    And(ExprAnd),

    /// A single field comparison
    Compare(ExprCompare),

    /// Disjunction of two expressions
    Or(ExprOr),

    /// Evaluates to a constant value. The parser never produces this
    /// variant; the predicate compiler does, when a comparison collapses.
    Value(Value),
}

impl Expr {
    /// Returns true if the expression is the `true` boolean expression
    pub fn is_true(&self) -> bool {
        matches!(self, Self::Value(Value::Bool(true)))
    }

    /// Returns `true` if the expression is the `false` boolean expression
    pub fn is_false(&self) -> bool {
        matches!(self, Self::Value(Value::Bool(false)))
    }

    /// Returns true if the expression is a constant value.
    pub fn is_value(&self) -> bool {
        matches!(self, Self::Value(..))
    }

    /// Returns true if the expression is a field comparison.
    pub fn is_compare(&self) -> bool {
        matches!(self, Self::Compare(..))
    }

    fn fmt_operand(&self, f: &mut fmt::Formatter<'_>, inside_and: bool) -> fmt::Result {
        match self {
            Self::And(expr_and) => {
                expr_and.lhs.fmt_operand(f, true)?;
                f.write_str(",")?;
                expr_and.rhs.fmt_operand(f, true)
            }
            Self::Or(expr_or) => {
                // `,` binds tighter than `|`, so a disjunction nested in a
                // conjunction needs explicit grouping to re-parse.
                if inside_and {
                    f.write_str("(")?;
                }
                expr_or.lhs.fmt_operand(f, false)?;
                f.write_str("|")?;
                expr_or.rhs.fmt_operand(f, false)?;
                if inside_and {
                    f.write_str(")")?;
                }
                Ok(())
            }
            Self::Compare(compare) => write!(f, "{compare}"),
            Self::Value(value) => write!(f, "{value}"),
        }
    }
}

/// Renders the expression in filter DSL syntax.
///
/// Rendering a parsed tree and re-parsing it yields an equal tree.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_operand(f, false)
    }
}

// === Conversions ===

impl From<bool> for Expr {
    fn from(value: bool) -> Self {
        Self::Value(Value::from(value))
    }
}

impl From<Value> for Expr {
    fn from(value: Value) -> Self {
        Self::Value(value)
    }
}
