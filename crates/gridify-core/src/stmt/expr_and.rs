use super::*;

#[derive(Debug, Clone, PartialEq)]
pub struct ExprAnd {
    pub lhs: Box<Expr>,
    pub rhs: Box<Expr>,
}

impl Expr {
    pub fn and(lhs: impl Into<Self>, rhs: impl Into<Self>) -> Self {
        let lhs = lhs.into();
        let rhs = rhs.into();

        // Constant operands fold away so collapsed comparisons simplify the
        // tree they land in.
        if lhs.is_true() {
            return rhs;
        }

        if rhs.is_true() {
            return lhs;
        }

        if lhs.is_false() || rhs.is_false() {
            return false.into();
        }

        ExprAnd {
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        }
        .into()
    }
}

impl From<ExprAnd> for Expr {
    fn from(value: ExprAnd) -> Self {
        Self::And(value)
    }
}
