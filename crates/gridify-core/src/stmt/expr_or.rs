use super::*;

#[derive(Debug, Clone, PartialEq)]
pub struct ExprOr {
    pub lhs: Box<Expr>,
    pub rhs: Box<Expr>,
}

impl Expr {
    pub fn or(lhs: impl Into<Self>, rhs: impl Into<Self>) -> Self {
        let lhs = lhs.into();
        let rhs = rhs.into();

        if lhs.is_false() {
            return rhs;
        }

        if rhs.is_false() {
            return lhs;
        }

        if lhs.is_true() || rhs.is_true() {
            return true.into();
        }

        ExprOr {
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        }
        .into()
    }
}

impl From<ExprOr> for Expr {
    fn from(value: ExprOr) -> Self {
        Self::Or(value)
    }
}
