mod direction;
pub use direction::Direction;

mod expr;
pub use expr::Expr;

mod expr_and;
pub use expr_and::ExprAnd;

mod expr_compare;
pub use expr_compare::ExprCompare;

mod expr_or;
pub use expr_or::ExprOr;

mod op_compare;
pub use op_compare::CompareOp;

mod order_by;
pub use order_by::OrderBy;

mod ty;
pub use ty::Type;

mod value;
pub use value::Value;

mod value_cmp;
