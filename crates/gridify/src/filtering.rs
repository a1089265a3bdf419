use crate::{FieldMapper, Mapping};
use gridify_core::{
    parse,
    stmt::{CompareOp, Expr, ExprCompare, Value},
    Error, Result,
};

use std::fmt;
use std::sync::Arc;

type Eval<T> = Box<dyn Fn(&T) -> bool + Send + Sync>;

/// A compiled filter.
///
/// Carries the bound expression tree (field names resolved, right-hand
/// literals parsed into their target types) for deferred-query backends,
/// and an evaluation closure for in-memory sources.
pub struct Predicate<T> {
    expr: Expr,
    eval: Arc<dyn Fn(&T) -> bool + Send + Sync>,
}

impl<T> Predicate<T> {
    /// The bound expression tree. Backend translators lower this to native
    /// query form.
    pub fn expr(&self) -> &Expr {
        &self.expr
    }

    pub fn test(&self, record: &T) -> bool {
        (self.eval)(record)
    }
}

impl<T> Clone for Predicate<T> {
    fn clone(&self) -> Self {
        Self {
            expr: self.expr.clone(),
            eval: self.eval.clone(),
        }
    }
}

impl<T> fmt::Debug for Predicate<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Predicate").field(&self.expr).finish()
    }
}

/// Parses and compiles a filter string against a mapper.
pub fn compile_filter<T: 'static>(filter: &str, mapper: &FieldMapper<T>) -> Result<Predicate<T>> {
    let expr = parse::parse_filter(filter)?;
    compile_expr(&expr, mapper)
}

/// Compiles an already parsed expression tree against a mapper.
pub fn compile_expr<T: 'static>(expr: &Expr, mapper: &FieldMapper<T>) -> Result<Predicate<T>> {
    let (bound, eval) = compile_node(expr, mapper)?;

    Ok(Predicate {
        expr: bound,
        eval: Arc::from(eval),
    })
}

fn compile_node<T: 'static>(expr: &Expr, mapper: &FieldMapper<T>) -> Result<(Expr, Eval<T>)> {
    match expr {
        Expr::Compare(compare) => compile_compare(compare, mapper),
        Expr::And(expr_and) => {
            let (lhs_expr, lhs_eval) = compile_node(&expr_and.lhs, mapper)?;
            let (rhs_expr, rhs_eval) = compile_node(&expr_and.rhs, mapper)?;

            Ok((
                Expr::and(lhs_expr, rhs_expr),
                Box::new(move |record| lhs_eval(record) && rhs_eval(record)),
            ))
        }
        Expr::Or(expr_or) => {
            let (lhs_expr, lhs_eval) = compile_node(&expr_or.lhs, mapper)?;
            let (rhs_expr, rhs_eval) = compile_node(&expr_or.rhs, mapper)?;

            Ok((
                Expr::or(lhs_expr, rhs_expr),
                Box::new(move |record| lhs_eval(record) || rhs_eval(record)),
            ))
        }
        Expr::Value(Value::Bool(constant)) => {
            let constant = *constant;
            Ok((constant.into(), Box::new(move |_| constant)))
        }
        Expr::Value(value) => Err(err_not_boolean(value)),
    }
}

fn err_not_boolean(value: &Value) -> Error {
    Error::from_args(format_args!(
        "filter expression must be boolean, found constant `{value}`"
    ))
}

fn compile_compare<T: 'static>(compare: &ExprCompare, mapper: &FieldMapper<T>) -> Result<(Expr, Eval<T>)> {
    let Some(mapping) = mapper.get_map(&compare.field) else {
        return Err(Error::unknown_field(&compare.field));
    };

    if !compare.op.supports(mapping.ty()) {
        return Err(Error::unsupported_operator(
            compare.op.symbol(),
            mapping.ty().to_string(),
        ));
    }

    // Membership tests compare against a single element, so a list-typed
    // mapping parses its literal as the element type.
    let target = mapping.ty().element();

    let rhs = match &compare.rhs {
        Value::String(raw) if !target.is_string() => match target.parse_value(raw) {
            Some(value) => value,
            // The literal does not fit the field's type: the comparison
            // collapses to a constant instead of failing.
            None => {
                let constant = compare.op.is_negated();
                return Ok((constant.into(), Box::new(move |_| constant)));
            }
        },
        value => value.clone(),
    };

    let bound = Expr::compare(compare.field.clone(), compare.op, rhs.clone());
    let eval = eval_compare(mapping.clone(), compare.op, rhs);

    Ok((bound, eval))
}

fn eval_compare<T: 'static>(mapping: Mapping<T>, op: CompareOp, rhs: Value) -> Eval<T> {
    Box::new(move |record| op.eval(&mapping.resolve(record), &rhs))
}
