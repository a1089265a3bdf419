use chrono::{TimeZone, Utc};
use gridify_core::stmt::{CompareOp, Type, Value};

fn s(value: &str) -> Value {
    Value::from(value)
}

// ---------------------------------------------------------------------------
// Eq / Ne
// ---------------------------------------------------------------------------

#[test]
fn eq_i64() {
    assert!(CompareOp::Eq.eval(&Value::I64(7), &Value::I64(7)));
    assert!(!CompareOp::Eq.eval(&Value::I64(7), &Value::I64(8)));
}

#[test]
fn eq_strings() {
    assert!(CompareOp::Eq.eval(&s("John"), &s("John")));
    assert!(!CompareOp::Eq.eval(&s("John"), &s("john")));
}

#[test]
fn ne_strings() {
    assert!(CompareOp::Ne.eval(&s("John"), &s("Jack")));
    assert!(!CompareOp::Ne.eval(&s("John"), &s("John")));
}

// ---------------------------------------------------------------------------
// Ordering
// ---------------------------------------------------------------------------

#[test]
fn ordering_i64() {
    assert!(CompareOp::Gt.eval(&Value::I64(8), &Value::I64(7)));
    assert!(!CompareOp::Gt.eval(&Value::I64(7), &Value::I64(7)));
    assert!(CompareOp::Ge.eval(&Value::I64(7), &Value::I64(7)));
    assert!(CompareOp::Lt.eval(&Value::I64(6), &Value::I64(7)));
    assert!(CompareOp::Le.eval(&Value::I64(7), &Value::I64(7)));
}

#[test]
fn ordering_strings_is_lexicographic() {
    assert!(CompareOp::Gt.eval(&s("b"), &s("a")));
    assert!(CompareOp::Lt.eval(&s("Z"), &s("a")));
    assert!(CompareOp::Gt.eval(&s("abc"), &s("ab")));
}

#[test]
fn ordering_datetimes() {
    let earlier = Value::DateTime(Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap());
    let later = Value::DateTime(Utc.with_ymd_and_hms(2023, 6, 1, 0, 0, 0).unwrap());
    assert!(CompareOp::Lt.eval(&earlier, &later));
    assert!(!CompareOp::Gt.eval(&earlier, &later));
}

#[test]
fn ordering_across_types_is_false() {
    assert!(!CompareOp::Gt.eval(&Value::I64(7), &s("7")));
    assert!(!CompareOp::Lt.eval(&Value::I64(7), &s("7")));
}

// ---------------------------------------------------------------------------
// String operators
// ---------------------------------------------------------------------------

#[test]
fn contains_substring() {
    assert!(CompareOp::Contains.eval(&s("John"), &s("oh")));
    assert!(!CompareOp::Contains.eval(&s("John"), &s("x")));
    assert!(CompareOp::NotContains.eval(&s("John"), &s("x")));
}

#[test]
fn starts_and_ends() {
    assert!(CompareOp::StartsWith.eval(&s("John"), &s("Jo")));
    assert!(!CompareOp::StartsWith.eval(&s("John"), &s("oh")));
    assert!(CompareOp::EndsWith.eval(&s("John"), &s("hn")));
    assert!(!CompareOp::EndsWith.eval(&s("John"), &s("Jo")));
}

#[test]
fn empty_needle_always_matches() {
    assert!(CompareOp::Contains.eval(&s("John"), &s("")));
    assert!(CompareOp::StartsWith.eval(&s("John"), &s("")));
}

// ---------------------------------------------------------------------------
// List membership
// ---------------------------------------------------------------------------

#[test]
fn contains_is_membership_on_lists() {
    let tags = Value::List(vec![s("staff"), s("admin")]);
    assert!(CompareOp::Contains.eval(&tags, &s("staff")));
    assert!(!CompareOp::Contains.eval(&tags, &s("ops")));
    assert!(CompareOp::NotContains.eval(&tags, &s("ops")));
}

#[test]
fn membership_on_empty_list() {
    let tags = Value::List(vec![]);
    assert!(!CompareOp::Contains.eval(&tags, &s("staff")));
    assert!(CompareOp::NotContains.eval(&tags, &s("staff")));
}

// ---------------------------------------------------------------------------
// Absent left-hand side
// ---------------------------------------------------------------------------

#[test]
fn null_lhs_matches_only_ne() {
    for op in [
        CompareOp::Eq,
        CompareOp::Gt,
        CompareOp::Lt,
        CompareOp::Ge,
        CompareOp::Le,
        CompareOp::Contains,
        CompareOp::NotContains,
        CompareOp::StartsWith,
        CompareOp::EndsWith,
    ] {
        assert!(!op.eval(&Value::Null, &s("x")), "{op} on null should be false");
    }

    assert!(CompareOp::Ne.eval(&Value::Null, &s("x")));
}

// ---------------------------------------------------------------------------
// Supported target types
// ---------------------------------------------------------------------------

#[test]
fn substring_operators_require_strings() {
    assert!(CompareOp::Contains.supports(&Type::String));
    assert!(CompareOp::Contains.supports(&Type::list(Type::String)));
    assert!(!CompareOp::Contains.supports(&Type::I64));
    assert!(!CompareOp::StartsWith.supports(&Type::list(Type::String)));
    assert!(!CompareOp::EndsWith.supports(&Type::Uuid));
}

#[test]
fn lists_support_membership_only() {
    let tags = Type::list(Type::String);
    assert!(CompareOp::NotContains.supports(&tags));
    assert!(!CompareOp::Eq.supports(&tags));
    assert!(!CompareOp::Gt.supports(&tags));
}

#[test]
fn collapse_polarity() {
    assert!(CompareOp::Ne.is_negated());
    assert!(CompareOp::NotContains.is_negated());
    assert!(!CompareOp::Eq.is_negated());
    assert!(!CompareOp::Contains.is_negated());
    assert!(!CompareOp::Gt.is_negated());
}
