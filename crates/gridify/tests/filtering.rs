mod support;

use gridify::stmt::{Expr, Value};
use gridify::{compile_filter, FieldMapper, Gridifiable, GridifyQuery, GridifyQueryable, Query};
use support::{ids, query, Person, JOHN_GUID};

fn filtered(filter: &str) -> Vec<Person> {
    query()
        .apply_filtering(&GridifyQuery::new().with_filter(filter))
        .unwrap()
        .to_list()
        .unwrap()
}

// ---------------------------------------------------------------------------
// Scenarios on the seed dataset
// ---------------------------------------------------------------------------

#[test]
fn equality_selects_single_record() {
    let matched = filtered("name==John");
    assert_eq!(ids(&matched), [1]);
}

#[test]
fn union_of_names_and_id_range() {
    let matched = filtered("name==Jack|name==Rose|id>>7");

    let mut expected = vec![2, 3];
    expected.extend(8..=22);
    assert_eq!(ids(&matched), expected);
}

#[test]
fn grouped_contains_with_id_bound() {
    let matched = filtered("(name=*J|name=*S),(id<<5)");
    assert_eq!(ids(&matched), [1, 2, 4]);
}

#[test]
fn malformed_guid_matches_nothing() {
    let matched = filtered("guid==e2cec5dd-208d-4bb5-a852-");
    assert!(matched.is_empty());
}

#[test]
fn malformed_guid_not_equal_matches_everything() {
    let matched = filtered("guid!=e2cec5dd-208d-4bb5-a852-");
    assert_eq!(matched.len(), 22);
}

#[test]
fn well_formed_guid_matches_its_record() {
    let matched = filtered(&format!("guid=={JOHN_GUID}"));
    assert_eq!(ids(&matched), [1]);
}

// ---------------------------------------------------------------------------
// Value collapse duality
// ---------------------------------------------------------------------------

#[test]
fn unparseable_number_collapses() {
    assert!(filtered("id==abc").is_empty());
    assert_eq!(filtered("id!=abc").len(), 22);
}

#[test]
fn unparseable_ordering_collapses_to_false() {
    assert!(filtered("id>>abc").is_empty());
    assert!(filtered("id<=abc").is_empty());
}

#[test]
fn collapse_folds_into_surrounding_tree() {
    // `id>>abc` is constantly false, so the conjunction is too.
    assert!(filtered("name==John,id>>abc").is_empty());
    // ...and a disjunction degrades to its other arm.
    assert_eq!(ids(&filtered("name==John|id>>abc")), [1]);
}

// ---------------------------------------------------------------------------
// Absent values
// ---------------------------------------------------------------------------

#[test]
fn null_guid_never_equals_a_literal() {
    // Only John and Rose carry a guid at all.
    let matched = filtered(&format!("guid=={JOHN_GUID}"));
    assert_eq!(matched.len(), 1);
}

#[test]
fn null_guid_satisfies_not_equal() {
    let matched = filtered(&format!("guid!={JOHN_GUID}"));
    assert_eq!(matched.len(), 21);
}

// ---------------------------------------------------------------------------
// String operators
// ---------------------------------------------------------------------------

#[test]
fn starts_with_on_seed() {
    assert_eq!(ids(&filtered("name^=Jo")), [1, 22]);
}

#[test]
fn ends_with_on_seed() {
    assert_eq!(ids(&filtered("name$=sh")), [22]);
}

#[test]
fn contains_is_case_sensitive() {
    // `S` matches Sara and Sam only; the lowercase `s` runs are not touched.
    assert_eq!(ids(&filtered("name=*S")), [4, 10]);
}

// ---------------------------------------------------------------------------
// List membership
// ---------------------------------------------------------------------------

#[test]
fn membership_on_string_list() {
    assert_eq!(ids(&filtered("tags=*staff")), [1, 2]);
    assert_eq!(ids(&filtered("tags=*admin")), [2]);
}

#[test]
fn negated_membership() {
    assert_eq!(filtered("tags!*staff").len(), 20);
}

// ---------------------------------------------------------------------------
// Field resolution
// ---------------------------------------------------------------------------

#[test]
fn field_names_are_case_insensitive_by_default() {
    assert_eq!(ids(&filtered("Name==John")), [1]);
    assert_eq!(ids(&filtered("NAME==John")), [1]);
}

#[test]
fn unknown_field_is_an_error() {
    let err = query()
        .apply_filtering(&GridifyQuery::new().with_filter("naem==John"))
        .unwrap_err();
    assert!(err.is_unknown_field());
    assert_eq!(err.field_name(), Some("naem"));
}

#[test]
fn unsupported_operator_is_an_error() {
    let err = query()
        .apply_filtering(&GridifyQuery::new().with_filter("id=*7"))
        .unwrap_err();
    assert!(err.is_unsupported_operator());
}

#[test]
fn parse_errors_surface() {
    let err = query()
        .apply_filtering(&GridifyQuery::new().with_filter("name=="))
        .map(|_| ())
        .err();
    // An empty value is legal; a missing operator is not.
    assert!(err.is_none());

    let err = query()
        .apply_filtering(&GridifyQuery::new().with_filter("name"))
        .unwrap_err();
    assert!(err.is_invalid_filter());
}

// ---------------------------------------------------------------------------
// Normaliser semantics
// ---------------------------------------------------------------------------

#[test]
fn normalizer_applies_to_accessor_output_only() {
    let mut mapper = FieldMapper::<Person>::new();
    mapper.add_map_with(
        "name",
        |person: &Person| person.name.clone(),
        |value| match value {
            Value::String(name) => Value::String(name.to_ascii_uppercase()),
            other => other,
        },
    );

    // The literal is compared as written, so it must already be folded.
    let upper = compile_filter("name==JOHN", &mapper).unwrap();
    assert_eq!(query().filter(upper).count().unwrap(), 1);

    // A mixed-case literal no longer matches anything: the normaliser never
    // touches the right-hand side.
    let mixed = compile_filter("name==John", &mapper).unwrap();
    assert_eq!(query().filter(mixed).count().unwrap(), 0);
}

// ---------------------------------------------------------------------------
// Bound trees
// ---------------------------------------------------------------------------

#[test]
fn predicate_exposes_bound_tree() {
    let mapper = Person::field_mapper();
    let predicate = compile_filter("id>>7", &mapper).unwrap();
    assert_eq!(predicate.expr(), &Expr::gt("id", Value::I64(7)));
}

#[test]
fn collapsed_predicate_binds_to_a_constant() {
    let mapper = Person::field_mapper();
    assert!(compile_filter("id==abc", &mapper).unwrap().expr().is_false());
    assert!(compile_filter("id!=abc", &mapper).unwrap().expr().is_true());
}
