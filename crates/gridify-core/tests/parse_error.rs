use gridify_core::parse::parse_filter;

// ---------------------------------------------------------------------------
// Empty input
// ---------------------------------------------------------------------------

#[test]
fn empty_filter() {
    let err = parse_filter("").unwrap_err();
    assert!(err.is_invalid_filter());
    assert_eq!(err.filter_offset(), Some(0));
}

#[test]
fn whitespace_only_filter() {
    let err = parse_filter("   ").unwrap_err();
    assert!(err.is_invalid_filter());
    // The run of spaces scans as an ident; the operator is what is missing.
    assert_eq!(err.filter_offset(), Some(3));
}

// ---------------------------------------------------------------------------
// Operators
// ---------------------------------------------------------------------------

#[test]
fn missing_operator() {
    let err = parse_filter("name").unwrap_err();
    assert!(err.is_invalid_filter());
    assert_eq!(err.filter_offset(), Some(4));
}

#[test]
fn unknown_operator() {
    let err = parse_filter("name=?John").unwrap_err();
    assert!(err.is_invalid_filter());
    assert_eq!(err.filter_offset(), Some(4));
}

#[test]
fn single_character_operator() {
    let err = parse_filter("name=John").unwrap_err();
    assert!(err.is_invalid_filter());
    assert_eq!(err.filter_offset(), Some(4));
}

#[test]
fn operator_without_field() {
    let err = parse_filter("==John").unwrap_err();
    assert!(err.is_invalid_filter());
    assert_eq!(err.filter_offset(), Some(0));
}

// ---------------------------------------------------------------------------
// Grouping
// ---------------------------------------------------------------------------

#[test]
fn unmatched_open_paren() {
    let err = parse_filter("(a==1").unwrap_err();
    assert!(err.is_invalid_filter());
    assert_eq!(err.filter_offset(), Some(0));
}

#[test]
fn unmatched_close_paren() {
    let err = parse_filter("a==1)").unwrap_err();
    assert!(err.is_invalid_filter());
    assert_eq!(err.filter_offset(), Some(4));
}

#[test]
fn empty_group() {
    let err = parse_filter("()").unwrap_err();
    assert!(err.is_invalid_filter());
    assert_eq!(err.filter_offset(), Some(1));
}

// ---------------------------------------------------------------------------
// Connectives
// ---------------------------------------------------------------------------

#[test]
fn trailing_and() {
    let err = parse_filter("a==1,").unwrap_err();
    assert!(err.is_invalid_filter());
    assert_eq!(err.filter_offset(), Some(5));
}

#[test]
fn trailing_or() {
    let err = parse_filter("a==1|").unwrap_err();
    assert!(err.is_invalid_filter());
    assert_eq!(err.filter_offset(), Some(5));
}

#[test]
fn leading_and() {
    let err = parse_filter(",a==1").unwrap_err();
    assert!(err.is_invalid_filter());
    assert_eq!(err.filter_offset(), Some(0));
}

#[test]
fn doubled_or() {
    let err = parse_filter("a==1||b==2").unwrap_err();
    assert!(err.is_invalid_filter());
    assert_eq!(err.filter_offset(), Some(5));
}

// ---------------------------------------------------------------------------
// Errors never yield partial predicates
// ---------------------------------------------------------------------------

#[test]
fn error_reports_the_whole_filter_invalid() {
    // A valid prefix does not survive a malformed tail.
    assert!(parse_filter("a==1,name").is_err());
    assert!(parse_filter("a==1|(b==2").is_err());
}
