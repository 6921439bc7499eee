use crate::{
    cursor::{Cursor, CursorDecodeError, CursorError, TokenWireError},
    query::{Boundary, FilterError, ListError, PaginateError, Predicate},
    session::Session,
    sort::{SortError, SortSpec},
    store::MemoryStore,
    test_support::{Person, seed_people},
    value::Value,
};

#[test]
fn execute_requires_explicit_count() {
    let store = MemoryStore::new();
    let session = Session::new(&store);

    let err = session
        .list::<Person>()
        .execute()
        .expect_err("missing count should be rejected");

    assert!(matches!(err, ListError::CountRequired));
}

#[test]
fn execute_rejects_zero_count() {
    let store = MemoryStore::new();
    let session = Session::new(&store);

    let err = session
        .list::<Person>()
        .count(0)
        .execute()
        .expect_err("zero count should be rejected");

    assert!(matches!(
        err,
        ListError::Paginate(PaginateError::InvalidCount)
    ));
}

#[test]
fn execute_rejects_invalid_hex_cursor_token() {
    let store = MemoryStore::new();
    let session = Session::new(&store);

    let err = session
        .list::<Person>()
        .count(1)
        .cursor("zz")
        .execute()
        .expect_err("invalid hex cursor should fail at the API boundary");

    assert!(matches!(
        err,
        ListError::Cursor(CursorError::Token(CursorDecodeError::InvalidHex {
            position: 1
        }))
    ));
}

#[test]
fn execute_rejects_odd_length_cursor_token() {
    let store = MemoryStore::new();
    let session = Session::new(&store);

    let err = session
        .list::<Person>()
        .count(1)
        .cursor("abc")
        .execute()
        .expect_err("odd-length cursor should fail at the API boundary");

    assert!(matches!(
        err,
        ListError::Cursor(CursorError::Token(CursorDecodeError::OddLength))
    ));
}

#[test]
fn execute_rejects_empty_cursor_token() {
    let store = MemoryStore::new();
    let session = Session::new(&store);

    let err = session
        .list::<Person>()
        .count(1)
        .cursor("   ")
        .execute()
        .expect_err("empty cursor should fail at the API boundary");

    assert!(matches!(
        err,
        ListError::Cursor(CursorError::Token(CursorDecodeError::Empty))
    ));
}

#[test]
fn execute_rejects_non_token_cursor_payload() {
    let store = MemoryStore::new();
    let session = Session::new(&store);

    let err = session
        .list::<Person>()
        .count(1)
        .cursor("00")
        .execute()
        .expect_err("non-token cursor payload should fail at the API boundary");

    assert!(matches!(
        err,
        ListError::Cursor(CursorError::Wire(TokenWireError::Decode(_)))
    ));
}

#[test]
fn execute_rejects_cursor_combined_with_explicit_boundary() {
    let store = MemoryStore::new();
    seed_people(&store);
    let session = Session::new(&store);

    let token = session
        .list::<Person>()
        .count(10)
        .execute()
        .expect("first page should succeed")
        .next()
        .expect("100 rows should paginate")
        .token()
        .to_string();

    let err = session
        .list::<Person>()
        .count(10)
        .cursor(token)
        .start(Boundary::Offset(Value::Uint(5)))
        .execute()
        .expect_err("cursor plus explicit boundary should be rejected");

    assert!(matches!(err, ListError::ConflictingBoundary));
}

#[test]
fn execute_rejects_unknown_sort_field() {
    let store = MemoryStore::new();
    let session = Session::new(&store);

    let err = session
        .list::<Person>()
        .sort(SortSpec::new().key("no_such_field", "asc"))
        .count(10)
        .execute()
        .expect_err("unknown sort field should fail during validation");

    assert!(matches!(
        err,
        ListError::Sort(SortError::UnknownField { ref field }) if field == "no_such_field"
    ));
}

#[test]
fn execute_enforces_sortable_allow_list() {
    let store = MemoryStore::new();
    let session = Session::new(&store);

    let err = session
        .list::<Person>()
        .sort_by("city", "asc")
        .count(10)
        .execute()
        .expect_err("non-sortable field should fail during validation");

    assert!(matches!(
        err,
        ListError::Sort(SortError::FieldNotSortable { ref field }) if field == "city"
    ));
}

#[test]
fn execute_rejects_malformed_direction_token() {
    let store = MemoryStore::new();
    let session = Session::new(&store);

    let err = session
        .list::<Person>()
        .sort_by("name", "sideways")
        .count(10)
        .execute()
        .expect_err("bad direction token should fail during validation");

    assert!(matches!(
        err,
        ListError::Sort(SortError::InvalidDirection { ref token, .. }) if token == "sideways"
    ));
}

#[test]
fn execute_enforces_filterable_allow_list() {
    let store = MemoryStore::new();
    let session = Session::new(&store);

    let err = session
        .list::<Person>()
        .filter(Predicate::eq("id", 1u64))
        .count(10)
        .execute()
        .expect_err("non-filterable field should fail during validation");

    assert!(matches!(
        err,
        ListError::Filter(FilterError::FieldNotFilterable { ref field }) if field == "id"
    ));
}

#[test]
fn execute_rejects_unknown_filter_field() {
    let store = MemoryStore::new();
    let session = Session::new(&store);

    let err = session
        .list::<Person>()
        .filter(Predicate::eq("ghost", 1u64))
        .count(10)
        .execute()
        .expect_err("unknown filter field should fail during validation");

    assert!(matches!(
        err,
        ListError::Filter(FilterError::UnknownField { ref field }) if field == "ghost"
    ));
}

#[test]
fn direct_cursor_boundary_skips_signature_but_not_shape_checks() {
    let store = MemoryStore::new();
    seed_people(&store);
    let session = Session::new(&store);

    // A hand-built cursor with the wrong shape is caught by the builder.
    let err = session
        .list::<Person>()
        .count(10)
        .start(Boundary::Cursor(Cursor::new(vec![(
            "name".to_string(),
            Value::Text("Person 050".to_string()),
        )])))
        .execute()
        .expect_err("mis-shaped direct cursor should be rejected");

    assert!(matches!(
        err,
        ListError::Paginate(PaginateError::InvalidBoundaryType { .. })
    ));
}
