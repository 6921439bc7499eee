use crate::{
    sort::{OrderDirection, OrderSpec, SortError, SortSpec, validate},
    test_support::{PAIR_MODEL, PERSON_MODEL},
};

#[test]
fn direction_tokens_normalize_case_and_whitespace() {
    assert_eq!(
        OrderDirection::parse_token("  ASC "),
        Some(OrderDirection::Asc)
    );
    assert_eq!(
        OrderDirection::parse_token("Desc"),
        Some(OrderDirection::Desc)
    );
    assert_eq!(OrderDirection::parse_token("ascending"), None);
    assert_eq!(OrderDirection::parse_token(""), None);
}

#[test]
fn validate_preserves_declaration_order_without_dedup() {
    let spec = SortSpec::from_pairs([("name", "desc"), ("id", "asc"), ("name", "asc")]);
    let order = validate(&spec, &PERSON_MODEL).expect("spec should validate");

    assert_eq!(
        order.fields,
        vec![
            ("name".to_string(), OrderDirection::Desc),
            ("id".to_string(), OrderDirection::Asc),
            ("name".to_string(), OrderDirection::Asc),
        ]
    );
}

#[test]
fn validate_rejects_bad_direction_token() {
    let spec = SortSpec::new().key("name", "descending");
    let err = validate(&spec, &PERSON_MODEL).expect_err("bad token should be rejected");

    assert_eq!(
        err,
        SortError::InvalidDirection {
            field: "name".to_string(),
            token: "descending".to_string(),
        }
    );
}

#[test]
fn validate_rejects_unknown_field() {
    let spec = SortSpec::new().key("no_such_field", "asc");
    let err = validate(&spec, &PERSON_MODEL).expect_err("unknown field should be rejected");

    assert_eq!(
        err,
        SortError::UnknownField {
            field: "no_such_field".to_string(),
        }
    );
}

#[test]
fn validate_enforces_sortable_allow_list() {
    // `city` is a declared field but absent from the sortable allow-list.
    let spec = SortSpec::new().key("city", "asc");
    let err = validate(&spec, &PERSON_MODEL).expect_err("allow-list should be enforced");

    assert_eq!(
        err,
        SortError::FieldNotSortable {
            field: "city".to_string(),
        }
    );
}

#[test]
fn validate_bounds_key_count() {
    let spec = SortSpec::from_pairs((0..9).map(|_| ("id", "asc")));
    let err = validate(&spec, &PERSON_MODEL).expect_err("oversized spec should be rejected");

    assert!(matches!(err, SortError::TooManyKeys { found: 9, .. }));
}

#[test]
fn empty_spec_validates_to_empty_order() {
    let order = validate(&SortSpec::new(), &PERSON_MODEL).expect("empty spec should validate");

    assert!(order.is_empty());
    assert!(order.leading().is_none());
}

#[test]
fn primary_key_order_covers_compound_shapes() {
    let order = OrderSpec::primary_key(&PAIR_MODEL);

    assert_eq!(
        order.fields,
        vec![
            ("field1".to_string(), OrderDirection::Asc),
            ("field2".to_string(), OrderDirection::Asc),
        ]
    );
    assert_eq!(order.leading(), Some(("field1", OrderDirection::Asc)));
}
