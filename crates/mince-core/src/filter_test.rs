use super::{ConfigurationError, FieldFilter};
use crate::value::{Mapping, StructuredValue};

const NONE: Option<Vec<&str>> = None;

fn record() -> Mapping {
    let mut mapping = Mapping::new();
    mapping.insert("id".to_string(), StructuredValue::from(1i64));
    mapping.insert("name".to_string(), StructuredValue::from("x"));
    mapping.insert(
        "nested".to_string(),
        StructuredValue::from(serde_json::json!({"name": "inner"})),
    );
    mapping
}

#[test]
fn no_keys_means_no_filtering() {
    let filter = FieldFilter::from_options(NONE, NONE).expect("must build");
    assert_eq!(filter, FieldFilter::All);
    let original = record();
    assert_eq!(filter.select(&original).count(), original.len());
}

#[test]
fn both_filters_are_rejected() {
    let err = FieldFilter::from_options(Some(["a"]), Some(["b"])).expect_err("must reject");
    assert!(matches!(err, ConfigurationError::ConflictingFilters { .. }));
}

#[test]
fn empty_sets_are_treated_as_absent() {
    let filter = FieldFilter::from_options(Some(Vec::<String>::new()), Some(["b"])).expect("must build");
    assert!(matches!(filter, FieldFilter::Exclude(_)));
}

#[test]
fn include_keeps_only_listed_keys() {
    let filter = FieldFilter::from_options(Some(["id", "missing"]), NONE).expect("must build");
    let original = record();
    let kept = filter.select(&original).map(|(key, _)| key.as_str()).collect::<Vec<_>>();
    assert_eq!(kept, vec!["id"]);
}

#[test]
fn exclude_is_shallow() {
    let filter = FieldFilter::from_options(NONE, Some(["name"])).expect("must build");
    let original = record();
    let filtered = filter.select(&original).collect::<Vec<_>>();
    assert_eq!(
        filtered.iter().map(|(key, _)| key.as_str()).collect::<Vec<_>>(),
        vec!["id", "nested"]
    );
    let Some((_, StructuredValue::Mapping(nested))) = filtered.iter().find(|(key, _)| key.as_str() == "nested") else {
        panic!("nested mapping must survive");
    };
    assert!(nested.contains_key("name"));
}

#[test]
fn select_leaves_input_untouched() {
    let original = record();
    let filter = FieldFilter::from_options(Some(["id"]), NONE).expect("must build");
    assert_eq!(filter.select(&original).count(), 1);
    assert_eq!(original, record());
}

#[test]
fn select_borrows_values_instead_of_copying() {
    let original = record();
    let filter = FieldFilter::from_options(NONE, Some(["id"])).expect("must build");
    let (_, nested) = filter
        .select(&original)
        .find(|(key, _)| key.as_str() == "nested")
        .expect("nested kept");
    let stored = original.get("nested").expect("nested present");
    assert!(std::ptr::eq(nested, stored));
}
