use super::StructuralDigest;
use crate::coercion::opaque_coercion;
use crate::filter::{ConfigurationError, FieldFilter};
use crate::stable_hash::sha256_hex;
use crate::stable_json::EncodingError;
use crate::value::{Mapping, ScalarEnum, StructuredValue};
use chrono::{DateTime, FixedOffset, NaiveDate, Utc};
use serde_json::{json, Value};
use std::collections::BTreeSet;

const NO_KEYS: Option<Vec<String>> = None;

fn mapping(value: Value) -> Mapping {
    match StructuredValue::from(value) {
        StructuredValue::Mapping(mapping) => mapping,
        other => panic!("expected mapping, got {}", other.kind()),
    }
}

fn plain() -> StructuralDigest {
    StructuralDigest::configure(NO_KEYS, NO_KEYS).expect("must configure")
}

#[derive(Debug, Clone, Copy)]
enum Status {
    Active,
}

impl ScalarEnum for Status {
    fn type_name(&self) -> &'static str {
        "Status"
    }

    fn member_name(&self) -> &'static str {
        match self {
            Status::Active => "ACTIVE",
        }
    }

    fn scalar(&self) -> Value {
        match self {
            Status::Active => json!(1),
        }
    }
}

#[test]
fn configure_rejects_include_and_exclude_together() {
    let err = StructuralDigest::configure(Some(["a"]), Some(["b"])).expect_err("must reject");
    assert_eq!(
        err,
        ConfigurationError::ConflictingFilters {
            include: BTreeSet::from(["a".to_string()]),
            exclude: BTreeSet::from(["b".to_string()]),
        }
    );
}

#[test]
fn key_order_does_not_change_digest() {
    let mut left = Mapping::new();
    left.insert("b".to_string(), StructuredValue::from(1i64));
    left.insert("a".to_string(), StructuredValue::from(2i64));
    let mut right = Mapping::new();
    right.insert("a".to_string(), StructuredValue::from(2i64));
    right.insert("b".to_string(), StructuredValue::from(1i64));

    let digest = plain();
    assert_eq!(
        digest.digest(&left).expect("left"),
        digest.digest(&right).expect("right")
    );
}

#[test]
fn nested_key_order_does_not_change_digest() {
    let mut inner_left = Mapping::new();
    inner_left.insert("y".to_string(), StructuredValue::from("y"));
    inner_left.insert("x".to_string(), StructuredValue::from("x"));
    let mut inner_right = Mapping::new();
    inner_right.insert("x".to_string(), StructuredValue::from("x"));
    inner_right.insert("y".to_string(), StructuredValue::from("y"));

    let mut left = Mapping::new();
    left.insert("inner".to_string(), StructuredValue::Mapping(inner_left));
    let mut right = Mapping::new();
    right.insert("inner".to_string(), StructuredValue::Mapping(inner_right));

    let digest = plain();
    assert_eq!(digest.digest(&left).expect("left"), digest.digest(&right).expect("right"));
}

#[test]
fn include_filter_ignores_other_keys() {
    let digest = StructuralDigest::configure(Some(["id"]), NO_KEYS).expect("must configure");
    assert_eq!(
        digest.digest(&mapping(json!({"id": 1, "name": "x"}))).expect("full"),
        digest.digest(&mapping(json!({"id": 1}))).expect("partial")
    );
}

#[test]
fn exclude_filter_ignores_listed_keys() {
    let digest = StructuralDigest::configure(NO_KEYS, Some(["name"])).expect("must configure");
    assert_eq!(
        digest.digest(&mapping(json!({"id": 1, "name": "x"}))).expect("full"),
        digest.digest(&mapping(json!({"id": 1}))).expect("partial")
    );
}

#[test]
fn filtered_digest_matches_unfiltered_digest_of_same_content() {
    let filtered = StructuralDigest::configure(Some(["id"]), NO_KEYS).expect("must configure");
    assert_eq!(
        filtered.digest(&mapping(json!({"id": 1, "name": "x"}))).expect("filtered"),
        plain().digest(&mapping(json!({"id": 1}))).expect("plain")
    );
}

#[test]
fn distinct_inputs_produce_distinct_digests() {
    let inputs = [
        json!({}),
        json!({"a": 1}),
        json!({"a": "1"}),
        json!({"a": 1.0}),
        json!({"a": [1, 2]}),
        json!({"a": [2, 1]}),
        json!({"a": null}),
        json!({"a": false}),
        json!({"b": 1}),
        json!({"a": {"b": 1}}),
        json!({"a": 1, "b": 1}),
    ];
    let digest = plain();
    let digests = inputs
        .into_iter()
        .map(|input| digest.digest(&mapping(input)).expect("digest"))
        .collect::<BTreeSet<_>>();
    assert_eq!(digests.len(), 11);
}

#[test]
fn same_instant_with_same_rendering_digests_identically() {
    let from_utc: DateTime<Utc> = DateTime::parse_from_rfc3339("2023-02-17T08:00:00Z")
        .expect("must parse")
        .with_timezone(&Utc);
    let from_fixed: DateTime<FixedOffset> =
        DateTime::parse_from_rfc3339("2023-02-17T08:00:00+00:00").expect("must parse");

    let mut left = Mapping::new();
    left.insert("at".to_string(), StructuredValue::from(from_utc));
    let mut right = Mapping::new();
    right.insert("at".to_string(), StructuredValue::from(from_fixed));

    let digest = plain();
    assert_eq!(digest.digest(&left).expect("left"), digest.digest(&right).expect("right"));
}

#[test]
fn timestamp_digests_like_its_iso_string() {
    let stamp = NaiveDate::from_ymd_opt(2022, 10, 31)
        .and_then(|date| date.and_hms_micro_opt(9, 5, 1, 42))
        .expect("valid date");
    let mut with_stamp = Mapping::new();
    with_stamp.insert("at".to_string(), StructuredValue::from(stamp));

    let digest = plain();
    assert_eq!(
        digest.digest(&with_stamp).expect("stamp"),
        digest
            .digest(&mapping(json!({"at": "2022-10-31T09:05:01.000042"})))
            .expect("string")
    );
}

#[test]
fn enum_digests_like_its_underlying_value() {
    let mut with_enum = Mapping::new();
    with_enum.insert("status".to_string(), StructuredValue::from_enum(&Status::Active));

    let digest = plain();
    assert_eq!(
        digest.digest(&with_enum).expect("enum"),
        digest.digest(&mapping(json!({"status": 1}))).expect("scalar")
    );
    assert_ne!(
        digest.digest(&with_enum).expect("enum"),
        digest.digest(&mapping(json!({"status": "ACTIVE"}))).expect("name")
    );
}

#[test]
fn unsupported_value_raises_encoding_error() {
    struct Handle;
    let mut value = Mapping::new();
    value.insert("handle".to_string(), StructuredValue::opaque(Handle));

    let err = plain().digest(&value).expect_err("must reject");
    assert!(matches!(err, EncodingError::Unsupported { .. }));
    assert_eq!(err.path().map(ToString::to_string).as_deref(), Some("$.handle"));
}

#[test]
fn excluded_unsupported_value_is_never_encoded() {
    struct Handle;
    let mut value = Mapping::new();
    value.insert("id".to_string(), StructuredValue::from(7i64));
    value.insert("handle".to_string(), StructuredValue::opaque(Handle));

    let digest = StructuralDigest::configure(NO_KEYS, Some(["handle"])).expect("must configure");
    assert!(digest.digest(&value).is_ok());
}

#[test]
fn registered_coercion_extends_supported_types() {
    struct Money(i64);
    let digest = StructuralDigest::with_filter(FieldFilter::All)
        .with_coercion(opaque_coercion("money", |money: &Money| json!(money.0.to_string())));

    let mut value = Mapping::new();
    value.insert("amount".to_string(), StructuredValue::opaque(Money(1250)));
    assert_eq!(
        digest.canonical_json(&value).expect("must encode"),
        r#"{"amount":"1250"}"#
    );
}

#[test]
fn canonical_digest_hashes_the_returned_text() {
    let digest = StructuralDigest::configure(NO_KEYS, Some(["skip"])).expect("must configure");
    let record = mapping(json!({"b": [1, {"d": 2, "c": 3}], "a": "é", "skip": true}));

    let (hash, canonical) = digest.canonical_digest(&record).expect("must encode");
    assert_eq!(canonical, r#"{"a":"é","b":[1,{"c":3,"d":2}]}"#);
    assert_eq!(hash, sha256_hex(canonical.as_bytes()));
    assert_eq!(hash, digest.digest(&record).expect("digest"));
    assert_eq!(canonical, digest.canonical_json(&record).expect("canonical"));
}

#[test]
fn digest_can_be_shared_across_threads() {
    let digest = std::sync::Arc::new(plain());
    let expected = digest.digest(&mapping(json!({"a": 1}))).expect("digest");
    let handles = (0..4)
        .map(|_| {
            let digest = std::sync::Arc::clone(&digest);
            std::thread::spawn(move || digest.digest(&mapping(json!({"a": 1}))).expect("digest"))
        })
        .collect::<Vec<_>>();
    for handle in handles {
        assert_eq!(handle.join().expect("thread"), expected);
    }
}
